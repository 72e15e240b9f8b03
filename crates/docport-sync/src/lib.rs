//! Mirror documentation sources into another site generator's input tree.
//!
//! The pipeline is selector → filter → copier: list the files git knows about,
//! drop the ones under excluded prefixes, then copy the rest preserving their
//! relative layout.

pub mod copy;
pub mod error;
pub mod filter;
pub mod git;

pub use copy::{copy_files, copy_tracked_files, CopyReport};
pub use error::SyncError;
pub use filter::{filter_excluded_files, relative_key};
pub use git::{git_tracked_and_untracked_files, git_tracked_files};
