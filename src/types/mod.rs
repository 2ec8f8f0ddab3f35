//! Core type definitions for treesync

mod action;
mod entry;
mod error;
mod report;
mod side;
mod tree;

pub use action::{SyncDecision, Transfer};
pub use entry::{mode_bits, FileEntry};
pub use error::SyncError;
pub use report::SyncReport;
pub use side::Side;
pub use tree::FileTree;
