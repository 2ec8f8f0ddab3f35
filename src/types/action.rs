//! SyncDecision - What the reconciliation pass does with one source file

use std::fmt;
use std::io;

/// Decision taken for a single source entry after looking at the target
#[derive(Debug)]
pub enum SyncDecision {
    /// Target file is missing
    Create,

    /// Target file exists but size, mode, or mtime differ
    Update,

    /// Target file matches the source metadata
    Skip,

    /// Target metadata could not be read for a reason other than absence
    Inaccessible(io::Error),
}

impl SyncDecision {
    pub fn is_skip(&self) -> bool {
        matches!(self, SyncDecision::Skip)
    }
}

/// Kind of copy performed on the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    Create,
    Update,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transfer::Create => f.write_str("copying"),
            Transfer::Update => f.write_str("updating"),
        }
    }
}
