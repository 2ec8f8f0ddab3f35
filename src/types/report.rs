//! SyncReport - Outcome counters for one synchronization run

use std::time::Duration;

/// Per-run statistics returned by the synchronizer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Files copied because they were missing in the target
    pub created: usize,
    /// Files overwritten because their metadata differed
    pub updated: usize,
    /// Files left alone because their metadata matched
    pub skipped: usize,
    /// Target files removed by the delete-missing pass
    pub deleted: usize,
    /// Errors recorded through the logger
    pub errors: usize,
    /// Warnings recorded through the logger (metadata preservation failures)
    pub warnings: usize,
    /// Content bytes written to the target
    pub bytes_copied: u64,
    /// Time spent enumerating the source
    pub scan_duration: Duration,
}

impl SyncReport {
    /// True when no error was recorded during the run
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }

    /// Number of Create + Update operations that succeeded
    pub fn transferred(&self) -> usize {
        self.created + self.updated
    }
}
