//! # treesync - One-way directory synchronization
//!
//! Makes a target tree mirror a source tree: new files are copied, files whose
//! size, mode, or mtime (to the second) differ are overwritten, and optionally
//! target files with no source counterpart are deleted. Every outcome is
//! reported through a [`Logger`] supplied by the caller.
//!
//! ```no_run
//! use treesync::logger::MemoryLogger;
//!
//! let mut logger = MemoryLogger::new();
//! let report = treesync::synchronize("photos", "/mnt/backup/photos", true, &mut logger)?;
//! println!("{} copied, {} updated", report.created, report.updated);
//! # Ok::<(), treesync::SyncError>(())
//! ```

pub mod commands;
pub mod config;
pub mod diff;
pub mod executor;
pub mod logger;
pub mod scanner;
pub mod types;
pub mod ui;

pub use config::Config;
pub use logger::Logger;
pub use types::{FileEntry, FileTree, SyncDecision, SyncError, SyncReport};

use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Synchronize `target` to match `source`
///
/// Per-file failures are recorded through `logger` and counted in the report;
/// only fatal conditions (an unresolvable root, an unwalkable source) come back
/// as `Err`.
pub fn synchronize(
    source: impl AsRef<Path>,
    target: impl AsRef<Path>,
    delete_missing: bool,
    logger: &mut dyn Logger,
) -> Result<SyncReport, SyncError> {
    let config = Config {
        delete_missing,
        ..Config::new(source.as_ref(), target.as_ref())
    };
    commands::sync::run(&config, logger)
}
