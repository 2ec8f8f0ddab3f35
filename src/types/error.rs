//! Error types for treesync

use super::{Side, Transfer};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for treesync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A root path could not be made absolute. Fatal for the run.
    #[error("failed resolving {side} path {}: {source}", path.display())]
    PathResolution {
        side: Side,
        path: PathBuf,
        source: io::Error,
    },

    /// The walk of a root failed as a whole (root missing, unreadable, not a directory)
    #[error("failed walking {side} directory {}: {source}", path.display())]
    Walk {
        side: Side,
        path: PathBuf,
        source: io::Error,
    },

    /// A single entry could not be read during a walk
    #[error("failed accessing path {}: {source}", path.display())]
    Access { path: PathBuf, source: io::Error },

    /// A walked path did not lie under its root
    #[error("failed getting relative path for {side} file {}", path.display())]
    RelativePath { side: Side, path: PathBuf },

    /// Target metadata was unreadable for a reason other than absence
    #[error("failed accessing target file info {}: {source}", path.display())]
    TargetMetadata { path: PathBuf, source: io::Error },

    /// Parent directories of a destination could not be created
    #[error("failed to create parent directories {}: {source}", path.display())]
    CreateDirs { path: PathBuf, source: io::Error },

    /// Content transfer failed
    #[error("failed {transfer} file {} to {}: {source}", src.display(), dst.display())]
    Copy {
        transfer: Transfer,
        src: PathBuf,
        dst: PathBuf,
        source: io::Error,
    },

    /// Removing a target file failed
    #[error("failed deleting file {}: {source}", path.display())]
    Delete { path: PathBuf, source: io::Error },

    /// The log sink could not be opened, written, or flushed
    #[error("log sink error for {}: {source}", path.display())]
    Log { path: PathBuf, source: io::Error },
}

impl SyncError {
    /// Check if this error aborts a whole run rather than a single file
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SyncError::PathResolution { .. } | SyncError::Walk { .. } | SyncError::Config(_)
        )
    }

    /// Check if this error is related to permissions
    pub fn is_permission_error(&self) -> bool {
        self.io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied)
    }

    /// The underlying IO error, if any
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            SyncError::Io(source)
            | SyncError::PathResolution { source, .. }
            | SyncError::Walk { source, .. }
            | SyncError::Access { source, .. }
            | SyncError::TargetMetadata { source, .. }
            | SyncError::CreateDirs { source, .. }
            | SyncError::Copy { source, .. }
            | SyncError::Delete { source, .. }
            | SyncError::Log { source, .. } => Some(source),
            SyncError::Config(_) | SyncError::RelativePath { .. } => None,
        }
    }
}
