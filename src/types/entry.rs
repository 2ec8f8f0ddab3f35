//! FileEntry - Metadata snapshot of one regular file under a sync root

use std::fs::Metadata;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

/// Represents a regular file found while scanning a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Relative path from sync root
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,

    /// Last modification time
    pub mtime: SystemTime,

    /// Unix mode bits (file type + permissions)
    pub permissions: u32,
}

impl FileEntry {
    /// Create a new FileEntry with the given parameters
    pub fn new(path: PathBuf, size: u64, mtime: SystemTime, permissions: u32) -> Self {
        Self {
            path,
            size,
            mtime,
            permissions,
        }
    }

    /// Capture a FileEntry from filesystem metadata.
    ///
    /// Fails only if the platform cannot report a modification time.
    pub fn from_metadata(path: PathBuf, metadata: &Metadata) -> io::Result<Self> {
        let mtime = metadata.modified()?;
        Ok(Self::new(path, metadata.len(), mtime, mode_bits(metadata)))
    }
}

/// Extract mode bits in a platform-specific way
#[cfg(unix)]
pub fn mode_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

/// Extract mode bits in a platform-specific way
///
/// Non-Unix platforms only expose the read-only flag.
#[cfg(not(unix))]
pub fn mode_bits(metadata: &Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}
