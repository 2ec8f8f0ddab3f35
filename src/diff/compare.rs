//! File comparison logic

use crate::types::FileEntry;
use filetime::FileTime;
use std::time::SystemTime;

/// Decide whether the target copy of a file needs to be rewritten
///
/// Metadata-only comparison, in order:
///
/// 1. **Size mismatch**: different
/// 2. **Mode mismatch**: different
/// 3. **Modification time**: different when the whole-second parts differ.
///    Sub-second precision is dropped on both sides so that filesystems and
///    transports with coarse timestamps do not cause endless re-copies.
///
/// Direction does not matter: a target newer than its source is rewritten too,
/// since the target is meant to mirror the source.
///
/// Two files with the same size, mode and truncated mtime compare equal even if
/// their bytes differ.
pub fn files_differ(src: &FileEntry, dest: &FileEntry) -> bool {
    if src.size != dest.size {
        return true;
    }

    if src.permissions != dest.permissions {
        return true;
    }

    truncate_to_second(src.mtime) != truncate_to_second(dest.mtime)
}

/// Whole seconds since the Unix epoch, rounded toward negative infinity
pub fn truncate_to_second(time: SystemTime) -> i64 {
    FileTime::from_system_time(time).unix_seconds()
}
