//! Staged file copy with metadata preservation

use crate::logger::Logger;
use crate::types::{SyncError, Transfer};
use filetime::FileTime;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Result of a successful copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Copied {
    /// Content bytes written
    pub bytes: u64,
    /// Metadata preservation failures recorded as warnings
    pub warnings: usize,
}

/// Create every missing parent directory of `dest`, then copy `src` over it
pub fn copy_file_or_create_dirs(
    src: &Path,
    dest: &Path,
    transfer: Transfer,
    logger: &mut dyn Logger,
) -> Result<Copied, SyncError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| SyncError::CreateDirs {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    copy_file(src, dest, transfer, logger)
}

/// Copy `src` to `dest` through a staging file in the destination directory
///
/// 1. Stream the content into a hidden `.part` sibling of `dest`
/// 2. Flush it to disk
/// 3. Apply the source mtime and permissions (failures are warnings)
/// 4. Rename the staging file over `dest`
///
/// A failure before step 4 removes the staging file and leaves any existing
/// `dest` untouched, so a read error can never produce a truncated target.
/// The parent directory of `dest` must exist.
pub fn copy_file(
    src: &Path,
    dest: &Path,
    transfer: Transfer,
    logger: &mut dyn Logger,
) -> Result<Copied, SyncError> {
    let copy_error = |source: io::Error| SyncError::Copy {
        transfer,
        src: src.to_path_buf(),
        dst: dest.to_path_buf(),
        source,
    };

    let staging_dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut src_file = File::open(src).map_err(copy_error)?;
    let mut staged = tempfile::Builder::new()
        .prefix(".treesync-")
        .suffix(".part")
        .tempfile_in(staging_dir)
        .map_err(copy_error)?;

    let bytes = io::copy(&mut src_file, staged.as_file_mut()).map_err(copy_error)?;
    staged.as_file().sync_all().map_err(copy_error)?;

    let warnings = preserve_metadata(&src_file, staged.path(), dest, logger);

    staged.persist(dest).map_err(|e| copy_error(e.error))?;

    Ok(Copied { bytes, warnings })
}

/// Apply the source's mtime and permissions to the staged copy
///
/// Returns the number of warnings recorded. The mtime goes first so that a
/// read-only source mode cannot get in its way.
fn preserve_metadata(
    src_file: &File,
    staged_path: &Path,
    dest: &Path,
    logger: &mut dyn Logger,
) -> usize {
    let metadata = match src_file.metadata() {
        Ok(metadata) => metadata,
        Err(e) => {
            logger.record_warning(&format!(
                "unable to read source metadata for {}: {}",
                dest.display(),
                e
            ));
            return 1;
        }
    };

    let mut warnings = 0;

    let mtime = metadata
        .modified()
        .and_then(|mtime| filetime::set_file_mtime(staged_path, FileTime::from_system_time(mtime)));
    if let Err(e) = mtime {
        logger.record_warning(&format!(
            "unable to preserve mod time on {}: {}",
            dest.display(),
            e
        ));
        warnings += 1;
    }

    if let Err(e) = fs::set_permissions(staged_path, metadata.permissions()) {
        logger.record_warning(&format!(
            "unable to preserve file mode on {}: {}",
            dest.display(),
            e
        ));
        warnings += 1;
    }

    warnings
}
