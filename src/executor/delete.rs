//! Delete-missing pass

use crate::logger::Logger;
use crate::scanner::{scan_directory, ScanOptions};
use crate::types::{FileTree, Side, SyncError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Outcome of a delete-missing pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteStats {
    pub deleted: usize,
    pub errors: usize,
}

/// Remove target files that have no entry in `source_index`
///
/// The target is walked with the same rules as the source (regular files only,
/// unreadable entries recorded and skipped). Directories are never removed,
/// even when a deletion leaves them empty. A target root that does not exist
/// has nothing to delete.
pub fn delete_missing_files(
    target_root: &Path,
    source_index: &FileTree,
    logger: &mut dyn Logger,
) -> DeleteStats {
    let mut stats = DeleteStats::default();

    if let Err(e) = fs::symlink_metadata(target_root) {
        if e.kind() == ErrorKind::NotFound {
            tracing::debug!(root = %target_root.display(), "target missing, nothing to delete");
            return stats;
        }
    }

    let target_tree = match scan_directory(target_root, ScanOptions::new(Side::Target), logger) {
        Ok(tree) => tree,
        Err(err) => {
            logger.record_error(&err);
            stats.errors += 1;
            return stats;
        }
    };
    stats.errors += target_tree.scan_errors;

    let mut orphans: Vec<&PathBuf> = target_tree
        .paths()
        .filter(|path| !source_index.contains(path))
        .collect();
    orphans.sort();

    for relative_path in orphans {
        let path = target_root.join(relative_path);
        match fs::remove_file(&path) {
            Ok(()) => {
                logger.record(&format!(
                    "Deleted missing file from target: {}",
                    path.display()
                ));
                stats.deleted += 1;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "already gone");
            }
            Err(source) => {
                logger.record_error(&SyncError::Delete { path, source });
                stats.errors += 1;
            }
        }
    }

    stats
}
