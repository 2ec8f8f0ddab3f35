//! Sequential directory walker

use crate::logger::Logger;
use crate::types::{FileEntry, FileTree, Side, SyncError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// How a scan reacts to the tree it walks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Which root is being scanned (used in messages)
    pub side: Side,

    /// Return the first per-entry error instead of recording it and moving on
    pub strict: bool,
}

impl ScanOptions {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Scan a directory and build a FileTree of its regular files
///
/// Walks the directory tree recursively without following symlinks and
/// without any ignore-file filtering. Directories are counted but not indexed;
/// symlinks, sockets, devices and other special files are skipped silently.
///
/// # Errors
/// * Root missing, unreadable, or not a directory: `SyncError::Walk`, returned
///   without being recorded (the caller decides how to report it)
/// * Unreadable entries below the root are recorded through `logger` and
///   counted in `FileTree::scan_errors`; the scan continues. In strict mode the
///   first such error is returned instead.
pub fn scan_directory(
    root_path: &Path,
    options: ScanOptions,
    logger: &mut dyn Logger,
) -> Result<FileTree, SyncError> {
    let start_time = Instant::now();
    let mut tree = FileTree::new(root_path.to_path_buf());

    check_root(root_path, options.side)?;

    let walker = ignore::WalkBuilder::new(root_path)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                let error = classify_walk_error(root_path, options.side, err);
                skip_entry(error, options, &mut tree, logger)?;
                continue;
            }
        };

        let Some(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if entry.depth() > 0 {
                tree.increment_dirs();
            }
            continue;
        }

        if !file_type.is_file() {
            continue;
        }

        let relative_path = match entry.path().strip_prefix(root_path) {
            Ok(p) => p.to_path_buf(),
            Err(_) => {
                let error = SyncError::RelativePath {
                    side: options.side,
                    path: entry.path().to_path_buf(),
                };
                skip_entry(error, options, &mut tree, logger)?;
                continue;
            }
        };

        let file_entry = entry
            .metadata()
            .map_err(|err| access_error(entry.path(), err))
            .and_then(|metadata| {
                FileEntry::from_metadata(relative_path.clone(), &metadata).map_err(|source| {
                    SyncError::Access {
                        path: entry.path().to_path_buf(),
                        source,
                    }
                })
            });

        match file_entry {
            Ok(file_entry) => tree.insert(relative_path, file_entry),
            Err(error) => skip_entry(error, options, &mut tree, logger)?,
        }
    }

    tree.set_scan_duration(start_time.elapsed());
    tracing::debug!(
        side = %options.side,
        root = %root_path.display(),
        files = tree.total_files,
        dirs = tree.total_dirs,
        errors = tree.scan_errors,
        elapsed = ?tree.scan_duration,
        "scan complete"
    );

    Ok(tree)
}

fn check_root(root_path: &Path, side: Side) -> Result<(), SyncError> {
    let walk_error = |source| SyncError::Walk {
        side,
        path: root_path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(root_path).map_err(walk_error)?;
    if !metadata.is_dir() {
        return Err(walk_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a directory",
        )));
    }

    // The walker reports an unreadable root as an entry error; probing here keeps
    // it a traversal-level failure regardless of walker internals.
    fs::read_dir(root_path).map_err(walk_error)?;
    Ok(())
}

/// Record a per-entry error and keep going, or hand it back in strict mode
fn skip_entry(
    error: SyncError,
    options: ScanOptions,
    tree: &mut FileTree,
    logger: &mut dyn Logger,
) -> Result<(), SyncError> {
    if error.is_fatal() || options.strict {
        return Err(error);
    }

    logger.record_error(&error);
    tree.increment_errors();
    Ok(())
}

fn classify_walk_error(root_path: &Path, side: Side, err: ignore::Error) -> SyncError {
    if err.depth() == Some(0) {
        let (_, source) = split_walk_error(err);
        return SyncError::Walk {
            side,
            path: root_path.to_path_buf(),
            source,
        };
    }

    let (path, source) = split_walk_error(err);
    SyncError::Access {
        path: path.unwrap_or_else(|| root_path.to_path_buf()),
        source,
    }
}

fn access_error(path: &Path, err: ignore::Error) -> SyncError {
    let (_, source) = split_walk_error(err);
    SyncError::Access {
        path: path.to_path_buf(),
        source,
    }
}

/// Pull the offending path and the IO cause out of a walker error
fn split_walk_error(err: ignore::Error) -> (Option<PathBuf>, io::Error) {
    let path = error_path(&err);
    let message = err.to_string();
    let source = err.into_io_error().unwrap_or_else(|| io::Error::other(message));
    (path, source)
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
