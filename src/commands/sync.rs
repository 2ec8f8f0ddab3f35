//! Main sync command

use crate::diff::decide;
use crate::executor::{copy_file_or_create_dirs, delete_missing_files, Copied};
use crate::logger::Logger;
use crate::scanner::{scan_directory, ScanOptions};
use crate::types::{FileTree, Side, SyncDecision, SyncError, SyncReport, Transfer};
use crate::Config;
use chrono::{Local, SecondsFormat};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Run one synchronization of `config.target` against `config.source`
///
/// 1. Resolve both roots to absolute, normalized paths (fatal on failure)
/// 2. Index every regular file under the source
/// 3. Create, update, or skip each indexed file in the target
/// 4. If `delete_missing` is set, remove target files absent from the index
///
/// Every outcome goes through `logger`. Per-file failures are recorded, counted
/// in the returned report, and do not stop the run.
///
/// # Errors
/// * A root path cannot be resolved
/// * The source root cannot be walked. Reconciliation is not attempted: with
///   an empty index the delete pass would otherwise empty the target.
/// * Strict mode only: the first unreadable source entry
///
/// Returned errors have already been recorded through `logger`.
pub fn run(config: &Config, logger: &mut dyn Logger) -> Result<SyncReport, SyncError> {
    logger.record(&format!(
        "Starting sync: source={}, target={}, deleteMissing={} at {}",
        config.source.display(),
        config.target.display(),
        config.delete_missing,
        Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
    ));

    let source = recorded(resolve_root(&config.source, Side::Source), logger)?;
    let target = recorded(resolve_root(&config.target, Side::Target), logger)?;
    tracing::debug!(source = %source.display(), target = %target.display(), "resolved roots");

    let index = recorded(
        scan_directory(
            &source,
            ScanOptions::new(Side::Source).strict(config.strict),
            logger,
        ),
        logger,
    )?;

    let mut report = SyncReport {
        errors: index.scan_errors,
        scan_duration: index.scan_duration,
        ..Default::default()
    };

    reconcile(&source, &target, &index, logger, &mut report);

    if config.delete_missing {
        let stats = delete_missing_files(&target, &index, logger);
        report.deleted = stats.deleted;
        report.errors += stats.errors;
    }

    tracing::debug!(?report, "sync finished");
    Ok(report)
}

/// Bring every indexed file in the target up to date
fn reconcile(
    source: &Path,
    target: &Path,
    index: &FileTree,
    logger: &mut dyn Logger,
    report: &mut SyncReport,
) {
    // Sorted only so that log files read naturally
    let mut entries: Vec<_> = index.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (relative_path, entry) in entries {
        let src_path = source.join(relative_path);
        let dst_path = target.join(relative_path);

        let transfer = match decide(entry, &dst_path) {
            SyncDecision::Create => Transfer::Create,
            SyncDecision::Update => Transfer::Update,
            SyncDecision::Skip => {
                tracing::debug!(path = %relative_path.display(), "unchanged");
                report.skipped += 1;
                continue;
            }
            SyncDecision::Inaccessible(source) => {
                logger.record_error(&SyncError::TargetMetadata {
                    path: dst_path,
                    source,
                });
                report.errors += 1;
                continue;
            }
        };

        match copy_file_or_create_dirs(&src_path, &dst_path, transfer, logger) {
            Ok(copied) => {
                count_transfer(report, transfer, copied);
                let message = match transfer {
                    Transfer::Create => format!(
                        "Copied file from {} to {}",
                        src_path.display(),
                        dst_path.display()
                    ),
                    Transfer::Update => format!(
                        "Updated file at {} with {}",
                        dst_path.display(),
                        src_path.display()
                    ),
                };
                logger.record(&message);
            }
            Err(err) => {
                logger.record_error(&err);
                report.errors += 1;
            }
        }
    }
}

/// Metadata warnings do not turn a transfer into an error
fn count_transfer(report: &mut SyncReport, transfer: Transfer, copied: Copied) {
    report.bytes_copied += copied.bytes;
    report.warnings += copied.warnings;
    match transfer {
        Transfer::Create => report.created += 1,
        Transfer::Update => report.updated += 1,
    }
}

/// Resolve a root to an absolute, normalized path
///
/// The path does not need to exist.
pub fn resolve_root(path: &Path, side: Side) -> Result<PathBuf, SyncError> {
    normalize(path).map_err(|source| SyncError::PathResolution {
        side,
        path: path.to_path_buf(),
        source,
    })
}

/// Make `path` absolute against the working directory and fold `.` and `..`
/// lexically (symlinks are not resolved)
pub fn normalize(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    Ok(normalized)
}

fn recorded<T>(result: Result<T, SyncError>, logger: &mut dyn Logger) -> Result<T, SyncError> {
    if let Err(err) = &result {
        logger.record_error(err);
    }
    result
}
