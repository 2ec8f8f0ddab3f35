//! End-of-run outcome lines

use crate::logger::Tone;
use crate::types::{SyncError, SyncReport};
use indicatif::HumanBytes;

/// Headline for a finished (or aborted) run and the tone to show it in
pub fn outcome_message(outcome: &Result<SyncReport, SyncError>) -> (Tone, String) {
    match outcome {
        Ok(report) if report.is_clean() => (
            Tone::Success,
            "Synchronization finished successfully.".to_string(),
        ),
        Ok(report) => (
            Tone::Warning,
            format!(
                "Synchronization finished with errors: {} error(s) recorded, see the log for details",
                report.errors
            ),
        ),
        Err(err) => (Tone::Error, format!("Synchronization aborted: {}", err)),
    }
}

/// One-line digest of the report counters
pub fn format_report(report: &SyncReport) -> String {
    let mut line = format!(
        "  Created: {}  Updated: {}  Skipped: {}  Deleted: {}  Errors: {}",
        report.created, report.updated, report.skipped, report.deleted, report.errors
    );
    if report.warnings > 0 {
        line.push_str(&format!("  Warnings: {}", report.warnings));
    }
    line.push_str(&format!(" | {} copied", HumanBytes(report.bytes_copied)));
    line
}
