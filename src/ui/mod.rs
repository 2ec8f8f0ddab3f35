//! Terminal-facing summaries

mod summary;

pub use summary::{format_report, outcome_message};
