//! Logging collaborator used by every step of a run
//!
//! The synchronizer never talks to a global logger: it receives a
//! `&mut dyn Logger` and reports each outcome through it. Sinks decide where
//! records end up (a log file, the terminal, memory).

mod console;
mod file;
mod memory;

pub use console::{ConsoleLogger, Tone};
pub use file::{FileLogger, DEFAULT_LOG_FILE};
pub use memory::{LogRecord, MemoryLogger};

use crate::types::SyncError;

/// Sink for the messages and errors produced during a run
pub trait Logger {
    /// Record an informational message
    fn record(&mut self, message: &str);

    /// Record an error
    fn record_error(&mut self, err: &SyncError);

    /// Record a non-fatal problem
    fn record_warning(&mut self, message: &str) {
        self.record(&format!("Warning: {message}"));
    }

    /// Flush and release the sink
    fn close(&mut self) -> Result<(), SyncError>;
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn record(&mut self, message: &str) {
        (**self).record(message);
    }

    fn record_error(&mut self, err: &SyncError) {
        (**self).record_error(err);
    }

    fn record_warning(&mut self, message: &str) {
        (**self).record_warning(message);
    }

    fn close(&mut self) -> Result<(), SyncError> {
        (**self).close()
    }
}
