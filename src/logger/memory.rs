//! In-memory log sink

use super::Logger;
use crate::types::SyncError;

/// One record captured by [`MemoryLogger`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRecord {
    Message(String),
    Warning(String),
    Error(String),
}

/// Logger keeping every record in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Vec<LogRecord>,
    closed: bool,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(|record| match record {
            LogRecord::Message(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(|record| match record {
            LogRecord::Warning(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(|record| match record {
            LogRecord::Error(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Logger for MemoryLogger {
    fn record(&mut self, message: &str) {
        self.records.push(LogRecord::Message(message.to_string()));
    }

    fn record_error(&mut self, err: &SyncError) {
        self.records.push(LogRecord::Error(err.to_string()));
    }

    fn record_warning(&mut self, message: &str) {
        self.records.push(LogRecord::Warning(message.to_string()));
    }

    fn close(&mut self) -> Result<(), SyncError> {
        self.closed = true;
        Ok(())
    }
}
