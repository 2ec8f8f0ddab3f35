//! Append-only log file sink

use super::Logger;
use crate::types::SyncError;
use chrono::{Local, SecondsFormat};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Log file used when none is configured
pub const DEFAULT_LOG_FILE: &str = "sync_log.txt";

/// Logger appending timestamped lines to a file
///
/// Write failures do not interrupt the run; the first one is kept and
/// surfaced by [`Logger::close`].
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    write_failure: Option<io::Error>,
}

impl FileLogger {
    /// Open (or create) the log file in append mode
    pub fn open(path: &Path) -> Result<Self, SyncError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SyncError::Log {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
            write_failure: None,
        })
    }

    fn write_line(&mut self, prefix: &str, message: &str) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
        if let Err(e) = writeln!(writer, "[{timestamp}] {prefix}{message}") {
            self.write_failure.get_or_insert(e);
        }
    }
}

impl Logger for FileLogger {
    fn record(&mut self, message: &str) {
        self.write_line("", message);
    }

    fn record_error(&mut self, err: &SyncError) {
        self.write_line("ERROR: ", &err.to_string());
    }

    fn record_warning(&mut self, message: &str) {
        self.write_line("WARNING: ", message);
    }

    fn close(&mut self) -> Result<(), SyncError> {
        let flushed = match self.writer.take() {
            Some(mut writer) => writer.flush(),
            None => Ok(()),
        };

        match self.write_failure.take().map_or(flushed, Err) {
            Ok(()) => Ok(()),
            Err(source) => Err(SyncError::Log {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}
