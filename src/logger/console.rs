//! Terminal echo layered over another sink

use super::Logger;
use crate::types::SyncError;
use console::style;

/// Color family for a terminal line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Warning,
    Error,
}

/// Logger that prints every record to the terminal and forwards it
///
/// Colors live only here; the wrapped sink always receives plain text.
#[derive(Debug)]
pub struct ConsoleLogger<L> {
    inner: L,
    echo: bool,
}

impl<L: Logger> ConsoleLogger<L> {
    pub fn new(inner: L) -> Self {
        Self { inner, echo: true }
    }

    /// Stop printing to the terminal; records are still forwarded
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.echo = !quiet;
        self
    }

    pub fn into_inner(self) -> L {
        self.inner
    }

    /// Print a line with an explicit tone and forward it as a plain message
    ///
    /// Used for the end-of-run outcome, which is always shown even when quiet.
    pub fn announce(&mut self, tone: Tone, message: &str) {
        println!("{}", paint(tone, message));
        self.inner.record(message);
    }

    fn echo(&self, tone: Tone, message: &str) {
        if self.echo {
            println!("{}", paint(tone, message));
        }
    }
}

/// Apply the terminal style for `tone`
pub fn paint(tone: Tone, message: &str) -> String {
    match tone {
        Tone::Plain => message.to_string(),
        Tone::Success => style(message).green().to_string(),
        Tone::Warning => style(message).yellow().to_string(),
        Tone::Error => style(message).red().to_string(),
    }
}

impl<L: Logger> Logger for ConsoleLogger<L> {
    fn record(&mut self, message: &str) {
        self.echo(Tone::Plain, message);
        self.inner.record(message);
    }

    fn record_error(&mut self, err: &SyncError) {
        self.echo(Tone::Error, &err.to_string());
        self.inner.record_error(err);
    }

    fn record_warning(&mut self, message: &str) {
        self.echo(Tone::Warning, &format!("Warning: {message}"));
        self.inner.record_warning(message);
    }

    fn close(&mut self) -> Result<(), SyncError> {
        self.inner.close()
    }
}
