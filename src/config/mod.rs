//! Configuration management

use crate::logger::DEFAULT_LOG_FILE;
use crate::types::SyncError;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One-way directory synchronization
#[derive(Debug, Parser)]
#[command(name = "treesync", version, about)]
pub struct Cli {
    /// Path to the source directory
    #[arg(long, value_name = "DIR")]
    pub source: PathBuf,

    /// Path to the target directory
    #[arg(long, value_name = "DIR")]
    pub target: PathBuf,

    /// Delete files from target that are missing in source
    #[arg(long)]
    pub delete_missing: bool,

    /// File the run log is appended to [default: sync_log.txt]
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Abort on the first unreadable source entry instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Only print the final outcome to the terminal
    #[arg(short, long)]
    pub quiet: bool,

    /// TOML file with default settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Settings that may come from a `--config` TOML file
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub delete_missing: Option<bool>,
    pub strict: Option<bool>,
    pub log_file: Option<PathBuf>,
    pub quiet: Option<bool>,
}

impl ConfigFile {
    /// Read and parse a TOML settings file
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        let text = fs::read_to_string(path).map_err(|e| {
            SyncError::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::parse(&text)
            .map_err(|e| SyncError::Config(format!("Invalid config file {}: {}", path.display(), e)))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Settings for one synchronization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Target directory
    pub target: PathBuf,

    /// Remove target files that have no source counterpart
    pub delete_missing: bool,

    /// Abort when a source entry cannot be read
    pub strict: bool,

    /// Log file path
    pub log_file: PathBuf,

    /// Suppress per-file terminal output
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            target: PathBuf::new(),
            delete_missing: false,
            strict: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            quiet: false,
        }
    }
}

impl Config {
    /// Config for the given roots with every option at its default
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    /// Layer a settings file under this config; flags already set win
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        self.delete_missing |= file.delete_missing.unwrap_or(false);
        self.strict |= file.strict.unwrap_or(false);
        self.quiet |= file.quiet.unwrap_or(false);
        if let Some(log_file) = file.log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SyncError> {
        if self.source.as_os_str().is_empty() {
            return Err(SyncError::Config("Source path must not be empty".to_string()));
        }

        if self.target.as_os_str().is_empty() {
            return Err(SyncError::Config("Target path must not be empty".to_string()));
        }

        let source = crate::commands::sync::normalize(&self.source);
        let target = crate::commands::sync::normalize(&self.target);
        if let (Ok(source), Ok(target)) = (source, target) {
            if source == target {
                return Err(SyncError::Config(
                    "Source and target cannot be the same".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl TryFrom<Cli> for Config {
    type Error = SyncError;

    /// Build a config from parsed arguments, loading `--config` if given
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let file = match &cli.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let mut config = Config {
            source: cli.source,
            target: cli.target,
            delete_missing: cli.delete_missing,
            strict: cli.strict,
            quiet: cli.quiet,
            ..Config::default()
        }
        .merge_file(file);

        if let Some(log_file) = cli.log_file {
            config.log_file = log_file;
        }

        config.validate()?;
        Ok(config)
    }
}
