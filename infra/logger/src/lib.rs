//! # Logger
//!
//! Turns the `[logging]` section of the dashboard config into the global
//! `tracing` subscriber: compact lines on stderr and, when a directory is
//! configured, a daily rolling file written as plain text or JSON lines.
//!
//! [`LogPlan`] resolves and validates the section without touching global
//! state; [`LogPlan::install`] (or [`Logger::from_config`]) applies it.
//!
//! ## Example
//!
//! ```rust
//! use inv_domain::config::LoggingConfig;
//! use inv_logger::Logger;
//!
//! let config = LoggingConfig { level: "debug".into(), ..LoggingConfig::default() };
//! let _logger = Logger::from_config("inventra", &config).unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use inv_domain::config::LoggingConfig;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Daily files kept per logger name.
const RETAINED_DAYS: usize = 7;

/// Rolling file output of a [`LogPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub directory: PathBuf,
    pub json: bool,
}

/// A validated [`LoggingConfig`], ready to install.
#[derive(Debug)]
pub struct LogPlan {
    name: String,
    level: LevelFilter,
    filter: EnvFilter,
    console: bool,
    file: Option<LogFile>,
}

impl LogPlan {
    /// Resolves `config` for the binary `name`, which also prefixes log file names.
    ///
    /// Without `filter`, directives from `RUST_LOG` are layered over `level`.
    ///
    /// # Errors
    /// [`LoggerError::Level`] or [`LoggerError::Filter`] for unparsable
    /// settings, [`LoggerError::NoOutput`] when every output is disabled.
    pub fn new(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        if !config.console && config.directory.is_none() {
            return Err(LoggerError::NoOutput { name: name.to_owned() });
        }

        let level = parse_level(&config.level)?;
        let directives = EnvFilter::builder().with_default_directive(level.into());
        let filter = match config.filter.as_deref() {
            Some(extra) => directives.parse(extra).context(format!("`{extra}`"))?,
            None => directives.from_env_lossy(),
        };

        Ok(Self {
            name: name.to_owned(),
            level,
            filter,
            console: config.console,
            file: config
                .directory
                .as_ref()
                .map(|directory| LogFile { directory: directory.clone(), json: config.json }),
        })
    }

    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        self.level
    }

    #[must_use]
    pub const fn console(&self) -> bool {
        self.console
    }

    #[must_use]
    pub const fn file(&self) -> Option<&LogFile> {
        self.file.as_ref()
    }

    /// Installs the plan as the process-wide subscriber.
    ///
    /// # Errors
    /// [`LoggerError::Directory`] or [`LoggerError::File`] when the log file
    /// cannot be prepared, [`LoggerError::AlreadyInstalled`] on a second install.
    pub fn install(self) -> Result<Logger, LoggerError> {
        let mut outputs = Vec::new();
        if self.console {
            outputs.push(fmt::layer().compact().with_writer(std::io::stderr).boxed());
        }

        let mut file = None;
        if let Some(LogFile { directory, json }) = self.file {
            std::fs::create_dir_all(&directory).context(directory.display().to_string())?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(&self.name)
                .filename_suffix("log")
                .max_log_files(RETAINED_DAYS)
                .build(&directory)
                .context(directory.display().to_string())?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let lines = fmt::layer().with_ansi(false).with_writer(writer);
            outputs.push(if json { lines.json().boxed() } else { lines.boxed() });
            file = Some((directory, guard));
        }

        tracing_subscriber::registry()
            .with(self.filter)
            .with(outputs)
            .try_init()
            .context(self.name)?;

        Ok(Logger { file })
    }
}

/// Keeps the file writer alive; buffered lines are written out when it drops.
#[must_use = "Dropping the logger stops the file writer."]
#[derive(Debug)]
pub struct Logger {
    file: Option<(PathBuf, WorkerGuard)>,
}

impl Logger {
    /// [`LogPlan::new`] followed by [`LogPlan::install`].
    ///
    /// # Errors
    /// See [`LogPlan::new`] and [`LogPlan::install`].
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        LogPlan::new(name, config)?.install()
    }

    /// Directory receiving the rolling log file, if file output is on.
    #[must_use]
    pub fn log_dir(&self) -> Option<&Path> {
        self.file.as_ref().map(|(dir, _)| dir.as_path())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Some((dir, _)) = &self.file {
            tracing::debug!(dir = %dir.display(), "Closing log file");
        }
    }
}

/// Parses a level name, ignoring case and surrounding whitespace.
///
/// # Errors
/// Returns [`LoggerError::Level`] for anything but `off`, `error`, `warn`,
/// `info`, `debug` or `trace`.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| LoggerError::Level { level: level.to_owned(), context: None })
}
