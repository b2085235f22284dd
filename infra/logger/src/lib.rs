//! # Logger
//!
//! Installs the global `tracing` subscriber for the native launchers.
//! Console output is on by default; a daily rolling file sink with a bounded
//! number of files can be added, optionally in JSON. `RUST_LOG` still wins over
//! the programmatic level when no explicit filter is given.
//!
//! ## Example
//!
//! ```rust
//! # use argyle_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder("argyle")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```
//!
//! The web build does not use this crate; Dioxus installs its own browser console logger.

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use argyle_domain::config::LogConfig;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct FileSink {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    stderr: bool,
    level: LevelFilter,
    filter: Option<String>,
    file: Option<FileSink>,
}

impl LoggerBuilder {
    /// Toggles the compact ANSI console layer.
    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Sends console output to stderr, keeping stdout free for command output.
    #[must_use]
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.stderr = enabled;
        self
    }

    /// Minimum level emitted when no filter directive matches.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Explicit env-filter directives (e.g. `argyle_ui=debug,reqwest=warn`).
    ///
    /// When set, `RUST_LOG` is ignored. Invalid directives fail [`LoggerBuilder::init`].
    #[must_use]
    pub fn filter(mut self, directives: impl Into<String>) -> Self {
        self.filter = Some(directives.into());
        self
    }

    /// Adds a rolling file sink in `dir`. Files are named `<name>.<date>.log`.
    #[must_use]
    pub fn file(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file = Some(FileSink {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Rotation of the file sink. No effect without [`LoggerBuilder::file`].
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(sink) = self.file.as_mut() {
            sink.rotation = rotation;
        }
        self
    }

    /// Number of rotated files kept. No effect without [`LoggerBuilder::file`].
    #[must_use]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(sink) = self.file.as_mut() {
            sink.max_files = max;
        }
        self
    }

    /// Writes the file sink as JSON lines. No effect without [`LoggerBuilder::file`].
    #[must_use]
    pub fn json(mut self, enabled: bool) -> Self {
        if let Some(sink) = self.file.as_mut() {
            sink.json = enabled;
        }
        self
    }

    /// Installs the subscriber.
    ///
    /// The returned [`Logger`] owns the non-blocking file worker; keep it alive until
    /// shutdown or buffered lines are lost.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   bad filter directives, or no enabled layer.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let env_filter = self.env_filter()?;

        let mut layers = Vec::new();
        if self.console {
            let console = layer().compact();
            layers.push(if self.stderr {
                console.with_writer(std::io::stderr).with_ansi(false).boxed()
            } else {
                console.with_ansi(true).boxed()
            });
        }

        let guard = match self.file {
            Some(sink) => {
                fs::create_dir_all(&sink.dir)
                    .context(format!("Failed to create log directory {}", sink.dir.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(sink.rotation)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(sink.max_files)
                    .build(&sink.dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if sink.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable the console or a log directory.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if self.file.as_ref().is_some_and(|sink| sink.max_files == 0) {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }
        Ok(())
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.filter {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => {
                builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("Invalid filter '{directives}': {e}").into(),
                    context: None,
                })
            },
        }
    }
}

/// Handle to the installed logging system.
///
/// Holds the file worker guard, if any. Drop it only when the application exits.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder. `name` prefixes rolling log files (`argyle.2024-10-27.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            stderr: false,
            level: LevelFilter::INFO,
            filter: None,
            file: None,
        }
    }

    /// Builder pre-filled from the `[log]` section of the site config.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] if `level` is not a tracing level name.
    pub fn from_config(
        name: impl Into<String>,
        config: &LogConfig,
    ) -> Result<LoggerBuilder, LoggerError> {
        let level = LevelFilter::from_str(&config.level).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid log level '{}': {e}", config.level).into(),
                context: None,
            }
        })?;

        let mut builder = Self::builder(name).level(level);
        if let Some(filter) = &config.filter {
            builder = builder.filter(filter.clone());
        }
        if let Some(dir) = &config.path {
            builder = builder.file(dir.clone()).max_files(config.max_files).json(config.json);
        }
        Ok(builder)
    }

    /// Whether a file sink is active.
    #[must_use]
    pub const fn has_file_sink(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("test-app");
        assert!(builder.console);
        assert!(!builder.stderr);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.filter.is_none());
        assert!(builder.file.is_none());
    }

    #[test]
    fn file_knobs_need_a_file_sink() {
        let builder = Logger::builder("test-app").max_files(3).json(true);
        assert!(builder.file.is_none());

        let builder = Logger::builder("test-app").file("logs").max_files(3).json(true);
        let sink = builder.file.expect("file sink");
        assert_eq!(sink.max_files, 3);
        assert!(sink.json);
    }

    #[test]
    fn from_config_maps_every_field() -> Result<(), LoggerError> {
        let config = LogConfig {
            level: "debug".to_owned(),
            filter: Some("argyle_ui=trace".to_owned()),
            path: Some(PathBuf::from("var/log")),
            json: true,
            max_files: 4,
        };

        let builder = Logger::from_config("test-app", &config)?;
        assert_eq!(builder.level, LevelFilter::DEBUG);
        assert_eq!(builder.filter.as_deref(), Some("argyle_ui=trace"));
        let sink = builder.file.expect("file sink");
        assert_eq!(sink.dir, PathBuf::from("var/log"));
        assert_eq!(sink.max_files, 4);
        assert!(sink.json);
        Ok(())
    }

    #[test]
    fn from_config_rejects_unknown_level() {
        let config = LogConfig { level: "loud".to_owned(), ..LogConfig::default() };
        let err = Logger::from_config("test-app", &config).expect_err("invalid level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn validation_runs_before_install() {
        let err = Logger::builder("  ").init().expect_err("empty name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder("test-app").console(false).init().expect_err("no layers");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder("test-app").file("logs").max_files(0).init().expect_err("zero");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn file_sink_writes_log_files() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempdir()?;
        let log_dir = tmp_dir.path().join("logs");

        let logger = Logger::builder("test-app").console(false).file(&log_dir).init()?;
        assert!(logger.has_file_sink());

        tracing::info!("hello world");
        std::thread::sleep(Duration::from_millis(20));
        drop(logger);

        let has_log = fs::read_dir(&log_dir)?
            .flatten()
            .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));
        assert!(has_log, "at least one log file should be created");
        Ok(())
    }
}
