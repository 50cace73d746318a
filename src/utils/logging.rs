//! Logging configuration
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! colored report.

use tracing_subscriber::EnvFilter;

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// General information
    Info,
    /// Debug information
    Debug,
    /// Very verbose debug information
    Trace,
}

impl LogLevel {
    /// Directive understood by [`EnvFilter`]
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Logging configuration options
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set
    pub default_level: LogLevel,
    /// Include target module information
    pub target: bool,
    /// Use colored output (if supported)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: LogLevel::Warn,
            target: false,
            colored: true,
        }
    }
}

/// Logging system manager
pub struct LoggingSystem {
    config: LoggingConfig,
}

impl Default for LoggingSystem {
    fn default() -> Self {
        Self::new(LoggingConfig::default())
    }
}

impl LoggingSystem {
    /// Create a new logging system with configuration
    pub fn new(config: LoggingConfig) -> Self {
        Self { config }
    }

    /// Filter from `RUST_LOG`, falling back to the configured level
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.config.default_level.as_directive()))
    }

    /// Install the global subscriber
    ///
    /// Calling this twice is harmless; the second subscriber is ignored.
    pub fn initialize(&self) {
        let installed = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(std::io::stderr)
            .with_target(self.config.target)
            .with_ansi(self.config.colored)
            .try_init()
            .is_ok();

        if installed {
            tracing::debug!(
                version = env!("CARGO_PKG_VERSION"),
                "Logging initialized with default level {:?}",
                self.config.default_level
            );
        }
    }
}
