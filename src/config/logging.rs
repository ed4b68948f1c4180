//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` wins over the configured level; `verbose` raises the level
    /// to `debug` (1) or `trace` (2+). Logs go to stderr so command output on
    /// stdout stays machine-readable.
    pub fn init(&self, verbose: u8) {
        let level = match verbose {
            0 => self.level.as_str(),
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
        // A second init (tests, repeated shells) keeps the first subscriber.
        let _ = match self.format.as_str() {
            "json" => builder.json().try_init(),
            _ => builder.try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}
