//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

impl Config {
    /// Create configuration from environment variables
    ///
    /// Same as `Config::default().with_env()`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Applies environment overrides on top of `self`.
    ///
    /// `BEACON_LOG` (falling back to `RUST_LOG`) sets the filter and
    /// `BEACON_LOG_FORMAT` the format. An unknown format is ignored.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Like [`with_env`](Self::with_env), reading variables through `lookup`.
    #[must_use]
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(level) = lookup("BEACON_LOG").or_else(|| lookup("RUST_LOG")) {
            self.level = level;
        }

        if let Some(format) = lookup("BEACON_LOG_FORMAT").and_then(|f| f.parse().ok()) {
            self.format = format;
        }

        self
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_owned(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                target: true,
                source: true,
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                target: true,
                source: false,
            },
        }
    }
}
