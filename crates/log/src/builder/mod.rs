//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::core::{LogError, LogResult};

/// Builds the fmt layer for one of the line formats, writing to stderr.
macro_rules! create_fmt_layer {
    ($kind:ident, $display:expr) => {
        tracing_subscriber::fmt::layer()
            .$kind()
            .with_writer(std::io::stderr)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
    };
}

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this builder will install.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the filter directives without installing anything.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if `level` is not valid `EnvFilter` syntax.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {e}", self.config.level)))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already set
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let display = &self.config.display;

        let installed = match self.config.format {
            Format::Pretty => Registry::default()
                .with(filter)
                .with(create_fmt_layer!(pretty, display))
                .try_init(),
            Format::Compact => Registry::default()
                .with(filter)
                .with(create_fmt_layer!(compact, display))
                .try_init(),
            Format::Json => Registry::default()
                .with(filter)
                .with(create_fmt_layer!(json, display).with_ansi(false))
                .try_init(),
        };

        installed.map_err(|e| LogError::Init(e.to_string()))?;
        tracing::trace!(level = %self.config.level, format = %self.config.format, "logger installed");
        Ok(())
    }
}
