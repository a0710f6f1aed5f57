//! Layered CLI settings
//!
//! Sources, lowest priority first: built-in defaults adjusted by the usual
//! logging variables (`BEACON_LOG`, `RUST_LOG`, `BEACON_LOG_FORMAT`), the
//! TOML config file, `BEACON_*` environment variables (`__` separates nested
//! keys, e.g. `BEACON_LOG__LEVEL`), then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::ValueEnum;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::GlobalArgs;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "beacon.toml";

/// Variables under the `BEACON_` prefix that the settings layer skips. The
/// logging ones are already folded into the defaults.
const RESERVED_ENV: &[&str] = &["config", "log", "log_format"];

/// How validation outcomes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// One JSON object per line.
    #[default]
    Compact,
    /// Indented JSON.
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: beacon_log::Config,
    pub output: OutputStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: beacon_log::Config {
                level: "warn".to_owned(),
                ..beacon_log::Config::default()
            },
            output: OutputStyle::default(),
        }
    }
}

impl Settings {
    /// Resolves settings from every layer.
    ///
    /// # Errors
    ///
    /// Fails if an explicit `--config` file does not exist, or if any layer
    /// holds a value of the wrong type.
    pub fn load(args: &GlobalArgs) -> anyhow::Result<Self> {
        if let Some(path) = args.config.as_deref().filter(|path| !path.is_file()) {
            bail!("config file {} not found", path.display());
        }

        Self::figment(args)
            .extract()
            .context("invalid configuration")
    }

    fn figment(args: &GlobalArgs) -> Figment {
        let file = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::layers(&file, Self::seed()).merge(flags(args))
    }

    /// Defaults with the logging environment variables applied.
    fn seed() -> Self {
        let defaults = Self::default();
        Self {
            log: defaults.log.with_env(),
            ..defaults
        }
    }

    fn layers(file: &Path, base: Self) -> Figment {
        Figment::from(Serialized::defaults(base))
            .merge(Toml::file(file))
            .merge(Env::prefixed("BEACON_").ignore(RESERVED_ENV).split("__"))
    }
}

fn flags(args: &GlobalArgs) -> Figment {
    let mut figment = Figment::new();
    if let Some(level) = &args.log_level {
        figment = figment.merge(Serialized::default("log.level", level));
    }
    if let Some(format) = args.log_format {
        figment = figment.merge(Serialized::default("log.format", format));
    }
    if let Some(output) = args.output {
        figment = figment.merge(Serialized::default("output", output));
    }
    figment
}
