//! # beacon-log
//!
//! Subscriber setup for Beacon binaries. Library crates only emit `tracing`
//! events; this crate decides where they go and how they look.
//!
//! ```no_run
//! use beacon_log::{Config, LoggerBuilder};
//!
//! LoggerBuilder::from_config(Config::from_env()).build()?;
//! tracing::info!("ready");
//! # Ok::<(), beacon_log::LogError>(())
//! ```

#![forbid(unsafe_code)]

mod builder;
pub mod config;
mod core;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use crate::core::{LogError, LogResult};

/// Installs a global subscriber configured from the environment.
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init() -> LogResult<()> {
    init_with(Config::from_env())
}

/// Installs a global subscriber for `config`.
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}
