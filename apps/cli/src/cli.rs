//! CLI argument definitions using clap
//!
//! Commands:
//! - beacon schemas
//! - beacon validate --schema <name> [INPUT]

use std::path::PathBuf;

use beacon_log::{Format, LogError};
use clap::{Args, Parser, Subcommand};

use crate::config::OutputStyle;

/// Beacon - validate JSON documents against declarative schemas
#[derive(Parser, Debug)]
#[command(name = "beacon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command. Each one overrides the config file and
/// the environment.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Configuration file [default: ./beacon.toml if present]
    #[arg(long, global = true, env = "BEACON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directives, e.g. `debug` or `beacon_validator=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format: pretty, compact or json
    #[arg(long, global = true, value_parser = parse_format)]
    pub log_format: Option<Format>,

    /// How to print the validation outcome
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputStyle>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in schemas and their fields
    Schemas,

    /// Validate a JSON document against a built-in schema
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema to validate against (see `beacon schemas`)
    #[arg(long, short)]
    pub schema: String,

    /// JSON file to read; `-` or nothing reads stdin
    pub input: Option<PathBuf>,
}

fn parse_format(s: &str) -> Result<Format, LogError> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "beacon",
            "validate",
            "--schema",
            "event",
            "doc.json",
            "--output",
            "pretty",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.global.output, Some(OutputStyle::Pretty));
        assert_eq!(cli.global.log_format, Some(Format::Json));
        let Command::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.schema, "event");
        assert_eq!(args.input, Some(PathBuf::from("doc.json")));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = Cli::try_parse_from(["beacon", "schemas", "--log-format", "xml"]).unwrap_err();
        assert!(err.to_string().contains("unknown log format"));
    }

    #[test]
    fn schema_is_required() {
        assert!(Cli::try_parse_from(["beacon", "validate"]).is_err());
    }
}
