//! Command implementations.

use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use beacon_validator::{Outcome, Validate};
use serde_json::Value;

use crate::catalog;
use crate::cli::{Command, ValidateArgs};
use crate::config::{OutputStyle, Settings};

/// Exit status when the document was read but failed validation.
pub const EXIT_INVALID: u8 = 1;
/// Exit status for usage, I/O and parse errors.
pub const EXIT_ERROR: u8 = 2;

pub fn dispatch(command: Command, settings: &Settings, out: &mut impl Write) -> Result<ExitCode> {
    match command {
        Command::Schemas => {
            list_schemas(out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate(args) => {
            let input = read_input(args.input.as_deref())?;
            let outcome = validate(&args, &input)?;
            write_outcome(out, &outcome, settings.output)?;
            Ok(if outcome.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_INVALID)
            })
        }
    }
}

fn list_schemas(out: &mut impl Write) -> Result<()> {
    for entry in catalog::ENTRIES {
        let schema = entry.schema()?;
        let fields: Vec<String> = schema
            .fields()
            .map(|(name, field)| {
                if field.is_required() {
                    name.to_owned()
                } else {
                    format!("{name}?")
                }
            })
            .collect();
        writeln!(out, "{:<8} {} [{}]", entry.name, entry.about, fields.join(", "))?;
    }
    Ok(())
}

fn validate(args: &ValidateArgs, input: &str) -> Result<Outcome> {
    let entry = catalog::find(&args.schema)
        .with_context(|| format!("unknown schema '{}' (try `beacon schemas`)", args.schema))?;
    let schema = entry.schema()?;
    let document: Value = serde_json::from_str(input).context("input is not valid JSON")?;

    let outcome = schema.validate(&document);
    tracing::info!(schema = entry.name, valid = outcome.is_ok(), "validated document");
    Ok(outcome)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_outcome(out: &mut impl Write, outcome: &Outcome, style: OutputStyle) -> Result<()> {
    let rendered = match style {
        OutputStyle::Compact => serde_json::to_string(outcome)?,
        OutputStyle::Pretty => serde_json::to_string_pretty(outcome)?,
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
