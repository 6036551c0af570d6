//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use flatkey::{BinderSettings, ExcludePattern, Value};

use crate::error::CliError;

/// Options shared by all commands.
pub struct GlobalOptions {
    /// Verbose output requested.
    pub verbose: bool,
    /// Non-essential output suppressed.
    pub quiet: bool,
}

/// Input file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON input.
    Json,
    /// YAML input.
    Yaml,
}

/// Output format for flattened bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable `key = value` lines.
    Table,
    /// A JSON object of key/value pairs.
    Json,
    /// CSV with `key,value` records.
    Csv,
}

/// Infer the input format from a file extension.
pub fn detect_format(path: &Path) -> Result<InputFormat, CliError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(InputFormat::Json),
        Some("yaml" | "yml") => Ok(InputFormat::Yaml),
        _ => Err(CliError::InvalidArguments(format!(
            "cannot infer input format of {}; use --format",
            path.display()
        ))),
    }
}

/// Load a configuration file into a [`Value`] tree.
pub fn load_value(path: &Path, format: Option<InputFormat>) -> Result<Value, CliError> {
    let format = match format {
        Some(f) => f,
        None => detect_format(path)?,
    };

    let contents = fs::read_to_string(path)?;

    let json: serde_json::Value = match format {
        InputFormat::Json => serde_json::from_str(&contents)
            .map_err(|e| CliError::Parse(format!("{}: {e}", path.display())))?,
        InputFormat::Yaml => serde_yaml::from_str(&contents)
            .map_err(|e| CliError::Parse(format!("{}: {e}", path.display())))?,
    };

    Ok(Value::from(json))
}

/// Build binder settings from command-line options.
pub fn build_settings(
    prefix: Option<&str>,
    exclude: &[String],
    debug: bool,
) -> Result<BinderSettings, CliError> {
    let patterns = if exclude.is_empty() {
        None
    } else {
        Some(
            exclude
                .iter()
                .map(|p| {
                    ExcludePattern::new(p)
                        .map_err(|e| CliError::InvalidArguments(e.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    Ok(BinderSettings {
        prefix: prefix.map(ToString::to_string),
        debug: Some(debug),
        exclude_patterns: patterns,
    })
}
