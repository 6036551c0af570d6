//! Command to flatten a configuration file into key bindings.

use std::io;
use std::path::PathBuf;

use clap::Args;
use flatkey::{bind_all, Container};

use crate::error::CliError;
use crate::utils::{build_settings, load_value, GlobalOptions, InputFormat, OutputFormat};

/// Flatten a configuration file into dot-delimited key bindings.
#[derive(Args)]
pub struct FlattenCommand {
    /// Configuration file to flatten (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Prefix for registration keys
    #[arg(long, env = "FLATKEY_PREFIX")]
    pub prefix: Option<String>,

    /// Exclude segments matching this pattern (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Trace every binding to stderr
    #[arg(long)]
    pub debug: bool,

    /// Input format (inferred from the file extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

impl FlattenCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = build_settings(self.prefix.as_deref(), &self.exclude, self.debug)?;
        let root = load_value(&self.file, self.format)?;

        let mut container = Container::new();
        bind_all(&mut container, &root, &settings)?;

        match self.output {
            OutputFormat::Table => {
                for (key, value) in container.iter() {
                    println!("{key} = {value}");
                }
            }
            OutputFormat::Json => {
                let object: serde_json::Map<String, serde_json::Value> = container
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_json()))
                    .collect();
                let rendered = serde_json::to_string_pretty(&object)
                    .map_err(|e| CliError::Output(e.to_string()))?;
                println!("{rendered}");
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(io::stdout());
                writer.write_record(["key", "value"])?;
                for (key, value) in container.iter() {
                    writer.write_record([key, value.to_string().as_str()])?;
                }
                writer.flush()?;
            }
        }

        if global.verbose && !global.quiet {
            eprintln!("{} bindings", container.len());
        }

        Ok(())
    }
}
