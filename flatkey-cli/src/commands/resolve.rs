//! Command to look up a single flattened key.

use std::path::PathBuf;

use clap::Args;
use flatkey::{bind_all, Container};

use crate::error::CliError;
use crate::utils::{build_settings, load_value, GlobalOptions, InputFormat};

/// Look up the value bound under a single flattened key.
#[derive(Args)]
pub struct ResolveCommand {
    /// Configuration file to flatten (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Flattened key to resolve, e.g. CFG.settings.a
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Prefix for registration keys
    #[arg(long, env = "FLATKEY_PREFIX")]
    pub prefix: Option<String>,

    /// Exclude segments matching this pattern (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Input format (inferred from the file extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,
}

impl ResolveCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let settings = build_settings(self.prefix.as_deref(), &self.exclude, false)?;
        let root = load_value(&self.file, self.format)?;

        let mut container = Container::new();
        bind_all(&mut container, &root, &settings)?;

        let value = container.resolve(&self.key)?;
        println!("{value}");
        Ok(())
    }
}
