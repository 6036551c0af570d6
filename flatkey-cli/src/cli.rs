//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{FlattenCommand, ResolveCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for flattening configuration files into key bindings.
#[derive(Parser)]
#[command(name = "flatkey")]
#[command(version, about = "Flatten nested configuration into dot-delimited keys", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Flatten a configuration file into dot-delimited key bindings
    Flatten(FlattenCommand),

    /// Look up the value bound under a single flattened key
    Resolve(ResolveCommand),
}
