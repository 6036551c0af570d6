//! Main entry point for the flatkey CLI.
//!
//! This is the command-line interface for the flatkey configuration
//! flattener. It provides commands for working with configuration files:
//! - `flatten`: Flatten a configuration file into dot-delimited key bindings
//! - `resolve`: Look up the value bound under a single flattened key

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // The binding trace is emitted at debug level, so --debug implies
    // verbose logging.
    let debug_requested = match &cli.command {
        cli::Command::Flatten(cmd) => cmd.debug,
        cli::Command::Resolve(_) => false,
    };
    flatkey::init_logger(cli.verbose || debug_requested, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Flatten(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
