//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `flatten`: Flatten a configuration file into dot-delimited key bindings
//! - `resolve`: Look up the value bound under a single flattened key

pub mod flatten;
pub mod resolve;

pub use flatten::FlattenCommand;
pub use resolve::ResolveCommand;
