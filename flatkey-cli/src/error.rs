//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;

use flatkey::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// A configuration file could not be parsed.
    Parse(String),

    /// Output could not be written.
    Output(String),

    /// Semantic failure (e.g., key not bound) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., requested key not bound)
    /// - 4: Invalid arguments
    /// - 5: I/O or output error
    /// - 6: Other library error
    /// - 7: Configuration parse error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) | CliError::Output(_) => 5,
            CliError::Library(_) => 6,
            CliError::Parse(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Parse(msg) => write!(f, "Parse error: {msg}"),
            CliError::Output(msg) => write!(f, "Output error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        // A missing binding is a semantic failure, not an internal error
        if e.is_not_bound() {
            CliError::SemanticFailure(e.to_string())
        } else {
            CliError::Library(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(
            CliError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "x")).exit_code(),
            5
        );
        assert_eq!(CliError::Parse("x".into()).exit_code(), 7);
    }

    #[test]
    fn test_not_bound_maps_to_semantic_failure() {
        let err: CliError = LibError::NotBound {
            key: "CFG.missing".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 1);
        assert!(format!("{err}").contains("CFG.missing"));
    }

    #[test]
    fn test_other_library_errors_wrap() {
        let err: CliError = LibError::UnresolvedSegment {
            segment: "a".to_string(),
            path: "a".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 6);
    }
}
