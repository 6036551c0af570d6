//! Error types for the flatkey library.
//!
//! This module provides the error hierarchy for flattening and registry
//! operations, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a flatkey error.
///
/// # Examples
///
/// ```
/// use flatkey::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("CFG")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the flatkey library.
///
/// Traversal is deliberately fail-fast: there is no validation layer, and a
/// malformed pattern or an unresolvable path propagates to the caller
/// unrecovered.
#[derive(Debug, Error)]
pub enum Error {
    /// A property path could not be resolved against the root value.
    ///
    /// Carries the segment that failed to resolve and the full dotted path
    /// that was being followed.
    #[error("cannot resolve segment '{segment}' in path '{path}'")]
    UnresolvedSegment {
        /// The path segment that did not resolve.
        segment: String,
        /// The full dotted path being resolved.
        path: String,
    },

    /// An exclusion pattern failed to compile.
    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A registry lookup found nothing under the requested key.
    #[error("nothing bound under key '{key}'")]
    NotBound {
        /// The key that was looked up.
        key: String,
    },

    /// A value could not be converted through serde.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Check if the error indicates a missing registry binding.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatkey::Error;
    ///
    /// let err = Error::NotBound { key: "CFG.missing".to_string() };
    /// assert!(err.is_not_bound());
    /// ```
    #[must_use]
    pub fn is_not_bound(&self) -> bool {
        matches!(self, Self::NotBound { .. })
    }

    /// Check if the error indicates a failed path resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatkey::Error;
    ///
    /// let err = Error::UnresolvedSegment {
    ///     segment: "missing".to_string(),
    ///     path: "settings.missing".to_string(),
    /// };
    /// assert!(err.is_unresolved());
    /// ```
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::UnresolvedSegment { .. })
    }
}
