//! Binder settings and segment exclusion patterns.
//!
//! Settings follow the optional-field pattern: a field left as `None` falls
//! back to its default at the point of use, so partially specified settings
//! behave like overlays on the defaults.

use std::str::FromStr;

use regex::Regex;

use crate::error::{Error, Result};

/// Prefix used for registration keys when none is configured.
pub const DEFAULT_PREFIX: &str = "CFG";

/// Settings for one flatten-and-register invocation.
///
/// # Examples
///
/// ```
/// use flatkey::BinderSettings;
///
/// let settings = BinderSettings {
///     prefix: Some("APP".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(settings.effective_prefix(), "APP");
/// assert!(!settings.debug_enabled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BinderSettings {
    /// Prefix for registration keys. Blank or whitespace-only values fall
    /// back to [`DEFAULT_PREFIX`].
    pub prefix: Option<String>,

    /// Emit one trace line per registration when true.
    pub debug: Option<bool>,

    /// Patterns matched against individual path segments; a matching segment
    /// excludes its entire subtree.
    pub exclude_patterns: Option<Vec<ExcludePattern>>,
}

impl BinderSettings {
    /// The prefix to use for registration keys.
    ///
    /// Returns the configured prefix, trimmed, when it is non-blank;
    /// otherwise [`DEFAULT_PREFIX`].
    #[must_use]
    pub fn effective_prefix(&self) -> &str {
        match &self.prefix {
            Some(p) if !p.trim().is_empty() => p.trim(),
            _ => DEFAULT_PREFIX,
        }
    }

    /// Whether the per-registration trace is enabled.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    /// The configured exclusion patterns, or an empty slice.
    #[must_use]
    pub fn patterns(&self) -> &[ExcludePattern] {
        self.exclude_patterns.as_deref().unwrap_or(&[])
    }

    /// Settings that exclude members whose names start with an underscore.
    ///
    /// This is the default applied to auto-registered configuration types
    /// that carry no settings of their own.
    #[must_use]
    pub fn underscore_exclusion() -> Self {
        Self {
            exclude_patterns: Some(vec![
                ExcludePattern::new("^_").expect("static pattern compiles")
            ]),
            ..Default::default()
        }
    }
}

/// A compiled exclusion pattern, matched against single path segments.
///
/// # Examples
///
/// ```
/// use flatkey::ExcludePattern;
///
/// let pattern: ExcludePattern = "^x".parse().unwrap();
/// assert!(pattern.is_match("xFoo"));
/// assert!(!pattern.is_match("foo"));
/// ```
#[derive(Debug, Clone)]
pub struct ExcludePattern(Regex);

impl ExcludePattern {
    /// Compiles an exclusion pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] when the pattern is not a valid regular
    /// expression.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self(Regex::new(pattern)?))
    }

    /// Returns true if the segment name matches this pattern.
    #[must_use]
    pub fn is_match(&self, segment: &str) -> bool {
        self.0.is_match(segment)
    }

    /// The original pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for ExcludePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl PartialEq for ExcludePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Returns true if the segment matches at least one pattern.
///
/// # Examples
///
/// ```
/// use flatkey::{is_excluded, ExcludePattern};
///
/// let patterns = vec!["^_".parse::<ExcludePattern>().unwrap()];
/// assert!(is_excluded("_private", &patterns));
/// assert!(!is_excluded("public", &patterns));
/// ```
#[must_use]
pub fn is_excluded(segment: &str, patterns: &[ExcludePattern]) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(segment))
}
