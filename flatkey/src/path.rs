//! Flattened path utilities.
//!
//! A path is the ordered sequence of property-name segments from the
//! configuration root to a node. The root is represented by a single empty
//! segment, so joining a child path with `.` naturally yields the dotted
//! form, e.g. `["", "person", "name"]` joins to `.person.name`.

use crate::error::{Error, Result};
use crate::value::Value;

/// Computes the registration key for a path: the prefix concatenated with the
/// dot-joined segments, with a trailing dot stripped. The root path (a single
/// empty segment) yields exactly the prefix.
///
/// # Examples
///
/// ```
/// use flatkey::bind_key;
///
/// let root = vec![String::new()];
/// assert_eq!(bind_key("CFG", &root), "CFG");
///
/// let child = vec![String::new(), "person".to_string(), "name".to_string()];
/// assert_eq!(bind_key("CFG", &child), "CFG.person.name");
/// ```
#[must_use]
pub fn bind_key(prefix: &str, segments: &[String]) -> String {
    let mut key = format!("{prefix}{}", segments.join("."));
    if key.ends_with('.') {
        key.pop();
    }
    key
}

/// Resolves the value at a property path, walking from `root` and following
/// each segment. Empty segments are skipped (only the root's empty segment
/// should occur). Returns an owned snapshot of the value found.
///
/// # Errors
///
/// Fails fast with [`Error::UnresolvedSegment`] naming the offending segment
/// when a segment is missing on a map or instance, or when a segment is
/// applied to a leaf. There is no recovery policy; cyclic or adversarial
/// shapes are outside the contract.
///
/// # Examples
///
/// ```
/// use flatkey::{resolve, Value};
///
/// let root = Value::from(serde_json::json!({"person": {"name": "ada"}}));
/// let path = vec![String::new(), "person".to_string(), "name".to_string()];
/// assert_eq!(resolve(&root, &path).unwrap(), Value::from("ada"));
/// ```
pub fn resolve(root: &Value, segments: &[String]) -> Result<Value> {
    let mut current = root.clone();

    for segment in segments {
        if segment.is_empty() {
            continue;
        }

        let next = match &current {
            Value::Map(map) => map.get(segment).cloned(),
            Value::Instance(instance) => instance.get(segment),
            _ => None,
        };

        current = next.ok_or_else(|| Error::UnresolvedSegment {
            segment: segment.clone(),
            path: display_path(segments),
        })?;
    }

    Ok(current)
}

/// Dotted rendering of a segment path, without the root's empty segment.
fn display_path(segments: &[String]) -> String {
    segments
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(".")
}
