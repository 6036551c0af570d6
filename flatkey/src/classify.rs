//! Property classification and leaf determination.
//!
//! The classifier decides which property names of a value are traversable
//! configuration data; leaf determination decides where recursion stops.
//! Both are pure functions of their input.

use crate::value::Value;

/// Names reserved by object machinery, never treated as configuration data.
const RESERVED_NAMES: &[&str] = &["constructor", "__proto__"];

/// Returns the ordered property names of `value` that qualify as traversable
/// configuration data.
///
/// - Leaves have no classified properties.
/// - Maps classify to their keys, in map order.
/// - Instances classify to the field names of every shape level, from
///   most-derived to least-derived, keeping only fields that resolve to a
///   value on the instance. A name declared on several levels appears once
///   per declaring level; duplicates only cause a redundant revisit, never an
///   incorrect value, so they are not collapsed here.
///
/// # Examples
///
/// ```
/// use flatkey::{classify, Value};
///
/// let value = Value::from(serde_json::json!({"a": 1, "b": 2}));
/// assert_eq!(classify(&value), vec!["a", "b"]);
/// assert!(classify(&Value::from("leaf")).is_empty());
/// ```
#[must_use]
pub fn classify(value: &Value) -> Vec<String> {
    match value {
        Value::Map(map) => map
            .keys()
            .filter(|name| !is_reserved(name))
            .cloned()
            .collect(),
        Value::Instance(instance) => instance
            .shape_levels()
            .into_iter()
            .flat_map(|level| level.fields)
            .filter(|name| !is_reserved(name) && instance.get(name).is_some())
            .collect(),
        _ => Vec::new(),
    }
}

/// Returns true if `value` terminates traversal.
///
/// Null, booleans, numbers, strings, and arrays are leaves. Arrays are bound
/// whole rather than element by element. Maps and instances are never
/// leaves, even when they classify to zero properties; such nodes simply
/// produce no children.
///
/// # Examples
///
/// ```
/// use flatkey::{is_leaf, Value};
///
/// assert!(is_leaf(&Value::Null));
/// assert!(is_leaf(&Value::from(serde_json::json!([1, 2, 3]))));
/// assert!(!is_leaf(&Value::from(serde_json::json!({}))));
/// ```
#[must_use]
pub fn is_leaf(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_)
    )
}

fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{Reflect, ShapeLevel};
    use std::sync::Arc;

    struct ChainFixture;

    impl Reflect for ChainFixture {
        fn shape_levels(&self) -> Vec<ShapeLevel> {
            vec![
                ShapeLevel::new("Child", ["settings", "absent"]),
                ShapeLevel::new("Parent", ["parentSettings", "constructor"]),
                ShapeLevel::new("Grandparent", ["grandparentSettings"]),
            ]
        }

        fn get(&self, name: &str) -> Option<Value> {
            match name {
                "settings" => Some(Value::from(1)),
                "parentSettings" => Some(Value::from(2)),
                "grandparentSettings" => Some(Value::from(3)),
                _ => None,
            }
        }
    }

    struct Redeclared;

    impl Reflect for Redeclared {
        fn shape_levels(&self) -> Vec<ShapeLevel> {
            vec![
                ShapeLevel::new("Child", ["name"]),
                ShapeLevel::new("Base", ["name"]),
            ]
        }

        fn get(&self, name: &str) -> Option<Value> {
            (name == "name").then(|| Value::from("shared"))
        }
    }

    #[test]
    fn test_leaves_classify_empty() {
        assert!(classify(&Value::Null).is_empty());
        assert!(classify(&Value::from(true)).is_empty());
        assert!(classify(&Value::from(1)).is_empty());
        assert!(classify(&Value::from("s")).is_empty());
        assert!(classify(&Value::from(serde_json::json!([1, 2]))).is_empty());
    }

    #[test]
    fn test_map_classifies_to_keys() {
        let value = Value::from(serde_json::json!({"b": 1, "a": 2}));
        // BTreeMap order is deterministic
        assert_eq!(classify(&value), vec!["a", "b"]);
    }

    #[test]
    fn test_map_reserved_keys_filtered() {
        let value = Value::from(serde_json::json!({"constructor": 1, "__proto__": 2, "ok": 3}));
        assert_eq!(classify(&value), vec!["ok"]);
    }

    #[test]
    fn test_instance_walks_all_levels() {
        let value = Value::Instance(Arc::new(ChainFixture));
        assert_eq!(
            classify(&value),
            vec!["settings", "parentSettings", "grandparentSettings"]
        );
    }

    #[test]
    fn test_instance_absent_fields_skipped() {
        let value = Value::Instance(Arc::new(ChainFixture));
        assert!(!classify(&value).contains(&"absent".to_string()));
    }

    #[test]
    fn test_instance_reserved_names_filtered() {
        let value = Value::Instance(Arc::new(ChainFixture));
        assert!(!classify(&value).contains(&"constructor".to_string()));
    }

    #[test]
    fn test_redeclared_field_not_deduplicated() {
        let value = Value::Instance(Arc::new(Redeclared));
        assert_eq!(classify(&value), vec!["name", "name"]);
    }

    #[test]
    fn test_is_leaf() {
        assert!(is_leaf(&Value::Null));
        assert!(is_leaf(&Value::from(false)));
        assert!(is_leaf(&Value::from(serde_json::json!(1.5))));
        assert!(is_leaf(&Value::from("text")));
        assert!(is_leaf(&Value::from(serde_json::json!([1, 2, 3]))));
    }

    #[test]
    fn test_containers_are_not_leaves() {
        assert!(!is_leaf(&Value::from(serde_json::json!({}))));
        assert!(!is_leaf(&Value::Instance(Arc::new(ChainFixture))));
    }
}
