//! Shape-level reflection for class-like configuration instances.
//!
//! Rust has no runtime reflection, so inheritance is modeled as a declared,
//! finite list of shape levels: the type's own data fields first, then each
//! ancestor type's fields in order. The universal base type is never a
//! level.

use crate::value::Value;

/// One layer of a value's structural definition: its own fields, or one
/// ancestor type's fields.
///
/// # Examples
///
/// ```
/// use flatkey::ShapeLevel;
///
/// let level = ShapeLevel::new("ServiceConfig", ["settings", "timeouts"]);
/// assert_eq!(level.type_name, "ServiceConfig");
/// assert_eq!(level.fields.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeLevel {
    /// Name of the type that declares this level's fields.
    pub type_name: String,
    /// Data field names declared at this level.
    pub fields: Vec<String>,
}

impl ShapeLevel {
    /// Creates a shape level from a type name and its field names.
    pub fn new<N, F, S>(type_name: N, fields: F) -> Self
    where
        N: Into<String>,
        F: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// A configuration instance that can describe its own shape.
///
/// Implementors report their shape levels from most-derived to least-derived
/// and resolve individual fields on the instance itself. A field that
/// resolves to `None` is treated as absent and never surfaces in traversal;
/// behavioral members (methods) are simply never reported as fields.
///
/// # Examples
///
/// ```
/// use flatkey::{Reflect, ShapeLevel, Value};
///
/// struct AppConfig {
///     name: String,
/// }
///
/// impl Reflect for AppConfig {
///     fn shape_levels(&self) -> Vec<ShapeLevel> {
///         vec![ShapeLevel::new("AppConfig", ["name"])]
///     }
///
///     fn get(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(Value::from(self.name.as_str())),
///             _ => None,
///         }
///     }
/// }
///
/// let config = AppConfig { name: "demo".to_string() };
/// assert_eq!(config.get("name"), Some(Value::from("demo")));
/// ```
pub trait Reflect: Send + Sync {
    /// Shape levels ordered from most-derived to least-derived.
    fn shape_levels(&self) -> Vec<ShapeLevel>;

    /// Resolve a field by name on this instance.
    fn get(&self, name: &str) -> Option<Value>;

    /// Display name for this instance, taken from the most-derived level.
    fn type_name(&self) -> String {
        self.shape_levels()
            .first()
            .map_or_else(|| "instance".to_string(), |level| level.type_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Derived;

    impl Reflect for Derived {
        fn shape_levels(&self) -> Vec<ShapeLevel> {
            vec![
                ShapeLevel::new("Derived", ["own"]),
                ShapeLevel::new("Base", ["inherited"]),
            ]
        }

        fn get(&self, name: &str) -> Option<Value> {
            match name {
                "own" => Some(Value::from(1)),
                "inherited" => Some(Value::from(2)),
                _ => None,
            }
        }
    }

    struct Empty;

    impl Reflect for Empty {
        fn shape_levels(&self) -> Vec<ShapeLevel> {
            Vec::new()
        }

        fn get(&self, _name: &str) -> Option<Value> {
            None
        }
    }

    #[test]
    fn test_shape_levels_most_derived_first() {
        let levels = Derived.shape_levels();
        assert_eq!(levels[0].type_name, "Derived");
        assert_eq!(levels[1].type_name, "Base");
    }

    #[test]
    fn test_type_name_from_first_level() {
        assert_eq!(Derived.type_name(), "Derived");
    }

    #[test]
    fn test_type_name_fallback() {
        assert_eq!(Empty.type_name(), "instance");
    }

    #[test]
    fn test_get_unknown_field() {
        assert_eq!(Derived.get("missing"), None);
    }

    #[test]
    fn test_shape_level_new_accepts_mixed_inputs() {
        let level = ShapeLevel::new(String::from("T"), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(level.fields, vec!["a", "b"]);
    }
}
