//! Dynamic configuration values.
//!
//! A [`Value`] is the currency of the flattener: an owned, tree-shaped
//! snapshot of configuration data. Primitives, arrays, and null are leaves;
//! maps and [`Reflect`] instances are containers that the traversal descends
//! into.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::reflect::Reflect;

/// A dynamically shaped configuration value.
///
/// # Examples
///
/// ```
/// use flatkey::Value;
///
/// let value = Value::from(serde_json::json!({"name": "demo", "retries": 3}));
/// assert!(matches!(value, Value::Map(_)));
/// ```
#[derive(Clone)]
pub enum Value {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer or floating-point number.
    Number(serde_json::Number),
    /// A string.
    String(String),
    /// An array. Arrays are bound whole, never element by element.
    Array(Vec<Value>),
    /// A plain mapping of property names to values.
    Map(BTreeMap<String, Value>),
    /// A class-like instance described by shape levels.
    Instance(Arc<dyn Reflect>),
}

impl Value {
    /// The string slice inside a `String` value, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean inside a `Bool` value, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number as an `i64`, if the value is an integral number.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// The underlying map of a `Map` value, if any.
    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Render the value as JSON.
    ///
    /// Instances have no JSON shape of their own and are rendered as a
    /// `"<TypeName>"` marker string.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => serde_json::Value::Number(n.clone()),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Self::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Self::Instance(instance) => {
                serde_json::Value::String(format!("<{}>", instance.type_name()))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(instance) => write!(f, "<{}>", instance.type_name()),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Number(n) => write!(f, "Number({n})"),
            Self::String(s) => write!(f, "String({s:?})"),
            Self::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::Instance(instance) => write!(f, "Instance({})", instance.type_name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            // Instances compare by identity; two handles are equal only when
            // they point at the same instance.
            (Self::Instance(a), Self::Instance(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Convert any serializable type into a [`Value`] tree.
///
/// Struct fields become map entries; there is a single shape level, so this
/// is the right entry point for plain data structs without inheritance.
///
/// # Errors
///
/// Returns an error if the type fails to serialize.
///
/// # Examples
///
/// ```
/// use flatkey::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Limits {
///     retries: u32,
/// }
///
/// let value = to_value(&Limits { retries: 3 }).unwrap();
/// assert!(value.as_map().unwrap().contains_key("retries"));
/// ```
pub fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    Ok(Value::from(serde_json::to_value(value)?))
}
