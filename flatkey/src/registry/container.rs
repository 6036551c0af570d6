//! In-memory key-value container.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::binder::Registry;
use crate::error::{Error, Result};
use crate::reflect::Reflect;
use crate::value::Value;

/// A minimal dependency-injection style container.
///
/// Holds constant value bindings produced by the flattener and singleton
/// instances registered by the auto-injection module. Binding a key that
/// already exists overwrites it; the binder may legitimately register the
/// same key twice when a field is redeclared across shape levels.
///
/// # Examples
///
/// ```
/// use flatkey::{Container, Registry, Value};
///
/// let mut container = Container::new();
/// container.bind_constant("CFG.name", Value::from("demo"));
///
/// assert_eq!(container.resolve("CFG.name").unwrap(), &Value::from("demo"));
/// assert!(container.resolve("CFG.other").is_err());
/// ```
#[derive(Default)]
pub struct Container {
    constants: BTreeMap<String, Value>,
    instances: BTreeMap<String, Arc<dyn Reflect>>,
}

impl Container {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a singleton instance under an identifier.
    pub fn bind_instance(&mut self, key: &str, instance: Arc<dyn Reflect>) {
        self.instances.insert(key.to_string(), instance);
    }

    /// The constant bound under `key`, if any.
    #[must_use]
    pub fn constant(&self, key: &str) -> Option<&Value> {
        self.constants.get(key)
    }

    /// A handle to the singleton instance bound under `key`, if any.
    #[must_use]
    pub fn instance(&self, key: &str) -> Option<Arc<dyn Reflect>> {
        self.instances.get(key).cloned()
    }

    /// Resolves the constant bound under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotBound`] when no constant exists under the key.
    pub fn resolve(&self, key: &str) -> Result<&Value> {
        self.constants.get(key).ok_or_else(|| Error::NotBound {
            key: key.to_string(),
        })
    }

    /// Returns true if a constant is bound under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.constants.contains_key(key)
    }

    /// Number of constant bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Returns true if no constants are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Iterates over bound keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.constants.keys().map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.constants.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Registry for Container {
    fn bind_constant(&mut self, key: &str, value: Value) {
        self.constants.insert(key.to_string(), value);
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("constants", &self.constants)
            .field("instances", &self.instances.keys().collect::<Vec<_>>())
            .finish()
    }
}
