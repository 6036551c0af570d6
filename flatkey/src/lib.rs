#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # flatkey
//!
//! A library for flattening nested configuration values into a namespace of
//! dot-delimited keys and registering every key/value pair into an external
//! key-value registry, such as a dependency-injection container.
//!
//! Consumers resolve individual named values without knowing the shape of
//! the whole tree: a root bound under `CFG` also yields `CFG.settings`,
//! `CFG.settings.a`, and so on for every reachable node.
//!
//! ## Core Types
//!
//! - [`Value`]: the dynamic configuration value model
//! - [`Reflect`] and [`ShapeLevel`]: declared shapes for class-like
//!   instances with inheritance
//! - [`BinderSettings`] and [`ExcludePattern`]: per-invocation options
//! - [`bind_all`] and [`Registry`]: the flattening traversal and its
//!   registry boundary
//! - [`Container`], [`InjectionModule`], [`AutoInjectionModule`]: registry
//!   collaborators
//!
//! ## Examples
//!
//! ```
//! use flatkey::{bind_all, BinderSettings, Container, Value};
//!
//! let root = Value::from(serde_json::json!({
//!     "settings": {"a": 1, "b": "name"},
//! }));
//!
//! let mut container = Container::new();
//! bind_all(&mut container, &root, &BinderSettings::default()).unwrap();
//!
//! assert_eq!(container.constant("CFG.settings.a"), Some(&Value::from(1)));
//! assert_eq!(container.len(), 4);
//! ```

pub mod binder;
pub mod classify;
pub mod error;
pub mod logging;
pub mod path;
pub mod reflect;
pub mod registry;
pub mod settings;
pub mod value;

// Re-export key types at crate root for convenience
pub use binder::{bind_all, Registry};
pub use classify::{classify, is_leaf};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, StderrLogger};
pub use path::{bind_key, resolve};
pub use reflect::{Reflect, ShapeLevel};
pub use registry::{AutoInjectionModule, ConfigEntry, Container, InjectionModule};
pub use settings::{is_excluded, BinderSettings, ExcludePattern, DEFAULT_PREFIX};
pub use value::{to_value, Value};
