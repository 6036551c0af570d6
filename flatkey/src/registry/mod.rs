//! Registry-side collaborators for the binder.
//!
//! This module provides:
//! - [`Container`]: a minimal in-memory key-value container that accepts
//!   constant bindings and singleton instances.
//! - [`InjectionModule`] and [`AutoInjectionModule`]: loadable units that run
//!   the flattener over a configuration root or over a caller-owned list of
//!   configuration types.

pub mod container;
pub mod module;

// Re-export key types at module root
pub use container::Container;
pub use module::{AutoInjectionModule, ConfigEntry, InjectionModule};
