//! Loadable injection modules.
//!
//! An injection module packages a configuration source together with its
//! binder settings so it can be loaded into a registry in one call. The
//! auto-injection variant works from an explicit, caller-owned list of
//! configuration types built at startup; there is no hidden process-wide
//! metadata registry.

use std::sync::Arc;

use log::debug;

use crate::binder::{bind_all, Registry};
use crate::error::{Error, Result};
use crate::reflect::Reflect;
use crate::settings::BinderSettings;
use crate::value::Value;

/// A module that registers one configuration root and all of its valid
/// subproperties.
///
/// # Examples
///
/// ```
/// use flatkey::{BinderSettings, Container, InjectionModule, Value};
///
/// let root = Value::from(serde_json::json!({"timeout": 30}));
/// let module = InjectionModule::new(root);
///
/// let mut container = Container::new();
/// module.load(&mut container).unwrap();
/// assert_eq!(container.constant("CFG.timeout"), Some(&Value::from(30)));
/// ```
pub struct InjectionModule {
    root: Value,
    settings: BinderSettings,
}

impl InjectionModule {
    /// Creates a module for `root` with default settings.
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self {
            root,
            settings: BinderSettings::default(),
        }
    }

    /// Creates a module for `root` with explicit settings.
    #[must_use]
    pub fn with_settings(root: Value, settings: BinderSettings) -> Self {
        Self { root, settings }
    }

    /// Flattens the root and registers every reachable node.
    ///
    /// # Errors
    ///
    /// Propagates traversal failures from [`bind_all`].
    pub fn load<R: Registry + ?Sized>(&self, registry: &mut R) -> Result<()> {
        bind_all(registry, &self.root, &self.settings)
    }
}

/// One auto-registered configuration type: an identifier, optional binder
/// settings, and a factory that constructs the instance.
pub struct ConfigEntry {
    identifier: String,
    settings: Option<BinderSettings>,
    factory: Box<dyn Fn() -> Arc<dyn Reflect>>,
}

impl ConfigEntry {
    /// Creates an entry for a defaultable configuration type, identified by
    /// its type name.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatkey::{ConfigEntry, Reflect, ShapeLevel, Value};
    ///
    /// #[derive(Default)]
    /// struct AppConfig;
    ///
    /// impl Reflect for AppConfig {
    ///     fn shape_levels(&self) -> Vec<ShapeLevel> {
    ///         vec![ShapeLevel::new("AppConfig", ["name"])]
    ///     }
    ///
    ///     fn get(&self, name: &str) -> Option<Value> {
    ///         (name == "name").then(|| Value::from("demo"))
    ///     }
    /// }
    ///
    /// let entry = ConfigEntry::of::<AppConfig>();
    /// assert!(entry.identifier().contains("AppConfig"));
    /// ```
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: Reflect + Default + 'static,
    {
        Self {
            identifier: std::any::type_name::<T>().to_string(),
            settings: None,
            factory: Box::new(|| Arc::new(T::default())),
        }
    }

    /// Creates an entry from an explicit identifier and factory.
    pub fn from_factory<F>(identifier: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn Reflect> + 'static,
    {
        Self {
            identifier: identifier.into(),
            settings: None,
            factory: Box::new(factory),
        }
    }

    /// Overrides the identifier the instance is registered under.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Attaches binder settings to this entry.
    #[must_use]
    pub fn with_settings(mut self, settings: BinderSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Replaces the factory the instance is constructed with.
    #[must_use]
    pub fn with_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn Reflect> + 'static,
    {
        self.factory = Box::new(factory);
        self
    }

    /// The identifier this entry registers its instance under.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Settings for flattening this entry's instance: the attached settings,
    /// or the underscore-exclusion defaults.
    fn effective_settings(&self) -> BinderSettings {
        self.settings
            .clone()
            .unwrap_or_else(BinderSettings::underscore_exclusion)
    }
}

/// A module that registers a caller-owned list of configuration types and
/// flattens each resolved instance.
///
/// For every entry, the instance is constructed once, bound as a singleton
/// under the entry's identifier, resolved back through the container, and
/// then flattened with the entry's settings (or the underscore-exclusion
/// defaults).
///
/// # Examples
///
/// ```
/// use flatkey::{AutoInjectionModule, ConfigEntry, Container, Reflect, ShapeLevel, Value};
///
/// #[derive(Default)]
/// struct AppConfig;
///
/// impl Reflect for AppConfig {
///     fn shape_levels(&self) -> Vec<ShapeLevel> {
///         vec![ShapeLevel::new("AppConfig", ["name"])]
///     }
///
///     fn get(&self, name: &str) -> Option<Value> {
///         (name == "name").then(|| Value::from("demo"))
///     }
/// }
///
/// let module = AutoInjectionModule::new(vec![ConfigEntry::of::<AppConfig>()]);
/// let mut container = Container::new();
/// module.load(&mut container).unwrap();
///
/// assert_eq!(container.constant("CFG.name"), Some(&Value::from("demo")));
/// ```
pub struct AutoInjectionModule {
    entries: Vec<ConfigEntry>,
}

impl AutoInjectionModule {
    /// Creates a module from an explicit entry list.
    #[must_use]
    pub fn new(entries: Vec<ConfigEntry>) -> Self {
        Self { entries }
    }

    /// Registers every entry into `container`, using the container itself as
    /// the resolver.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotBound`] if an instance cannot be resolved back
    /// after binding, and propagates traversal failures from [`bind_all`].
    pub fn load(&self, container: &mut super::Container) -> Result<()> {
        for entry in &self.entries {
            debug!("registering configuration type {}", entry.identifier);

            let instance = (entry.factory)();
            container.bind_instance(&entry.identifier, Arc::clone(&instance));

            let resolved = container
                .instance(&entry.identifier)
                .ok_or_else(|| Error::NotBound {
                    key: entry.identifier.clone(),
                })?;

            bind_all(
                container,
                &Value::Instance(resolved),
                &entry.effective_settings(),
            )?;
        }
        Ok(())
    }

    /// Registers every entry into an arbitrary registry, resolving instances
    /// through a caller-provided resolver.
    ///
    /// The caller owns the singleton lifecycle: when the resolver knows the
    /// identifier its instance is flattened, otherwise the entry's factory
    /// constructs a fresh one.
    ///
    /// # Errors
    ///
    /// Propagates traversal failures from [`bind_all`].
    pub fn load_with<R, F>(&self, registry: &mut R, resolver: F) -> Result<()>
    where
        R: Registry + ?Sized,
        F: Fn(&str) -> Option<Arc<dyn Reflect>>,
    {
        for entry in &self.entries {
            debug!("registering configuration type {}", entry.identifier);

            let resolved = resolver(&entry.identifier).unwrap_or_else(|| (entry.factory)());

            bind_all(
                registry,
                &Value::Instance(resolved),
                &entry.effective_settings(),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::ShapeLevel;
    use crate::registry::Container;
    use crate::settings::ExcludePattern;

    #[derive(Default)]
    struct AppConfig;

    impl Reflect for AppConfig {
        fn shape_levels(&self) -> Vec<ShapeLevel> {
            vec![ShapeLevel::new("AppConfig", ["name", "_secret"])]
        }

        fn get(&self, name: &str) -> Option<Value> {
            match name {
                "name" => Some(Value::from("demo")),
                "_secret" => Some(Value::from("hidden")),
                _ => None,
            }
        }
    }

    #[derive(Default)]
    struct OtherConfig;

    impl Reflect for OtherConfig {
        fn shape_levels(&self) -> Vec<ShapeLevel> {
            vec![ShapeLevel::new("OtherConfig", ["port"])]
        }

        fn get(&self, name: &str) -> Option<Value> {
            (name == "port").then(|| Value::from(8080))
        }
    }

    #[test]
    fn test_injection_module_loads_root() {
        let root = Value::from(serde_json::json!({"a": {"b": 1}}));
        let module = InjectionModule::new(root);

        let mut container = Container::new();
        module.load(&mut container).unwrap();

        assert_eq!(container.constant("CFG.a.b"), Some(&Value::from(1)));
        assert_eq!(container.len(), 3);
    }

    #[test]
    fn test_injection_module_with_settings() {
        let root = Value::from(serde_json::json!({"a": 1, "xB": 2}));
        let settings = BinderSettings {
            prefix: Some("APP".to_string()),
            exclude_patterns: Some(vec![ExcludePattern::new("^x").unwrap()]),
            ..Default::default()
        };
        let module = InjectionModule::with_settings(root, settings);

        let mut container = Container::new();
        module.load(&mut container).unwrap();

        assert_eq!(container.constant("APP.a"), Some(&Value::from(1)));
        assert!(container.constant("APP.xB").is_none());
    }

    #[test]
    fn test_auto_module_binds_singleton_and_flattens() {
        let module = AutoInjectionModule::new(vec![ConfigEntry::of::<AppConfig>()]);
        let mut container = Container::new();
        module.load(&mut container).unwrap();

        // Singleton registered under the type name
        let identifier = std::any::type_name::<AppConfig>();
        assert!(container.instance(identifier).is_some());

        // Instance flattened under the default prefix
        assert_eq!(container.constant("CFG.name"), Some(&Value::from("demo")));
        assert!(matches!(
            container.constant("CFG"),
            Some(Value::Instance(_))
        ));
    }

    #[test]
    fn test_auto_module_default_excludes_underscores() {
        let module = AutoInjectionModule::new(vec![ConfigEntry::of::<AppConfig>()]);
        let mut container = Container::new();
        module.load(&mut container).unwrap();

        assert!(container.constant("CFG._secret").is_none());
    }

    #[test]
    fn test_auto_module_explicit_settings_win() {
        let entry = ConfigEntry::of::<AppConfig>().with_settings(BinderSettings {
            prefix: Some("APP".to_string()),
            ..Default::default()
        });
        let module = AutoInjectionModule::new(vec![entry]);
        let mut container = Container::new();
        module.load(&mut container).unwrap();

        // No underscore default when settings are explicit
        assert_eq!(
            container.constant("APP._secret"),
            Some(&Value::from("hidden"))
        );
    }

    #[test]
    fn test_auto_module_custom_identifier() {
        let entry = ConfigEntry::of::<AppConfig>().with_identifier("app");
        let module = AutoInjectionModule::new(vec![entry]);
        let mut container = Container::new();
        module.load(&mut container).unwrap();

        assert!(container.instance("app").is_some());
    }

    #[test]
    fn test_auto_module_multiple_entries_need_distinct_prefixes() {
        let module = AutoInjectionModule::new(vec![
            ConfigEntry::of::<AppConfig>(),
            ConfigEntry::of::<OtherConfig>().with_settings(BinderSettings {
                prefix: Some("OTHER".to_string()),
                ..Default::default()
            }),
        ]);
        let mut container = Container::new();
        module.load(&mut container).unwrap();

        assert_eq!(container.constant("CFG.name"), Some(&Value::from("demo")));
        assert_eq!(
            container.constant("OTHER.port"),
            Some(&Value::from(8080))
        );
    }

    #[test]
    fn test_from_factory() {
        let entry = ConfigEntry::from_factory("custom", || Arc::new(OtherConfig));
        assert_eq!(entry.identifier(), "custom");

        let module = AutoInjectionModule::new(vec![entry]);
        let mut container = Container::new();
        module.load(&mut container).unwrap();
        assert_eq!(container.constant("CFG.port"), Some(&Value::from(8080)));
    }

    #[test]
    fn test_with_factory_replaces_construction() {
        let entry = ConfigEntry::of::<AppConfig>().with_factory(|| Arc::new(OtherConfig));
        let module = AutoInjectionModule::new(vec![entry]);
        let mut container = Container::new();
        module.load(&mut container).unwrap();

        assert_eq!(container.constant("CFG.port"), Some(&Value::from(8080)));
        assert!(container.constant("CFG.name").is_none());
    }

    #[test]
    fn test_load_with_external_resolver() {
        let module = AutoInjectionModule::new(vec![ConfigEntry::of::<AppConfig>()]);
        let mut container = Container::new();

        let external: Arc<dyn Reflect> = Arc::new(AppConfig);
        module
            .load_with(&mut container, |_| Some(Arc::clone(&external)))
            .unwrap();

        assert_eq!(container.constant("CFG.name"), Some(&Value::from("demo")));
    }
}
