//! Factory registry: resolves engine definitions to engines.
//!
//! The registry is the lookup table between factory names appearing in
//! configuration and the backend crates implementing them. Built-in backends
//! are registered by [`EngineRegistry::with_defaults`] behind their cargo
//! features; applications can add their own factories with
//! [`EngineRegistry::register`].

use std::collections::HashMap;

use log::debug;
use templet_api::{EngineError, TemplateEngine, TemplateEngineFactory};

use crate::definition::EngineDefinition;

/// Registry of template engine factories, keyed by factory name.
pub struct EngineRegistry {
    factories: HashMap<String, Box<dyn TemplateEngineFactory>>,
}

impl EngineRegistry {
    /// Empty registry with no factories.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry with the built-in backends registered.
    ///
    /// Which backends are built in depends on the enabled cargo features
    /// (`handlebars` and `minijinja`, both on by default).
    pub fn with_defaults() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();
        #[cfg(feature = "handlebars")]
        registry.register(Box::new(templet_handlebars::HandlebarsEngineFactory));
        #[cfg(feature = "minijinja")]
        registry.register(Box::new(templet_minijinja::MiniJinjaEngineFactory));
        registry
    }

    /// Registers a factory under its own name. A later registration under
    /// the same name shadows the earlier one.
    pub fn register(&mut self, factory: Box<dyn TemplateEngineFactory>) {
        debug!("registering template engine factory \"{}\"", factory.name());
        self.factories.insert(factory.name().to_string(), factory);
    }

    /// Names of all registered factories, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds an engine for the given definition.
    ///
    /// Validates the definition before any factory lookup: a blank factory
    /// name is a configuration error, an unregistered one reports the known
    /// factories.
    pub fn create(&self, definition: &EngineDefinition) -> Result<Box<dyn TemplateEngine>, EngineError> {
        let name = definition.factory.trim();
        if name.is_empty() {
            return Err(EngineError::Config(
                "engine definition has a blank factory name".into(),
            ));
        }
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| EngineError::UnknownFactory {
                name: name.to_string(),
                known: self.names(),
            })?;
        debug!("creating template engine \"{name}\"");
        factory.create(&definition.config)
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
