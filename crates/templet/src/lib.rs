//! # Templet - Fragment Template Engine
//!
//! Templet renders *fragments* — snippets carrying a template body and a
//! JSON payload — through pluggable template-engine backends selected by
//! configuration:
//!
//! - [`EngineRegistry`]: resolves a factory name to a backend
//! - [`EngineDefinition`]: configuration document selecting and configuring
//!   a backend
//! - [`FragmentProcessor`]: applies the resolved engine across fragments
//!
//! Two backends ship with the workspace, each behind an on-by-default cargo
//! feature: `handlebars` (Handlebars syntax) and `minijinja` (Jinja-family
//! syntax). Both cache compiled templates keyed by a digest of the body.
//! Custom backends implement
//! [`TemplateEngineFactory`] and are added with
//! [`EngineRegistry::register`].
//!
//! ## Quick Start
//!
//! ```rust
//! use templet::{EngineDefinition, EngineRegistry, Fragment, FragmentProcessor};
//! use serde_json::json;
//!
//! let registry = EngineRegistry::with_defaults();
//! let definition = EngineDefinition::new("minijinja")
//!     .with_config(json!({"syntax": {"strictVariables": true}}));
//! let processor = FragmentProcessor::from_definition(&registry, &definition).unwrap();
//!
//! let mut fragment = Fragment::new("snippet", json!({}), "Hello {{ name }}!");
//! fragment.merge_in_payload(json!({"name": "World"}));
//!
//! assert_eq!(processor.process(&fragment).unwrap(), "Hello World!");
//! ```
//!
//! ## Selecting a backend from configuration
//!
//! ```rust
//! use templet::{EngineDefinition, EngineRegistry};
//! use serde_json::json;
//!
//! let definition: EngineDefinition = serde_json::from_value(json!({
//!     "factory": "handlebars",
//!     "config": {"cacheSize": 1000}
//! })).unwrap();
//!
//! let engine = EngineRegistry::with_defaults().create(&definition).unwrap();
//! # let _ = engine;
//! ```

mod definition;
mod processor;
mod registry;

pub use definition::EngineDefinition;
pub use processor::FragmentProcessor;
pub use registry::EngineRegistry;

// Contract types, re-exported so downstream crates depend on one crate.
pub use templet_api::{
    CacheKeyAlgorithm, EngineError, Fragment, TemplateEngine, TemplateEngineFactory,
};

// Built-in backends.
#[cfg(feature = "handlebars")]
pub use templet_handlebars::{
    HandlebarsEngineFactory, HandlebarsEngineOptions, HandlebarsTemplateEngine,
};
#[cfg(feature = "minijinja")]
pub use templet_minijinja::{
    MiniJinjaEngineFactory, MiniJinjaEngineOptions, MiniJinjaTemplateEngine, SyntaxOptions,
};
