//! # Templet Handlebars Backend
//!
//! Handlebars adapter for the templet fragment template engine. Fragment
//! bodies are Handlebars templates; the payload object is the rendering
//! context.
//!
//! Compiled templates are cached keyed by a digest of the body, so repeated
//! fragments with identical bodies compile once. The cache is bounded by
//! `cacheSize` and evicts oldest-first, logging a warning when the limit is
//! hit.
//!
//! ## Options
//!
//! ```json
//! {
//!   "cacheSize": 1000,
//!   "cacheKeyAlgorithm": "sha256",
//!   "strict": false,
//!   "htmlEscape": false
//! }
//! ```
//!
//! HTML escaping is off by default: fragments are markup snippets that are
//! expected to pass through verbatim.
//!
//! ## Quick Start
//!
//! ```rust
//! use templet_api::{Fragment, TemplateEngine};
//! use templet_handlebars::{HandlebarsEngineOptions, HandlebarsTemplateEngine};
//!
//! let engine = HandlebarsTemplateEngine::new(HandlebarsEngineOptions::default());
//! let mut fragment = Fragment::new("snippet", serde_json::json!({}), "Hello {{ name }}!");
//! fragment.merge_in_payload(serde_json::json!({"name": "World"}));
//! assert_eq!(engine.process(&fragment).unwrap(), "Hello World!");
//! ```

mod engine;
mod options;

pub use engine::HandlebarsTemplateEngine;
pub use options::HandlebarsEngineOptions;

use serde_json::Value;
use templet_api::{EngineError, TemplateEngine, TemplateEngineFactory};

/// Factory registered under the name `"handlebars"`.
pub struct HandlebarsEngineFactory;

impl TemplateEngineFactory for HandlebarsEngineFactory {
    fn name(&self) -> &'static str {
        "handlebars"
    }

    fn create(&self, config: &Value) -> Result<Box<dyn TemplateEngine>, EngineError> {
        let options = if config.is_null() {
            HandlebarsEngineOptions::default()
        } else {
            serde_json::from_value(config.clone())?
        };
        Ok(Box::new(HandlebarsTemplateEngine::new(options)))
    }
}
