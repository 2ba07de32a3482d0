//! # Templet MiniJinja Backend
//!
//! Jinja-family adapter for the templet fragment template engine. Fragment
//! bodies use MiniJinja syntax — `{{ }}` print tags, `{% %}` execution tags
//! and `{# #}` comments, with all six delimiters configurable — and the
//! payload object is the rendering context.
//!
//! Compiled templates are cached keyed by a digest of the body, bounded by
//! `cacheSize` with oldest-first eviction, the same contract as the
//! Handlebars backend.
//!
//! ## Strict mode
//!
//! With `strictVariables` enabled, referencing a missing variable or
//! attribute fails the render. When disabled (the default) such references
//! render as empty output.
//!
//! ## Quick Start
//!
//! ```rust
//! use templet_api::{Fragment, TemplateEngine};
//! use templet_minijinja::{MiniJinjaEngineOptions, MiniJinjaTemplateEngine};
//!
//! let engine = MiniJinjaTemplateEngine::new(MiniJinjaEngineOptions::default()).unwrap();
//! let mut fragment = Fragment::new("snippet", serde_json::json!({}), "Hello {{ name }}!");
//! fragment.merge_in_payload(serde_json::json!({"name": "World"}));
//! assert_eq!(engine.process(&fragment).unwrap(), "Hello World!");
//! ```

mod engine;
mod options;

pub use engine::MiniJinjaTemplateEngine;
pub use options::{MiniJinjaEngineOptions, SyntaxOptions};

use serde_json::Value;
use templet_api::{EngineError, TemplateEngine, TemplateEngineFactory};

/// Factory registered under the name `"minijinja"`.
pub struct MiniJinjaEngineFactory;

impl TemplateEngineFactory for MiniJinjaEngineFactory {
    fn name(&self) -> &'static str {
        "minijinja"
    }

    fn create(&self, config: &Value) -> Result<Box<dyn TemplateEngine>, EngineError> {
        let options = if config.is_null() {
            MiniJinjaEngineOptions::default()
        } else {
            serde_json::from_value(config.clone())?
        };
        Ok(Box::new(MiniJinjaTemplateEngine::new(options)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use templet_api::Fragment;

    #[test]
    fn factory_creates_engine_from_json_options() {
        let factory = MiniJinjaEngineFactory;
        assert_eq!(factory.name(), "minijinja");

        let engine = factory
            .create(&json!({"syntax": {"strictVariables": true}}))
            .unwrap();
        let mut fragment = Fragment::new("snippet", json!({}), "{{ a }}");
        fragment.merge_in_payload(json!({"a": "ok"}));
        assert_eq!(engine.process(&fragment).unwrap(), "ok");
    }

    #[test]
    fn factory_rejects_malformed_options() {
        let factory = MiniJinjaEngineFactory;
        let err = factory.create(&json!({"cacheSize": "lots"})).unwrap_err();
        assert!(matches!(err, EngineError::Options(_)));
    }

    #[test]
    fn factory_accepts_null_config() {
        let factory = MiniJinjaEngineFactory;
        assert!(factory.create(&Value::Null).is_ok());
    }
}
