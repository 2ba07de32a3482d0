//! Engine definition: which factory to use and how to configure it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Selects and configures a template engine backend.
///
/// This is the document a deployment hands to the registry:
///
/// ```json
/// {
///   "factory": "minijinja",
///   "config": {
///     "cacheSize": 1000,
///     "syntax": { "strictVariables": true }
///   }
/// }
/// ```
///
/// `config` is passed to the selected factory verbatim and defaults to an
/// empty object, which gives every backend its default options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineDefinition {
    /// Name of the registered factory, e.g. `"handlebars"`.
    pub factory: String,
    /// Backend-specific options document.
    #[serde(default = "empty_object")]
    pub config: Value,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl EngineDefinition {
    /// Definition selecting `factory` with default options.
    pub fn new(factory: impl Into<String>) -> Self {
        Self {
            factory: factory.into(),
            config: empty_object(),
        }
    }

    /// Replaces the backend options document.
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_defaults_to_empty_object() {
        let definition: EngineDefinition =
            serde_json::from_value(json!({"factory": "handlebars"})).unwrap();
        assert_eq!(definition.factory, "handlebars");
        assert_eq!(definition.config, json!({}));
    }

    #[test]
    fn builder_round_trips_through_json() {
        let definition =
            EngineDefinition::new("minijinja").with_config(json!({"cacheSize": 50}));
        let encoded = serde_json::to_value(&definition).unwrap();
        let decoded: EngineDefinition = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, definition);
    }
}
