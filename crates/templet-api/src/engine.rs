//! Template engine abstraction.
//!
//! [`TemplateEngine`] is the rendering contract every backend implements;
//! [`TemplateEngineFactory`] is how the registry in the core crate builds a
//! backend from its JSON options. Factories are registered by name, so a
//! configuration document can select a backend without the caller linking
//! against it directly.

use serde_json::Value;

use crate::error::EngineError;
use crate::fragment::Fragment;

/// A template engine that renders fragments.
///
/// Implementations are expected to cache compiled templates internally:
/// `process` takes `&self` and may be called concurrently with the same or
/// different fragments.
pub trait TemplateEngine: Send + Sync {
    /// Compiles the fragment body (possibly from cache) and evaluates it
    /// against the fragment payload.
    fn process(&self, fragment: &Fragment) -> Result<String, EngineError>;
}

impl std::fmt::Debug for dyn TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn TemplateEngine")
    }
}

/// Builds [`TemplateEngine`] instances from backend-specific JSON options.
///
/// The `name` is the registry key a configuration document refers to, e.g.
/// `"handlebars"`. Options arrive as raw JSON and are decoded by the
/// backend; unknown or malformed options fail with
/// [`EngineError::Options`](crate::EngineError::Options).
pub trait TemplateEngineFactory: Send + Sync {
    /// Registry key for this backend.
    fn name(&self) -> &'static str;

    /// Creates an engine configured by `config`.
    fn create(&self, config: &Value) -> Result<Box<dyn TemplateEngine>, EngineError>;
}
