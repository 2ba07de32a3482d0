//! Applies one engine across fragments.

use log::trace;
use templet_api::{EngineError, Fragment, TemplateEngine};

use crate::definition::EngineDefinition;
use crate::registry::EngineRegistry;

/// Renders fragments with a configured engine.
///
/// The processor owns the engine resolved from an [`EngineDefinition`] and
/// applies it over fragments: [`process`](Self::process) returns the
/// rendered output, [`process_all`](Self::process_all) rewrites each
/// fragment body in place with its rendered form, which is how fragments
/// move to the next stage of a pipeline.
pub struct FragmentProcessor {
    engine: Box<dyn TemplateEngine>,
}

impl FragmentProcessor {
    /// Wraps an already-built engine.
    pub fn new(engine: Box<dyn TemplateEngine>) -> Self {
        Self { engine }
    }

    /// Resolves the definition through the registry and wraps the result.
    pub fn from_definition(
        registry: &EngineRegistry,
        definition: &EngineDefinition,
    ) -> Result<Self, EngineError> {
        Ok(Self::new(registry.create(definition)?))
    }

    /// Renders a single fragment.
    pub fn process(&self, fragment: &Fragment) -> Result<String, EngineError> {
        trace!("processing fragment {}", fragment.id);
        self.engine.process(fragment)
    }

    /// Renders every fragment, replacing its body with the output.
    ///
    /// Fails fast: fragments after the first failing one are left untouched.
    pub fn process_all(&self, fragments: &mut [Fragment]) -> Result<(), EngineError> {
        for fragment in fragments.iter_mut() {
            fragment.body = self.engine.process(fragment)?;
        }
        Ok(())
    }
}
