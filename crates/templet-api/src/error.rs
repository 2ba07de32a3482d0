//! Error type shared by the core and every backend.

use thiserror::Error;

/// Error type for engine construction and fragment processing.
///
/// Backends map their native template errors onto `Compilation` (the body
/// could not be parsed) or `Evaluation` (the payload could not be applied),
/// keeping engine internals out of the public API. Both variants carry the
/// abbreviated fragment body so log lines and error messages stay readable.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Template body could not be parsed or compiled.
    #[error("could not compile fragment [{fragment}]: {detail}")]
    Compilation { detail: String, fragment: String },

    /// Payload could not be applied to a compiled template.
    #[error("could not apply payload to fragment [{fragment}]: {detail}")]
    Evaluation { detail: String, fragment: String },

    /// Backend options JSON failed to decode.
    #[error("invalid engine options: {0}")]
    Options(#[from] serde_json::Error),

    /// Engine definition is malformed (e.g. blank factory name).
    #[error("invalid engine definition: {0}")]
    Config(String),

    /// No factory registered under the requested name.
    #[error("unknown template engine factory \"{name}\" (registered: {known:?})")]
    UnknownFactory { name: String, known: Vec<String> },
}
