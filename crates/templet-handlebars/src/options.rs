//! Handlebars engine options.

use serde::{Deserialize, Serialize};
use templet_api::CacheKeyAlgorithm;

/// Configuration for [`HandlebarsTemplateEngine`](crate::HandlebarsTemplateEngine).
///
/// Decoded from the `config` document of an engine definition. All fields
/// are optional; the defaults give an unbounded cache, SHA-256 cache keys,
/// lenient variable lookup and no HTML escaping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HandlebarsEngineOptions {
    /// Maximum number of compiled templates kept in the cache. `None` means
    /// unbounded. Once full, the oldest entry is replaced.
    pub cache_size: Option<u64>,
    /// Digest used to derive cache keys from template bodies.
    pub cache_key_algorithm: CacheKeyAlgorithm,
    /// When true, referencing a missing variable fails the render instead of
    /// producing empty output.
    pub strict: bool,
    /// When true, interpolated values are HTML-escaped. Off by default since
    /// fragments usually carry markup that must pass through untouched.
    pub html_escape: bool,
}
