//! MiniJinja engine options, including the configurable tag syntax.

use serde::{Deserialize, Serialize};
use templet_api::CacheKeyAlgorithm;

/// Configuration for [`MiniJinjaTemplateEngine`](crate::MiniJinjaTemplateEngine).
///
/// Decoded from the `config` document of an engine definition:
///
/// ```json
/// {
///   "cacheSize": 1000,
///   "cacheKeyAlgorithm": "sha256",
///   "syntax": {
///     "strictVariables": false,
///     "delimiterPrintOpen": "<|",
///     "delimiterPrintClose": "|>"
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MiniJinjaEngineOptions {
    /// Maximum number of compiled templates kept in the cache. `None` means
    /// unbounded. Once full, the oldest entry is replaced.
    pub cache_size: Option<u64>,
    /// Digest used to derive cache keys from template bodies.
    pub cache_key_algorithm: CacheKeyAlgorithm,
    /// Tag syntax and variable-lookup behavior.
    pub syntax: SyntaxOptions,
}

/// Tag delimiters and rendering behavior for the MiniJinja engine.
///
/// In strict mode, referencing a missing variable or attribute fails the
/// render. When strict mode is off such references render as empty output.
///
/// `wrapping_root_node_name` wraps the payload under a single root key
/// before rendering, which gives templates subscript access to dash-named
/// fields: with root node `ctx`, a field `data-id` is reachable as
/// `{{ ctx['data-id'] }}`. Empty string (the default) leaves the payload
/// unwrapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyntaxOptions {
    pub strict_variables: bool,
    /// Trim the newline that follows a closing block tag. On by default.
    pub new_line_trimming: bool,
    pub delimiter_comment_open: String,
    pub delimiter_comment_close: String,
    pub delimiter_execute_open: String,
    pub delimiter_execute_close: String,
    pub delimiter_print_open: String,
    pub delimiter_print_close: String,
    pub wrapping_root_node_name: String,
}

impl Default for SyntaxOptions {
    fn default() -> Self {
        Self {
            strict_variables: false,
            new_line_trimming: true,
            delimiter_comment_open: "{#".into(),
            delimiter_comment_close: "#}".into(),
            delimiter_execute_open: "{%".into(),
            delimiter_execute_close: "%}".into(),
            delimiter_print_open: "{{".into(),
            delimiter_print_close: "}}".into(),
            wrapping_root_node_name: String::new(),
        }
    }
}
