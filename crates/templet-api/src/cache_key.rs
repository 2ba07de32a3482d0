//! Digest selection for compiled-template cache keys.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Hash algorithm used to derive a cache key from a template body.
///
/// Backends cache compiled templates keyed by a digest of the source text,
/// so identical bodies compile once regardless of which fragment they arrive
/// in. Configured as a lowercase string in engine options, e.g.
/// `{"cacheKeyAlgorithm": "sha512"}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheKeyAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl CacheKeyAlgorithm {
    /// Hex-encoded digest of `input`.
    pub fn digest_hex(&self, input: &str) -> String {
        match self {
            Self::Sha256 => hex::encode(Sha256::digest(input.as_bytes())),
            Self::Sha384 => hex::encode(Sha384::digest(input.as_bytes())),
            Self::Sha512 => hex::encode(Sha512::digest(input.as_bytes())),
        }
    }
}
