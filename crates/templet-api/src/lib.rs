//! # Templet API - Engine Contract
//!
//! `templet-api` defines the contract between the templet core and its
//! template-engine backends:
//!
//! - [`Fragment`]: a unit of work — template body plus JSON payload
//! - [`TemplateEngine`]: renders fragments to strings
//! - [`TemplateEngineFactory`]: builds engines from JSON options
//! - [`EngineError`]: the error currency of the whole workspace
//!
//! Backends live in their own crates (`templet-handlebars`,
//! `templet-minijinja`) and are resolved by name through the registry in the
//! `templet` crate. This crate carries no engine implementation, only the
//! types every side of that boundary shares.
//!
//! ## Quick Start
//!
//! ```rust
//! use templet_api::{EngineError, Fragment, TemplateEngine};
//!
//! struct Verbatim;
//!
//! impl TemplateEngine for Verbatim {
//!     fn process(&self, fragment: &Fragment) -> Result<String, EngineError> {
//!         Ok(fragment.body.clone())
//!     }
//! }
//!
//! let fragment = Fragment::new("snippet", serde_json::json!({}), "Hello!");
//! let engine = Verbatim;
//! assert_eq!(engine.process(&fragment).unwrap(), "Hello!");
//! ```

mod cache_key;
mod engine;
mod error;
mod fragment;

pub use cache_key::CacheKeyAlgorithm;
pub use engine::{TemplateEngine, TemplateEngineFactory};
pub use error::EngineError;
pub use fragment::Fragment;
