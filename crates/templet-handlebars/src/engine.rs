//! Handlebars engine with a digest-keyed compiled-template cache.

use std::collections::{HashSet, VecDeque};

use handlebars::{no_escape, Handlebars, Template};
use log::{error, info, trace, warn};
use parking_lot::{RwLock, RwLockWriteGuard};

use templet_api::{CacheKeyAlgorithm, EngineError, Fragment, TemplateEngine};

use crate::options::HandlebarsEngineOptions;

/// Compiled templates plus the bookkeeping for bounded, oldest-first
/// eviction. Kept behind one lock so eviction and registration stay atomic.
struct Compiled {
    registry: Handlebars<'static>,
    keys: VecDeque<String>,
    present: HashSet<String>,
}

/// Handlebars implementation of [`TemplateEngine`].
///
/// Fragment bodies are compiled at most once per distinct body: the cache
/// key is a digest of the source text, so fragments sharing a template reuse
/// the compiled form. With a `cache_size` configured, the oldest entry is
/// replaced once the limit is reached.
pub struct HandlebarsTemplateEngine {
    inner: RwLock<Compiled>,
    cache_size: Option<u64>,
    algorithm: CacheKeyAlgorithm,
}

impl HandlebarsTemplateEngine {
    pub fn new(options: HandlebarsEngineOptions) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(options.strict);
        if !options.html_escape {
            registry.register_escape_fn(no_escape);
        }
        info!(
            "handlebars template engine created (strict: {}, cache size: {:?})",
            options.strict, options.cache_size
        );
        Self {
            inner: RwLock::new(Compiled {
                registry,
                keys: VecDeque::new(),
                present: HashSet::new(),
            }),
            cache_size: options.cache_size,
            algorithm: options.cache_key_algorithm,
        }
    }

    fn compile(&self, inner: &mut Compiled, key: &str, fragment: &Fragment) -> Result<(), EngineError> {
        if let Some(limit) = self.cache_size {
            while !inner.keys.is_empty() && inner.keys.len() as u64 >= limit.max(1) {
                if let Some(oldest) = inner.keys.pop_front() {
                    warn!("template cache limit exceeded, revisit the cacheSize setting");
                    inner.registry.unregister_template(&oldest);
                    inner.present.remove(&oldest);
                }
            }
        }
        trace!("compiling fragment [{}]", fragment.abbreviate());
        let template = Template::compile(&fragment.body).map_err(|err| {
            error!("could not compile fragment [{}]", fragment.abbreviate());
            EngineError::Compilation {
                detail: err.to_string(),
                fragment: fragment.abbreviate(),
            }
        })?;
        inner.registry.register_template(key, template);
        inner.keys.push_back(key.to_string());
        inner.present.insert(key.to_string());
        Ok(())
    }
}

impl TemplateEngine for HandlebarsTemplateEngine {
    fn process(&self, fragment: &Fragment) -> Result<String, EngineError> {
        let key = self.algorithm.digest_hex(&fragment.body);

        {
            let inner = self.inner.read();
            if inner.present.contains(&key) {
                trace!("processing fragment {} with handlebars", fragment.id);
                return render(&inner.registry, &key, fragment);
            }
        }

        let mut inner = self.inner.write();
        if !inner.present.contains(&key) {
            self.compile(&mut inner, &key, fragment)?;
        }
        let inner = RwLockWriteGuard::downgrade(inner);
        trace!("processing fragment {} with handlebars", fragment.id);
        render(&inner.registry, &key, fragment)
    }
}

fn render(
    registry: &Handlebars<'static>,
    key: &str,
    fragment: &Fragment,
) -> Result<String, EngineError> {
    registry.render(key, &fragment.payload).map_err(|err| {
        error!("could not apply payload to fragment [{}]", fragment.abbreviate());
        EngineError::Evaluation {
            detail: err.to_string(),
            fragment: fragment.abbreviate(),
        }
    })
}
