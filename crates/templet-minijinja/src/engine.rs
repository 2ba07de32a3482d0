//! MiniJinja engine with a digest-keyed compiled-template cache.

use std::collections::{HashSet, VecDeque};

use log::{error, info, trace, warn};
use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, UndefinedBehavior};
use parking_lot::{RwLock, RwLockWriteGuard};
use serde_json::Value;

use templet_api::{CacheKeyAlgorithm, EngineError, Fragment, TemplateEngine};

use crate::options::{MiniJinjaEngineOptions, SyntaxOptions};

/// Compiled templates live inside the environment; the queue and set track
/// insertion order and membership for bounded, oldest-first eviction.
struct Compiled {
    env: Environment<'static>,
    keys: VecDeque<String>,
    present: HashSet<String>,
}

/// MiniJinja implementation of [`TemplateEngine`].
///
/// Fragment bodies use Jinja-family syntax (`{{ }}`, `{% %}`, `{# #}` by
/// default, all six delimiters configurable). Bodies are compiled at most
/// once per distinct body, keyed by a digest of the source text; with a
/// `cache_size` configured the oldest entry is replaced once the limit is
/// reached.
pub struct MiniJinjaTemplateEngine {
    inner: RwLock<Compiled>,
    cache_size: Option<u64>,
    algorithm: CacheKeyAlgorithm,
    wrapping_root: Option<String>,
}

impl MiniJinjaTemplateEngine {
    pub fn new(options: MiniJinjaEngineOptions) -> Result<Self, EngineError> {
        let syntax = &options.syntax;
        let mut env = Environment::new();
        // Chainable rather than Lenient: lenient rendering must also let
        // attribute lookups on missing values come out empty, not error.
        env.set_undefined_behavior(if syntax.strict_variables {
            UndefinedBehavior::Strict
        } else {
            UndefinedBehavior::Chainable
        });
        env.set_trim_blocks(syntax.new_line_trimming);
        env.set_syntax(compose_syntax(syntax)?);
        info!(
            "minijinja template engine created (strict: {}, cache size: {:?})",
            syntax.strict_variables, options.cache_size
        );
        let wrapping_root = if syntax.wrapping_root_node_name.is_empty() {
            None
        } else {
            Some(syntax.wrapping_root_node_name.clone())
        };
        Ok(Self {
            inner: RwLock::new(Compiled {
                env,
                keys: VecDeque::new(),
                present: HashSet::new(),
            }),
            cache_size: options.cache_size,
            algorithm: options.cache_key_algorithm,
            wrapping_root,
        })
    }

    fn compile(&self, inner: &mut Compiled, key: &str, fragment: &Fragment) -> Result<(), EngineError> {
        if let Some(limit) = self.cache_size {
            while !inner.keys.is_empty() && inner.keys.len() as u64 >= limit.max(1) {
                if let Some(oldest) = inner.keys.pop_front() {
                    warn!("template cache limit exceeded, revisit the cacheSize setting");
                    inner.env.remove_template(&oldest);
                    inner.present.remove(&oldest);
                }
            }
        }
        trace!("compiling fragment [{}]", fragment.abbreviate());
        inner
            .env
            .add_template_owned(key.to_string(), fragment.body.clone())
            .map_err(|err| {
                error!("could not compile fragment [{}]", fragment.abbreviate());
                EngineError::Compilation {
                    detail: err.to_string(),
                    fragment: fragment.abbreviate(),
                }
            })?;
        inner.keys.push_back(key.to_string());
        inner.present.insert(key.to_string());
        Ok(())
    }

    /// Payload as handed to the template, wrapped under the configured root
    /// node when one is set.
    fn context(&self, fragment: &Fragment) -> Value {
        match &self.wrapping_root {
            Some(root) => {
                let mut wrapped = serde_json::Map::new();
                wrapped.insert(root.clone(), fragment.payload.clone());
                Value::Object(wrapped)
            }
            None => fragment.payload.clone(),
        }
    }
}

impl TemplateEngine for MiniJinjaTemplateEngine {
    fn process(&self, fragment: &Fragment) -> Result<String, EngineError> {
        let key = self.algorithm.digest_hex(&fragment.body);
        let context = self.context(fragment);

        {
            let inner = self.inner.read();
            if inner.present.contains(&key) {
                trace!("processing fragment {} with minijinja", fragment.id);
                return render(&inner.env, &key, &context, fragment);
            }
        }

        let mut inner = self.inner.write();
        if !inner.present.contains(&key) {
            self.compile(&mut inner, &key, fragment)?;
        }
        let inner = RwLockWriteGuard::downgrade(inner);
        trace!("processing fragment {} with minijinja", fragment.id);
        render(&inner.env, &key, &context, fragment)
    }
}

fn compose_syntax(options: &SyntaxOptions) -> Result<SyntaxConfig, EngineError> {
    SyntaxConfig::builder()
        .block_delimiters(
            options.delimiter_execute_open.clone(),
            options.delimiter_execute_close.clone(),
        )
        .variable_delimiters(
            options.delimiter_print_open.clone(),
            options.delimiter_print_close.clone(),
        )
        .comment_delimiters(
            options.delimiter_comment_open.clone(),
            options.delimiter_comment_close.clone(),
        )
        .build()
        .map_err(|err| EngineError::Config(format!("invalid syntax delimiters: {err}")))
}

fn render(
    env: &Environment<'static>,
    key: &str,
    context: &Value,
    fragment: &Fragment,
) -> Result<String, EngineError> {
    let template = env.get_template(key).map_err(|err| EngineError::Compilation {
        detail: err.to_string(),
        fragment: fragment.abbreviate(),
    })?;
    template.render(context).map_err(|err| {
        error!("could not apply payload to fragment [{}]", fragment.abbreviate());
        EngineError::Evaluation {
            detail: err.to_string(),
            fragment: fragment.abbreviate(),
        }
    })
}
