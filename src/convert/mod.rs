pub mod cache;
pub mod style;
pub mod tokenizer;

pub use cache::KeyCache;
pub use style::{join, Style};
pub use tokenizer::tokenize;

use crate::error::{Error, Result};
use crate::Config;
use lazy_static::lazy_static;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

lazy_static! {
    static ref DEFAULT_TRANSFORMER: Transformer = Transformer::new(Config::default());
}

/// Recursive key renamer.
///
/// Objects get every key rewritten through [`tokenize`] and [`join`]; arrays
/// are walked element by element; scalars are copied unchanged. The input is
/// never modified.
///
/// When two keys of one object rename to the same key, the value of the later
/// entry wins and the key stays where it first appeared.
///
/// Clones share the key cache.
#[derive(Debug, Clone)]
pub struct Transformer {
    config: Config,
    cache: Arc<KeyCache>,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Transformer {
    pub fn new(config: Config) -> Self {
        let cache = Arc::new(KeyCache::new(config.max_cache_entries));
        Self { config, cache }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &KeyCache {
        &self.cache
    }

    pub fn transform(&self, value: &Value, style: Style) -> Result<Value> {
        self.walk(value, style, 0)
    }

    /// Convert any serializable value to the JSON model, then transform it.
    pub fn transform_serializable<T>(&self, value: &T, style: Style) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value)?;
        self.transform(&value, style)
    }

    /// Run [`Transformer::transform`] on tokio's blocking pool.
    pub async fn transform_async(&self, value: Value, style: Style) -> Result<Value> {
        let transformer = self.clone();
        tokio::task::spawn_blocking(move || transformer.transform(&value, style))
            .await
            .map_err(|e| Error::TaskFailed(e.to_string()))?
    }

    fn convert_key(&self, key: &str, style: Style) -> String {
        if self.config.cache_keys && key.len() <= self.config.max_cached_key_len {
            self.cache.get_or_convert(key, style)
        } else {
            style.convert(key)
        }
    }

    fn walk(&self, value: &Value, style: Style, depth: usize) -> Result<Value> {
        match value {
            Value::Object(map) => self.walk_object(map, style, self.descend(depth)?),
            Value::Array(items) => self.walk_array(items, style, self.descend(depth)?),
            _ => Ok(value.clone()),
        }
    }

    fn descend(&self, depth: usize) -> Result<usize> {
        let next = depth + 1;
        if next > self.config.max_depth {
            return Err(Error::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        Ok(next)
    }

    fn walk_array(&self, items: &[Value], style: Style, depth: usize) -> Result<Value> {
        let out = if self.config.parallel && items.len() > self.config.array_parallel_threshold {
            tracing::debug!(len = items.len(), depth, "transforming array in parallel");
            items
                .par_iter()
                .map(|item| self.walk(item, style, depth))
                .collect::<Result<Vec<_>>>()?
        } else {
            items
                .iter()
                .map(|item| self.walk(item, style, depth))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Value::Array(out))
    }

    fn walk_object(&self, map: &Map<String, Value>, style: Style, depth: usize) -> Result<Value> {
        let convert_entry = |(key, value): (&String, &Value)| -> Result<(String, Value)> {
            Ok((self.convert_key(key, style), self.walk(value, style, depth)?))
        };

        let entries = if self.config.parallel && map.len() > self.config.object_parallel_threshold
        {
            tracing::debug!(len = map.len(), depth, "transforming object in parallel");
            map.iter()
                .collect::<Vec<_>>()
                .into_par_iter()
                .map(convert_entry)
                .collect::<Result<Vec<_>>>()?
        } else {
            map.iter().map(convert_entry).collect::<Result<Vec<_>>>()?
        };

        // Insert serially so collisions resolve in source order
        let mut out = Map::with_capacity(entries.len());
        for (key, value) in entries {
            if out.contains_key(&key) {
                tracing::debug!(key = %key, %style, "renamed key collides; keeping the later value");
            }
            out.insert(key, value);
        }

        Ok(Value::Object(out))
    }
}

/// Transform `value` into the named style using the default configuration.
pub fn transform(value: &Value, style: &str) -> Result<Value> {
    let style: Style = style.parse()?;
    DEFAULT_TRANSFORMER.transform(value, style)
}

/// Deferred variant of [`transform`]. The style is validated before any work
/// is scheduled.
pub async fn transform_async(value: Value, style: &str) -> Result<Value> {
    let style: Style = style.parse()?;
    DEFAULT_TRANSFORMER.transform_async(value, style).await
}

/// Transform any serializable value. Values that do not fit the JSON model,
/// such as maps with non-string keys, are rejected as invalid input.
pub fn transform_serializable<T>(value: &T, style: &str) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    let style: Style = style.parse()?;
    DEFAULT_TRANSFORMER.transform_serializable(value, style)
}
