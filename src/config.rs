use crate::convert::Style;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub style: Style,
    pub parallel: bool,
    pub array_parallel_threshold: usize,
    pub object_parallel_threshold: usize,
    pub cache_keys: bool,
    pub max_cached_key_len: usize,
    pub max_cache_entries: usize,
    pub max_depth: usize,
    pub indent: usize,
}

/// One configuration file. Every field is optional; whatever a file sets
/// overrides the layers below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub style: Option<Style>,
    pub parallel: Option<bool>,
    pub array_parallel_threshold: Option<usize>,
    pub object_parallel_threshold: Option<usize>,
    pub cache_keys: Option<bool>,
    pub max_cached_key_len: Option<usize>,
    pub max_cache_entries: Option<usize>,
    pub max_depth: Option<usize>,
    pub indent: Option<usize>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::default(),
            parallel: true,
            array_parallel_threshold: 100,
            object_parallel_threshold: 500,
            cache_keys: true,
            max_cached_key_len: 256,
            max_cache_entries: 10_000,
            max_depth: 512,
            indent: 2,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > explicit file > local config > global config > defaults
    pub fn load(style: Option<Style>, explicit: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigFile::from_file(&global_path)?);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".keycase.toml");
        if local_path.exists() {
            config = config.merge(ConfigFile::from_file(&local_path)?);
        }

        // An explicitly requested file must exist
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            config = config.merge(ConfigFile::from_file(&path)?);
        }

        // Apply CLI overrides
        if let Some(style) = style {
            config.style = style;
        }

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Defaults overlaid with a single file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigFile::from_file(path)?))
    }

    /// Overlay every value `layer` sets on top of `self`.
    pub fn merge(mut self, layer: ConfigFile) -> Self {
        if let Some(style) = layer.style {
            self.style = style;
        }
        if let Some(parallel) = layer.parallel {
            self.parallel = parallel;
        }
        if let Some(threshold) = layer.array_parallel_threshold {
            self.array_parallel_threshold = threshold;
        }
        if let Some(threshold) = layer.object_parallel_threshold {
            self.object_parallel_threshold = threshold;
        }
        if let Some(cache_keys) = layer.cache_keys {
            self.cache_keys = cache_keys;
        }
        if let Some(len) = layer.max_cached_key_len {
            self.max_cached_key_len = len;
        }
        if let Some(entries) = layer.max_cache_entries {
            self.max_cache_entries = entries;
        }
        if let Some(depth) = layer.max_depth {
            self.max_depth = depth;
        }
        if let Some(indent) = layer.indent {
            self.indent = indent;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "keycase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
