//! Gradient configuration: the palette list and lookup-table size.
//!
//! Stored as JSON. Absent fields fall back to their defaults, so an empty
//! object `{}` yields the built-in configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::palette::Palette;

/// Default lookup-table length in pixels.
pub const DEFAULT_SIZE: usize = 256;

/// Palettes available to the viewer and the lookup-table size they are
/// generated at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientConfig {
    /// Lookup-table length. Default: 256.
    #[serde(default = "GradientConfig::default_size")]
    pub size: usize,
    /// Available palettes. Default: the built-in rainbow.
    #[serde(default = "GradientConfig::default_palettes")]
    pub palettes: Vec<Palette>,
}

impl GradientConfig {
    fn default_size() -> usize {
        DEFAULT_SIZE
    }

    fn default_palettes() -> Vec<Palette> {
        vec![Palette::default_rainbow()]
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.palettes.is_empty() {
            return Err(ConfigError::NoPalettes);
        }
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(
            "loaded {} palette(s) from {}",
            config.palettes.len(),
            path.display()
        );
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a palette by its display name.
    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|palette| palette.name == name)
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            palettes: Self::default_palettes(),
        }
    }
}
