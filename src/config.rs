// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Provider configuration.
//!
//! The config is a plain value handed to the provider constructor, there is
//! no global instance. It can be built in code or loaded from a TOML file:
//!
//! ```toml
//! clear_color = [255, 0, 0, 0]
//! sprite_order = "front_to_back"
//! log_level = "debug"
//! log_file = "log/provider.log"
//! ```
//!
//! Missing keys fall back to their defaults.

use crate::error::{ProviderError, ProviderResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;

/// Order in which sprite collections submit their sprites by z_depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteOrder {
    /// lowest z_depth first, so higher z_depth is painted on top
    #[default]
    BackToFront,
    /// highest z_depth first
    FrontToBack,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// backbuffer clear color, [alpha, red, green, blue]
    pub clear_color: [u8; 4],
    pub sprite_order: SpriteOrder,
    pub log_level: String,
    pub log_file: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            clear_color: [255, 255, 255, 255],
            sprite_order: SpriteOrder::BackToFront,
            log_level: "info".to_string(),
            log_file: "log/provider.log".to_string(),
        }
    }
}

impl ProviderConfig {
    pub fn from_toml_str(s: &str) -> ProviderResult<Self> {
        toml::from_str(s).map_err(|e| ProviderError::Config(e.to_string()))
    }

    pub fn load(path: &str) -> ProviderResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ProviderError::Config(format!("read {}: {}", path, e)))?;
        let cfg = Self::from_toml_str(&text)?;
        info!("provider config loaded from {}", path);
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> ProviderResult<String> {
        toml::to_string(self).map_err(|e| ProviderError::Config(e.to_string()))
    }
}
