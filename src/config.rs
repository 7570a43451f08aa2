// src/config.rs

//! Configuration structures for a framekit window.
//!
//! Every struct carries `#[serde(default)]`, so a configuration file only
//! needs the fields it wants to change. Files are JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Root of the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub timing: TimingConfig,
    pub appearance: AppearanceConfig,
    pub font: FontConfig,
}

impl Config {
    /// Reads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

// --- Window Configuration ---

/// Window title and backbuffer size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Backbuffer width in pixels.
    pub width: u32,
    /// Backbuffer height in pixels.
    pub height: u32,
    /// Initial window size as a multiple of the backbuffer.
    pub scale: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "framekit".to_string(),
            width: 800,
            height: 600,
            scale: 1,
        }
    }
}

// --- Timing Configuration ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Frames per second to pace to. 0 disables pacing.
    pub target_fps: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig { target_fps: 60 }
    }
}

// --- Appearance Configuration ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Initial colour used by `FrameContext::clear`; opaque black by default.
    pub clear_color: Color,
    pub cursor_visible: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            clear_color: Color::opaque(0, 0, 0),
            cursor_visible: true,
        }
    }
}

// --- Font Configuration ---

/// Font atlas loaded at context creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Atlas image to load. `None` keeps the embedded font active.
    pub path: Option<PathBuf>,
    /// Glyph grid columns of the atlas.
    pub columns: i32,
    /// Glyph grid rows of the atlas.
    pub rows: i32,
    /// Whether the embedded 8x8 font is available as the fallback.
    pub use_default: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            path: None,
            columns: 16,
            rows: 16,
            use_default: true,
        }
    }
}
