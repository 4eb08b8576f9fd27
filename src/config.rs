//! Configuration for the rasterizer and the demo loop.
//!
//! YAML, every field optional; missing fields take the defaults below.
//!
//! ```yaml
//! window:
//!   width: 800
//!   height: 600
//! render:
//!   clear_color: { r: 0, g: 0, b: 0 }
//!   fill: scanline
//!   mode: wireframe
//! animation:
//!   rotation_period_ms: 4000
//! ```

use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::Vec3;
use crate::rasterizer::RenderMode;
use crate::render::FillStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Presentation surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Initial canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Initial canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Window title.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_title() -> String {
    "Tiny Render".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
        }
    }
}

/// Rasterization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Color the canvas is cleared to after every presented frame.
    #[serde(default = "default_clear_color")]
    pub clear_color: Color,

    /// Line color for wireframe rendering.
    #[serde(default = "default_wireframe_color")]
    pub wireframe_color: Color,

    /// Direction towards the light for flat shading.
    #[serde(default = "default_light_direction")]
    pub light_direction: Vec3,

    /// Triangle fill algorithm for shaded rendering.
    #[serde(default)]
    pub fill: FillStrategy,

    /// Shaded or wireframe.
    #[serde(default)]
    pub mode: RenderMode,
}

fn default_clear_color() -> Color {
    Color::BLACK
}
fn default_wireframe_color() -> Color {
    Color::GREEN
}
fn default_light_direction() -> Vec3 {
    Vec3::UNIT_Z
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: default_clear_color(),
            wireframe_color: default_wireframe_color(),
            light_direction: default_light_direction(),
            fill: FillStrategy::default(),
            mode: RenderMode::default(),
        }
    }
}

/// Demo animation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Frame time needed for one full turn around +Y, in milliseconds.
    /// Zero disables rotation.
    #[serde(default = "default_rotation_period_ms")]
    pub rotation_period_ms: u64,

    /// Sample frame timing once every this many frames.
    #[serde(default = "default_report_every")]
    pub report_every: u32,
}

fn default_rotation_period_ms() -> u64 {
    2000
}
fn default_report_every() -> u32 {
    15
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_period_ms: default_rotation_period_ms(),
            report_every: default_report_every(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Surface settings.
    #[serde(default)]
    pub window: WindowConfig,

    /// Rasterization settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Animation settings.
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("using default configuration, {} unusable: {e}", path.display());
            Self::default()
        })
    }

    /// Rotation period as a Duration, `None` when rotation is disabled.
    #[must_use]
    pub fn rotation_period(&self) -> Option<Duration> {
        (self.animation.rotation_period_ms > 0)
            .then(|| Duration::from_millis(self.animation.rotation_period_ms))
    }
}
