// config.rs - Viewer settings, built once at startup and passed down explicitly
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Everything the viewer reads at startup
///
/// Every field has a default, so an override file only needs the keys it
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Virtual Camera | wgpu".to_string(),
            width: 1280,
            height: 720,
            min_width: 640,
            min_height: 480,
        }
    }
}

/// Initial camera state, also the target of a camera reset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Degrees
    pub yaw: f32,
    /// Degrees
    pub pitch: f32,
    /// Degrees
    pub roll: f32,
    /// Vertical field of view in degrees
    pub field_of_view: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            field_of_view: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// World units per second
    pub movement_speed: f32,
    /// Degrees per second
    pub rotation_speed: f32,
    /// Degrees per zoom key press
    pub zoom_step: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            rotation_speed: 60.0,
            zoom_step: 1.5,
        }
    }
}

impl ViewerConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid viewer config JSON")
    }

    /// Load a JSON override file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Defaults, or the file at `path` when one is given
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
