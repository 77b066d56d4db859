//! Viewer configuration with TOML file support.
//!
//! Every section uses `#[serde(default)]`, so a partial file (for example one
//! that only overrides `[control]`) fills the rest from the built-in defaults.
//! The defaults reproduce the stock viewer: an 800×600 viewport, a 75° camera
//! at (3, 3, 3) looking at a red 1×1×1 cube subdivided 5×5×5.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::control::{ControlScheme, Viewport};
use crate::error::{CubeCamError, Result};
use crate::gfx::camera::Projection;

/// Top-level configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ViewerConfig {
    /// Window title and resize behavior.
    pub window: WindowConfig,
    /// Fixed extent used to normalize pointer coordinates and size the window.
    pub viewport: Viewport,
    /// Initial camera projection and placement.
    pub camera: CameraConfig,
    /// Gesture bindings and control constants.
    pub control: ControlConfig,
    /// The single cube in the scene.
    pub cube: CubeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "cubecam".to_owned(),
            resizable: false,
        }
    }
}

/// Camera projection and initial placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub projection: Projection,
    /// Vertical field of view in degrees (perspective only).
    pub fov: f32,
    pub zoom: f32,
    pub position: [f32; 3],
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            projection: Projection::Perspective,
            fov: 75.0,
            zoom: 1.0,
            position: [3.0, 3.0, 3.0],
            near: 0.1,
            far: 2000.0,
        }
    }
}

/// Gesture bindings and the constants of the cursor mappings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlConfig {
    /// Which mouse chord zooms and which one orbits.
    pub scheme: ControlScheme,
    /// Degrees removed from the field of view per zoom-in step.
    pub fov_step: f32,
    /// Zoom added per zoom-in step.
    pub zoom_step: f32,
    /// Scale `k` of the cursor zoom mapping `zoom = normalized_x * k`.
    pub zoom_scale: f32,
    /// Radius of the orbit circle around the cube.
    pub orbit_radius: f32,
    /// Scale `h` of the orbit height mapping `y = -normalized_y * h`.
    pub orbit_height: f32,
    /// Optional `[min, max]` bounds for the field of view on zoom steps.
    /// Unbounded when absent.
    pub fov_bounds: Option<[f32; 2]>,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            scheme: ControlScheme::default(),
            fov_step: 10.0,
            zoom_step: 0.1,
            zoom_scale: 4.0,
            orbit_radius: 2.0,
            orbit_height: 3.0,
            fov_bounds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CubeConfig {
    pub size: [f32; 3],
    /// Subdivisions along width, height and depth.
    pub segments: [u32; 3],
    /// Linear RGBA color.
    pub color: [f32; 4],
    pub position: [f32; 3],
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: [1.0, 1.0, 1.0],
            segments: [5, 5, 5],
            color: [1.0, 0.0, 0.0, 1.0],
            position: [0.0, 0.0, 0.0],
        }
    }
}

impl ViewerConfig {
    /// Load a configuration from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CubeCamError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CubeCamError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CubeCamError::Config(e.to_string()))?;
        std::fs::write(path, content).map_err(|source| CubeCamError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rejects values the viewer cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(CubeCamError::Config(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if self.cube.segments.iter().any(|&s| s == 0) {
            return Err(CubeCamError::Config(
                "cube segments must be at least 1".to_owned(),
            ));
        }
        if !(self.camera.near > 0.0 && self.camera.far > self.camera.near) {
            return Err(CubeCamError::Config(format!(
                "camera clip planes must satisfy 0 < near < far, got near={} far={}",
                self.camera.near, self.camera.far
            )));
        }
        let control = &self.control;
        let constants = [
            ("fov_step", control.fov_step),
            ("zoom_step", control.zoom_step),
            ("zoom_scale", control.zoom_scale),
            ("orbit_radius", control.orbit_radius),
            ("orbit_height", control.orbit_height),
        ];
        if let Some((name, value)) = constants.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CubeCamError::Config(format!(
                "control.{name} must be finite, got {value}"
            )));
        }
        if control.orbit_radius <= 0.0 {
            return Err(CubeCamError::Config(format!(
                "control.orbit_radius must be positive, got {}",
                control.orbit_radius
            )));
        }
        if let Some([min, max]) = control.fov_bounds {
            if !(min.is_finite() && max.is_finite()) {
                return Err(CubeCamError::Config(format!(
                    "fov_bounds must be finite, got [{min}, {max}]"
                )));
            }
            if min > max {
                return Err(CubeCamError::Config(format!(
                    "fov_bounds must be [min, max] with min <= max, got [{min}, {max}]"
                )));
            }
        }
        Ok(())
    }
}
