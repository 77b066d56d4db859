//! cubecam
//!
//! A single rotating cube rendered with wgpu, with a camera driven by the
//! cursor: Alt + drag zooms or orbits, the `Zoom In` / `Zoom Out` buttons and
//! the `=` / `-` keys step the field of view.

pub mod app;
pub mod config;
pub mod context;
pub mod control;
pub mod error;
pub mod frame;
pub mod gfx;
pub mod prelude;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::CubeCamApp;
pub use error::{CubeCamError, Result};

/// Creates a viewer with the built-in configuration.
pub fn default() -> Result<CubeCamApp> {
    CubeCamApp::new(config::ViewerConfig::default())
}
