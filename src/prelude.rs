//! # cubecam Prelude
//!
//! Commonly used types in one import.
//!
//! ```no_run
//! use cubecam::prelude::*;
//!
//! fn main() -> cubecam::Result<()> {
//!     let app = CubeCamApp::new(ViewerConfig::default())?;
//!     app.run()
//! }
//! ```

// Re-export core application types
pub use crate::app::CubeCamApp;
pub use crate::config::ViewerConfig;
pub use crate::context::{CameraParams, SceneContext};
pub use crate::frame::{CancelToken, FrameLoop, FrameStatus};

// Re-export control types
pub use crate::control::{CameraControl, ControlScheme, GestureMode, InputId, ZoomDirection};

// Re-export graphics and scene types
pub use crate::gfx::camera::{Projection, SceneCamera};
pub use crate::gfx::geometry::{generate_box, generate_cube, GeometryData};
pub use crate::gfx::scene::Scene;

// Re-export common external dependencies
pub use cgmath::Vector3;
