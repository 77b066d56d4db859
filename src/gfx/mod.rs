//! # Graphics Module
//!
//! Camera, geometry, scene and rendering for the cube viewer.
//!
//! - **Camera** ([`camera`]) - Perspective or orthographic camera with a zoom factor
//! - **Geometry** ([`geometry`]) - Subdivided box generation
//! - **Scene** ([`scene`]) - The cube object and its GPU resources
//! - **Rendering** ([`rendering`]) - Surface, pipeline and frame rendering
//! - **Resources** ([`resources`]) - Depth buffer and camera bindings
//!
//! ```no_run
//! use cubecam::gfx::{camera::{Projection, SceneCamera}, scene::Scene};
//! use cubecam::config::CubeConfig;
//!
//! let scene = Scene::from_config(&CubeConfig::default());
//! let mut camera = SceneCamera::new(Projection::Perspective, 75.0, 4.0 / 3.0, 0.1, 2000.0);
//! camera.look_at(scene.target());
//! ```

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::SceneCamera;
pub use rendering::RenderEngine;
