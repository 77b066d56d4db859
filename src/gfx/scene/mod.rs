//! # Scene Module
//!
//! Holds the single cube the viewer shows, its mesh and GPU resources, and
//! the vertex format the renderer consumes.
//!
//! - [`Scene`] - Owns the cube; the camera lives beside it in
//!   [`SceneContext`](crate::context::SceneContext)
//! - [`Object`] - Mesh with position, yaw rotation and flat color
//! - [`Vertex3D`] - Position + normal vertex

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, Mesh, Object, ObjectUniform};
pub use scene::{Scene, SceneStatistics};
pub use vertex::Vertex3D;
