//! GPU resource management
//!
//! Depth buffer and the global camera bindings.

pub mod global_bindings;
pub mod texture_resource;

pub use global_bindings::{CameraUbo, GlobalBindings};
pub use texture_resource::TextureResource;
