//! Small wgpu helpers shared by the renderer and the scene objects.

pub mod binding_types;
pub mod uniform_buffer;

pub use uniform_buffer::UniformBuffer;
