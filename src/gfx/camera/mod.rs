pub mod camera_utils;
pub mod scene_camera;

// Re-export main types
pub use camera_utils::{Camera, CameraUniform};
pub use scene_camera::{Projection, SceneCamera};
