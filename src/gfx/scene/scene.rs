use cgmath::Vector3;
use wgpu::Device;

use super::object::{Mesh, Object};
use crate::{config::CubeConfig, gfx::geometry::generate_box};

/// The scene: a single cube.
pub struct Scene {
    pub cube: Object,
}

impl Scene {
    pub fn new(cube: Object) -> Self {
        Self { cube }
    }

    /// Builds the cube described by `config`.
    pub fn from_config(config: &CubeConfig) -> Self {
        let [width, height, depth] = config.size;
        let [ws, hs, ds] = config.segments;
        let geometry = generate_box(width, height, depth, ws, hs, ds);

        let mut cube = Object::new("Cube", Mesh::from_geometry(&geometry), config.color);
        cube.set_position(config.position.into());
        Self::new(cube)
    }

    /// The point the camera orbits around and looks at.
    pub fn target(&self) -> Vector3<f32> {
        self.cube.position
    }

    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, object_layout: &wgpu::BindGroupLayout) {
        self.cube.init_gpu_resources(device, object_layout);
    }

    pub fn update_all_transforms(&mut self, queue: &wgpu::Queue) {
        self.cube.update_transform(queue);
    }

    pub fn release_gpu_resources(&mut self) {
        self.cube.release_gpu_resources();
    }

    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            total_vertices: self.cube.mesh.vertex_count() as u32,
            total_triangles: self.cube.mesh.index_count() / 3,
        }
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub total_triangles: u32,
    pub total_vertices: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cube_statistics() {
        let scene = Scene::from_config(&CubeConfig::default());
        assert_eq!(
            scene.get_statistics(),
            SceneStatistics {
                total_triangles: 300,
                total_vertices: 216,
            }
        );
        assert_eq!(scene.target(), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn target_follows_cube_position() {
        let config = CubeConfig {
            position: [1.0, -2.0, 0.5],
            ..CubeConfig::default()
        };
        let scene = Scene::from_config(&config);
        assert_eq!(scene.target(), Vector3::new(1.0, -2.0, 0.5));
    }
}
