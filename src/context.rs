//! Scene state shared by the input handlers and the frame loop.
//!
//! Everything a handler may touch lives in one [`SceneContext`] that the app
//! owns and lends out mutably, one event at a time.

use cgmath::{Rad, Vector3};

use crate::{
    config::ViewerConfig,
    gfx::{camera::SceneCamera, scene::Scene},
};

/// Snapshot of the camera values the controls write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    /// Requested field of view in degrees. Reaches the camera on the next frame.
    pub field_of_view: f32,
    pub zoom: f32,
    pub position: Vector3<f32>,
}

pub struct SceneContext {
    pub scene: Scene,
    pub camera: SceneCamera,
    /// Field of view requested by the zoom steps, in degrees.
    ///
    /// Kept apart from `camera.fov` and copied over by
    /// [`SceneContext::per_frame_update`], so a step between two frames only
    /// becomes visible on the next one.
    pub field_of_view: f32,
}

impl SceneContext {
    pub fn new(scene: Scene, camera: SceneCamera) -> Self {
        Self {
            field_of_view: camera.fov,
            scene,
            camera,
        }
    }

    /// Builds the cube and a camera aimed at it.
    pub fn from_config(config: &ViewerConfig) -> Self {
        let scene = Scene::from_config(&config.cube);

        let cam = &config.camera;
        let mut camera = SceneCamera::new(
            cam.projection,
            cam.fov,
            config.viewport.aspect_ratio(),
            cam.near,
            cam.far,
        );
        camera.zoom = cam.zoom;
        camera.set_position(cam.position.into());
        camera.look_at(scene.target());
        camera.update_projection_matrix();
        camera.update_view_proj();

        Self::new(scene, camera)
    }

    pub fn camera_params(&self) -> CameraParams {
        CameraParams {
            field_of_view: self.field_of_view,
            zoom: self.camera.zoom,
            position: self.camera.position,
        }
    }

    /// Advances the scene to `elapsed_seconds` since start.
    ///
    /// Sets the cube yaw to the elapsed time in radians, copies the requested
    /// field of view into the camera and rebuilds its matrices. Calling it
    /// twice with the same time leaves the same state.
    pub fn per_frame_update(&mut self, elapsed_seconds: f32) {
        self.scene.cube.set_rotation_y(Rad(elapsed_seconds));

        self.camera.fov = self.field_of_view;
        self.camera.update_projection_matrix();
        self.camera.update_view_proj();

        log::trace!(
            "frame t={elapsed_seconds:.3}s fov={} zoom={} position={:?}",
            self.camera.fov,
            self.camera.zoom,
            self.camera.position
        );
    }

    /// Tracks a new drawable size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
        self.camera.update_projection_matrix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_camera_matches_config() {
        let ctx = SceneContext::from_config(&ViewerConfig::default());
        let params = ctx.camera_params();

        assert_eq!(params.field_of_view, 75.0);
        assert_eq!(params.zoom, 1.0);
        assert_eq!(params.position, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(ctx.camera.target, Vector3::new(0.0, 0.0, 0.0));
        assert!((ctx.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn per_frame_update_sets_rotation_to_elapsed_time() {
        let mut ctx = SceneContext::from_config(&ViewerConfig::default());

        ctx.per_frame_update(2.5);
        assert_eq!(ctx.scene.cube.rotation_y, Rad(2.5));
        let first = ctx.camera.uniform;

        ctx.per_frame_update(2.5);
        assert_eq!(ctx.scene.cube.rotation_y, Rad(2.5));
        assert_eq!(ctx.camera.uniform, first);
    }

    #[test]
    fn rotation_is_unbounded() {
        let mut ctx = SceneContext::from_config(&ViewerConfig::default());
        ctx.per_frame_update(12_345.0);
        assert_eq!(ctx.scene.cube.rotation_y, Rad(12_345.0));
    }

    #[test]
    fn requested_fov_applies_on_next_frame() {
        let mut ctx = SceneContext::from_config(&ViewerConfig::default());
        ctx.field_of_view = 45.0;
        assert_eq!(ctx.camera.fov, 75.0);

        ctx.per_frame_update(0.0);
        assert_eq!(ctx.camera.fov, 45.0);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut ctx = SceneContext::from_config(&ViewerConfig::default());
        ctx.resize(1000, 500);
        assert_eq!(ctx.camera.aspect, 2.0);

        ctx.resize(0, 500);
        assert_eq!(ctx.camera.aspect, 2.0);
    }
}
