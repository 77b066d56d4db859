//! Perspective/orthographic camera with field-of-view and zoom.
//!
//! Follows the usual scene-graph camera contract: `fov`, `zoom` and the
//! placement fields are plain public state, and [`SceneCamera::update_projection_matrix`]
//! must be called after changing `fov`, `zoom`, `aspect` or the clip planes
//! for the projection to pick them up. Placement changes are picked up by
//! the next [`SceneCamera::update_view_proj`].

use cgmath::{EuclideanSpace, Matrix4, Point3, SquareMatrix, Vector3, Zero};
use serde::{Deserialize, Serialize};

use super::camera_utils::{Camera, CameraUniform, OPENGL_TO_WGPU_MATRIX};
use crate::control::clamp;

/// Smallest zoom magnitude fed into the projection.
const MIN_ZOOM: f32 = 1.0e-4;
/// Field-of-view range fed into the perspective projection, in degrees.
const MIN_FOV: f32 = 0.01;
const MAX_FOV: f32 = 179.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    Perspective,
    /// Half-height of the view volume at zoom 1; the width follows the aspect.
    Orthographic { frustum_size: f32 },
}

impl Default for Projection {
    fn default() -> Self {
        Self::Perspective
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SceneCamera {
    pub projection: Projection,
    /// Vertical field of view in degrees. Only used by perspective projection.
    pub fov: f32,
    pub zoom: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    projection_matrix: Matrix4<f32>,
    pub uniform: CameraUniform,
}

impl Camera for SceneCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix * self.view_matrix()
    }
}

impl SceneCamera {
    pub fn new(projection: Projection, fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            projection,
            fov,
            zoom: 1.0,
            aspect,
            near,
            far,
            position: Vector3::zero(),
            target: Vector3::zero(),
            up: Vector3::unit_y(),
            projection_matrix: Matrix4::identity(),
            uniform: CameraUniform::default(),
        };
        camera.update_projection_matrix();
        camera
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    /// Aims the camera at `target`.
    pub fn look_at(&mut self, target: Vector3<f32>) {
        self.target = target;
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Rebuilds the projection from `fov`, `zoom`, `aspect` and the clip planes.
    ///
    /// A zoom of (almost) zero or a field of view outside the open range
    /// (0°, 180°) cannot produce a valid frustum, so the values are pulled
    /// back into range for the matrix only. The stored fields stay untouched.
    /// A negative zoom builds the frustum from its magnitude and mirrors the
    /// image through the view axis.
    pub fn update_projection_matrix(&mut self) {
        let zoom = zoom_magnitude(self.zoom);

        let projection = match self.projection {
            Projection::Perspective => {
                let fov = clamp(self.fov, MIN_FOV, MAX_FOV);
                let top = self.near * (fov * 0.5).to_radians().tan() / zoom;
                let right = top * self.aspect;
                cgmath::frustum(-right, right, -top, top, self.near, self.far)
            }
            Projection::Orthographic { frustum_size } => {
                let half_h = frustum_size / zoom;
                let half_w = frustum_size * self.aspect / zoom;
                cgmath::ortho(-half_w, half_w, -half_h, half_h, self.near, self.far)
            }
        };

        let projection = if self.zoom.is_sign_negative() && !self.zoom.is_nan() {
            Matrix4::from_nonuniform_scale(-1.0, -1.0, 1.0) * projection
        } else {
            projection
        };

        self.projection_matrix = OPENGL_TO_WGPU_MATRIX * projection;
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.position),
            Point3::from_vec(self.target),
            self.up,
        )
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.position.x, self.position.y, self.position.z, 1.0];
        self.uniform.view_proj = self.build_view_projection_matrix().into();
    }
}

fn zoom_magnitude(zoom: f32) -> f32 {
    if zoom.is_nan() {
        1.0
    } else {
        zoom.abs().max(MIN_ZOOM)
    }
}
