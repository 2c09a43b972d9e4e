//! Camera description shared between the framing, focus and render code.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. The web frontend consumes
//! them to build view/projection matrices for the GPU pass and for the DOM
//! compositing pass.

use crate::constants::{FOV_Y_DEGREES, INITIAL_EYE, INITIAL_ZFAR, INITIAL_ZNEAR};
use glam::{Mat4, Vec3};

/// Simple right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at the default pre-fit pose, looking at the origin.
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(INITIAL_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: FOV_Y_DEGREES.to_radians(),
            znear: INITIAL_ZNEAR,
            zfar: INITIAL_ZFAR,
        }
    }

    /// Update the aspect ratio on viewport resize. Never touches the pose.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(f32::EPSILON);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
