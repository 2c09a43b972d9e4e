//! Damped orbit controls around the camera target.
//!
//! Pointer input accumulates into pending deltas; `update` applies the damping
//! share of them each frame and decays the remainder, so the settled rotation
//! equals the queued drag and releasing the pointer lets the camera glide to a
//! stop.

use crate::camera::Camera;
use crate::constants::{ORBIT_DAMPING_FACTOR, ORBIT_PITCH_LIMIT, ORBIT_ROTATE_SPEED};
use glam::Vec3;

pub struct OrbitControls {
    /// Disabled while a panel is being inspected.
    pub enabled: bool,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    yaw_delta: f32,
    pitch_delta: f32,
    dolly_scale: f32,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            enabled: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            yaw_delta: 0.0,
            pitch_delta: 0.0,
            dolly_scale: 1.0,
        }
    }

    /// Queue a rotation from a pointer drag, in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        if !self.enabled {
            return;
        }
        self.yaw_delta -= dx * ORBIT_ROTATE_SPEED;
        self.pitch_delta -= dy * ORBIT_ROTATE_SPEED;
    }

    /// Queue a multiplicative distance change (scale < 1 moves closer).
    pub fn dolly(&mut self, scale: f32) {
        if !self.enabled {
            return;
        }
        self.dolly_scale *= scale.max(f32::EPSILON);
    }

    /// Apply pending input to the camera and decay it. While disabled, pending
    /// input is dropped and the camera is left alone so the focus controller
    /// owns the pose.
    pub fn update(&mut self, camera: &mut Camera) {
        if !self.enabled {
            self.yaw_delta = 0.0;
            self.pitch_delta = 0.0;
            self.dolly_scale = 1.0;
            return;
        }

        let offset = camera.eye - camera.target;
        let radius = offset.length().max(1e-6);
        let mut yaw = offset.x.atan2(offset.z);
        let mut pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();

        // Each frame consumes the damping share of the pending delta; the
        // geometric series sums to exactly the queued drag.
        yaw += self.yaw_delta * self.damping_factor;
        pitch = (pitch + self.pitch_delta * self.damping_factor)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        let radius = (radius * self.dolly_scale).clamp(self.min_distance, self.max_distance);

        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();
        camera.eye = camera.target
            + Vec3::new(
                radius * cos_pitch * sin_yaw,
                radius * sin_pitch,
                radius * cos_pitch * cos_yaw,
            );

        let keep = 1.0 - self.damping_factor;
        self.yaw_delta *= keep;
        self.pitch_delta *= keep;
        self.dolly_scale = 1.0;
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}
