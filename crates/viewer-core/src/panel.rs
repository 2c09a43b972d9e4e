//! Overlay panel geometry: the 1:1 registration between flat DOM content and
//! the 3D screen surface it sits on.

use crate::constants::{
    MONITOR_FOCUS_OFFSET, MONITOR_PIXEL_SIZE, TABLET_FOCUS_OFFSET, TABLET_PIXEL_SIZE,
};
use crate::scene::{SceneMesh, ScreenRole};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

impl ScreenRole {
    /// CSS pixel dimensions of the DOM content overlaid on this screen.
    pub fn pixel_size(self) -> [f32; 2] {
        match self {
            ScreenRole::Monitor => MONITOR_PIXEL_SIZE,
            ScreenRole::Tablet => TABLET_PIXEL_SIZE,
        }
    }

    /// Inspection offset in the panel's local frame.
    pub fn focus_offset(self) -> Vec3 {
        match self {
            ScreenRole::Monitor => Vec3::from_array(MONITOR_FOCUS_OFFSET),
            ScreenRole::Tablet => Vec3::from_array(TABLET_FOCUS_OFFSET),
        }
    }

    /// The tablet screen lies flat, so its panel is pitched down to match.
    pub fn extra_rotation(self) -> Quat {
        match self {
            ScreenRole::Monitor => Quat::IDENTITY,
            ScreenRole::Tablet => Quat::from_rotation_x(-FRAC_PI_2),
        }
    }
}

/// Binds one DOM panel to one screen mesh. Created once at load time and kept
/// for the page's lifetime; the meshes never move, so the transform is fixed.
#[derive(Clone, Copy, Debug)]
pub struct PanelBinding {
    pub role: ScreenRole,
    pub position: Vec3,
    pub orientation: Quat,
    pub pixel_size: [f32; 2],
    /// World units per CSS pixel; pixel size times this matches the mesh's
    /// bounding-box width.
    pub scale: f32,
}

impl PanelBinding {
    pub fn from_mesh(role: ScreenRole, mesh: &SceneMesh) -> Self {
        let pixel_size = role.pixel_size();
        let scale = mesh.aabb.size().x / pixel_size[0];
        Self {
            role,
            position: mesh.translation,
            orientation: mesh.rotation * role.extra_rotation(),
            pixel_size,
            scale,
        }
    }

    /// Where the camera flies to when this panel is activated: the hand-tuned
    /// offset, rotated by the panel orientation so it stays correct under any
    /// model orientation.
    pub fn focus_eye(&self) -> Vec3 {
        self.position + self.orientation * self.role.focus_offset()
    }

    pub fn focus_target(&self) -> Vec3 {
        self.position
    }

    /// World transform handed to the DOM compositor.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.orientation,
            self.position,
        )
    }
}
