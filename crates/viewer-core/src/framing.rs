//! Camera framing: fit an arbitrary bounding volume into the view frustum.

use crate::bounds::Aabb;
use crate::camera::Camera;
use crate::constants::{FAR_PLANE_MULTIPLIER, MAX_ORBIT_DISTANCE_FACTOR, NEAR_PLANE_DIVISOR};
use glam::Vec3;

/// Outcome of a successful fit. The caller applies `max_orbit_distance` to its
/// orbit controls; the camera itself is already updated.
#[derive(Clone, Copy, Debug)]
pub struct FitResult {
    pub distance: f32,
    pub max_orbit_distance: f32,
}

/// Move the camera so that `bounds` fills the viewport at distance
/// `fit_margin * minimum-fitting-distance`, retreating along the current view
/// direction rather than snapping to a fixed axis.
///
/// A degenerate volume (zero extent on every axis) leaves the camera untouched
/// and returns `None`; callers may fire before geometry exists and that is not
/// an error.
pub fn fit_camera_to_bounds(camera: &mut Camera, bounds: &Aabb, fit_margin: f32) -> Option<FitResult> {
    if bounds.is_degenerate() {
        return None;
    }

    let max_extent = bounds.size().max_element();
    // Perspective-fit: object size vs. distance under the vertical FOV, then
    // corrected for the horizontal FOV implied by the aspect ratio.
    let height_distance = max_extent / (2.0 * (camera.fovy_radians * 0.5).tan());
    let width_distance = height_distance / camera.aspect;
    let distance = fit_margin * height_distance.max(width_distance);

    let center = bounds.center();
    let view_dir = camera.target - camera.eye;
    let direction = if view_dir.length_squared() > 1e-12 {
        view_dir.normalize()
    } else {
        Vec3::NEG_Z
    };

    camera.target = center;
    camera.eye = center - direction * distance;
    // Scale the clip planes with the fit so neither end of the scene clips.
    camera.znear = distance / NEAR_PLANE_DIVISOR;
    camera.zfar = distance * FAR_PLANE_MULTIPLIER;

    Some(FitResult {
        distance,
        max_orbit_distance: MAX_ORBIT_DISTANCE_FACTOR * distance,
    })
}
