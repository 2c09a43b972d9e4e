use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_2;
use viewer_core::scene::Vertex;
use viewer_core::{
    Aabb, PanelBinding, SceneMesh, ScreenRole, MONITOR_PIXEL_SIZE, TABLET_PIXEL_SIZE,
};

const EPS: f32 = 1e-5;

fn screen_mesh(name: &str, position: Vec3, rotation: Quat, width: f32) -> SceneMesh {
    let half = Vec3::new(width * 0.5, width * 0.28, 0.01);
    let min = position - half;
    let max = position + half;
    SceneMesh {
        name: name.to_owned(),
        translation: position,
        rotation,
        vertices: vec![
            Vertex {
                position: min.to_array(),
                normal: [0.0, 0.0, 1.0],
            },
            Vertex {
                position: max.to_array(),
                normal: [0.0, 0.0, 1.0],
            },
        ],
        indices: vec![0, 1],
        base_color: [1.0, 1.0, 1.0, 1.0],
        aabb: Aabb::from_points([min, max].into_iter()),
    }
}

#[test]
fn scale_maps_pixel_width_onto_mesh_width() {
    let mesh = screen_mesh("DisplayMonitor", Vec3::ZERO, Quat::IDENTITY, 2.56);
    let binding = PanelBinding::from_mesh(ScreenRole::Monitor, &mesh);
    assert!((binding.scale - 2.56 / MONITOR_PIXEL_SIZE[0]).abs() < EPS);
    assert!((binding.scale * binding.pixel_size[0] - 2.56).abs() < EPS);
}

#[test]
fn monitor_focus_eye_sits_in_front_of_the_screen() {
    let position = Vec3::new(1.0, 2.0, 3.0);
    let mesh = screen_mesh("DisplayMonitor", position, Quat::IDENTITY, 2.56);
    let binding = PanelBinding::from_mesh(ScreenRole::Monitor, &mesh);
    assert!((binding.focus_eye() - (position + Vec3::new(0.0, 0.0, 0.6))).length() < EPS);
    assert_eq!(binding.focus_target(), position);
}

#[test]
fn focus_eye_rotates_with_the_mesh() {
    let position = Vec3::new(1.0, 0.0, 0.0);
    let rotation = Quat::from_rotation_y(FRAC_PI_2);
    let mesh = screen_mesh("DisplayMonitor", position, rotation, 2.56);
    let binding = PanelBinding::from_mesh(ScreenRole::Monitor, &mesh);
    // local +Z swings to world +X under a quarter turn about Y
    assert!((binding.focus_eye() - (position + Vec3::new(0.6, 0.0, 0.0))).length() < EPS);
}

#[test]
fn tablet_panel_is_pitched_flat() {
    let position = Vec3::new(0.0, 1.0, 0.0);
    let mesh = screen_mesh("Displayipad", position, Quat::IDENTITY, 0.768);
    let binding = PanelBinding::from_mesh(ScreenRole::Tablet, &mesh);
    assert_eq!(binding.pixel_size, TABLET_PIXEL_SIZE);
    // local +Z points up after the -90 degree pitch, so the camera hovers
    // above the slab
    assert!((binding.focus_eye() - (position + Vec3::new(0.0, 0.5, 0.0))).length() < EPS);
}

#[test]
fn model_matrix_carries_scale_rotation_translation() {
    let position = Vec3::new(1.0, 2.0, 3.0);
    let rotation = Quat::from_rotation_y(FRAC_PI_2);
    let mesh = screen_mesh("DisplayMonitor", position, rotation, 2.56);
    let binding = PanelBinding::from_mesh(ScreenRole::Monitor, &mesh);

    let (scale, rot, trans) = binding.model_matrix().to_scale_rotation_translation();
    assert!((scale - Vec3::splat(binding.scale)).length() < EPS);
    assert!((trans - position).length() < EPS);
    assert!(rot.angle_between(binding.orientation) < 1e-4);
}
