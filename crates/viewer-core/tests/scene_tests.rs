use glam::{Quat, Vec3};
use viewer_core::scene::Vertex;
use viewer_core::{Aabb, SceneError, SceneMesh, SceneModel, ScreenRole};

/// Axis-aligned box mesh with only the two extreme corners as vertices, which
/// is all the bounding and recentering code looks at.
fn box_mesh(name: &str, center: Vec3, half: Vec3) -> SceneMesh {
    let min = center - half;
    let max = center + half;
    let vertices = vec![
        Vertex {
            position: min.to_array(),
            normal: [0.0, 0.0, 1.0],
        },
        Vertex {
            position: max.to_array(),
            normal: [0.0, 0.0, 1.0],
        },
    ];
    SceneMesh {
        name: name.to_owned(),
        translation: center,
        rotation: Quat::IDENTITY,
        vertices,
        indices: vec![0, 1],
        base_color: [1.0, 1.0, 1.0, 1.0],
        aabb: Aabb::from_points([min, max].into_iter()),
    }
}

#[test]
fn empty_mesh_list_is_an_error() {
    assert!(matches!(
        SceneModel::from_meshes(Vec::new()),
        Err(SceneError::Empty)
    ));
}

#[test]
fn model_is_recentered_about_its_bounds() {
    let model = SceneModel::from_meshes(vec![
        box_mesh("Desk", Vec3::new(4.0, 0.0, 0.0), Vec3::ONE),
        box_mesh("Chair", Vec3::ZERO, Vec3::ONE),
    ])
    .unwrap();

    // raw bounds span x in [-1, 5], so the whole scene shifts by (-2, 0, 0)
    assert!((model.bounds.center() - Vec3::ZERO).length() < 1e-5);
    assert!((model.meshes[0].translation - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    assert!((model.meshes[1].translation - Vec3::new(-2.0, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn recentering_updates_mesh_bounds_too() {
    let model = SceneModel::from_meshes(vec![box_mesh(
        "Desk",
        Vec3::new(10.0, 10.0, 10.0),
        Vec3::ONE,
    )])
    .unwrap();
    let aabb = model.meshes[0].aabb;
    assert!((aabb.center() - Vec3::ZERO).length() < 1e-5);
    assert!((aabb.size() - Vec3::splat(2.0)).length() < 1e-5);
}

#[test]
fn screen_roles_resolve_by_name_fragment() {
    let model = SceneModel::from_meshes(vec![
        box_mesh("Desk", Vec3::ZERO, Vec3::ONE),
        box_mesh("DisplayMonitor_Screen", Vec3::X, Vec3::ONE),
        box_mesh("Displayipad_Screen", Vec3::Y, Vec3::ONE),
    ])
    .unwrap();

    assert_eq!(model.roles.get(ScreenRole::Monitor), Some(1));
    assert_eq!(model.roles.get(ScreenRole::Tablet), Some(2));
    assert!(!model.roles.is_screen(0));
    assert!(model.roles.is_screen(1));
    assert!(model.roles.is_screen(2));
}

#[test]
fn first_matching_node_wins() {
    let model = SceneModel::from_meshes(vec![
        box_mesh("DisplayMonitor_A", Vec3::ZERO, Vec3::ONE),
        box_mesh("DisplayMonitor_B", Vec3::X, Vec3::ONE),
    ])
    .unwrap();
    assert_eq!(model.roles.get(ScreenRole::Monitor), Some(0));
}

#[test]
fn role_matching_is_case_sensitive() {
    let model = SceneModel::from_meshes(vec![box_mesh(
        "displaymonitor",
        Vec3::ZERO,
        Vec3::ONE,
    )])
    .unwrap();
    assert_eq!(model.roles.get(ScreenRole::Monitor), None);
    assert_eq!(model.roles.iter().count(), 0);
}

#[test]
fn missing_roles_are_simply_absent() {
    let model =
        SceneModel::from_meshes(vec![box_mesh("Desk", Vec3::ZERO, Vec3::ONE)]).unwrap();
    assert_eq!(model.roles.get(ScreenRole::Monitor), None);
    assert_eq!(model.roles.get(ScreenRole::Tablet), None);
}

#[test]
fn roles_iterate_in_declared_order() {
    let model = SceneModel::from_meshes(vec![
        box_mesh("Displayipad", Vec3::ZERO, Vec3::ONE),
        box_mesh("DisplayMonitor", Vec3::X, Vec3::ONE),
    ])
    .unwrap();
    let pairs: Vec<_> = model.roles.iter().collect();
    assert_eq!(
        pairs,
        vec![(ScreenRole::Monitor, 1), (ScreenRole::Tablet, 0)]
    );
}

#[test]
fn face_normals_skip_out_of_range_triangles() {
    let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
    // second triangle points past the position buffer
    let indices = vec![0, 1, 2, 0, 1, 9];
    let normals = viewer_core::scene::face_normals(&positions, &indices);
    assert_eq!(normals.len(), 3);
    for n in normals {
        assert!((n - Vec3::Z).length() < 1e-6);
    }
}

#[test]
fn truncated_glb_is_a_parse_error() {
    assert!(matches!(
        SceneModel::parse_glb(b"glTF"),
        Err(SceneError::Parse(_))
    ));
}
