//! GLB scene parsing and screen-role resolution.
//!
//! The loader bakes node world transforms into the vertex data, recenters the
//! whole scene about its bounding-box center and resolves the two screen roles
//! into a typed mapping once, so nothing downstream ever scans node names
//! again.

use crate::bounds::Aabb;
use glam::{Mat3, Mat4, Quat, Vec3};
use thiserror::Error;

/// Node-name fragments that mark the overlay contract between asset and code.
/// Matching is by substring containment, case-sensitive, first match wins.
pub const MONITOR_NODE_FRAGMENT: &str = "DisplayMonitor";
pub const TABLET_NODE_FRAGMENT: &str = "Displayipad";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenRole {
    Monitor,
    Tablet,
}

impl ScreenRole {
    pub const ALL: [ScreenRole; 2] = [ScreenRole::Monitor, ScreenRole::Tablet];

    pub fn node_name_fragment(self) -> &'static str {
        match self {
            ScreenRole::Monitor => MONITOR_NODE_FRAGMENT,
            ScreenRole::Tablet => TABLET_NODE_FRAGMENT,
        }
    }
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to parse glb: {0}")]
    Parse(#[from] gltf::Error),
    #[error("model contains no scenes")]
    NoScene,
    #[error("model contains no mesh geometry")]
    Empty,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// One renderable primitive with its world transform baked into the vertices.
/// `translation`/`rotation` keep the node's world placement for panel
/// anchoring.
pub struct SceneMesh {
    pub name: String,
    pub translation: Vec3,
    pub rotation: Quat,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub base_color: [f32; 4],
    pub aabb: Aabb,
}

impl SceneMesh {
    fn recompute_aabb(&mut self) {
        self.aabb = Aabb::from_points(self.vertices.iter().map(|v| Vec3::from_array(v.position)));
    }
}

/// Typed role → mesh mapping resolved once at load time.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoleBindings {
    monitor: Option<usize>,
    tablet: Option<usize>,
}

impl RoleBindings {
    pub fn resolve(meshes: &[SceneMesh]) -> Self {
        let mut bindings = Self::default();
        for (index, mesh) in meshes.iter().enumerate() {
            for role in ScreenRole::ALL {
                if bindings.get(role).is_none() && mesh.name.contains(role.node_name_fragment()) {
                    log::info!("screen role {:?} bound to node '{}'", role, mesh.name);
                    bindings.set(role, index);
                }
            }
        }
        bindings
    }

    fn set(&mut self, role: ScreenRole, index: usize) {
        match role {
            ScreenRole::Monitor => self.monitor = Some(index),
            ScreenRole::Tablet => self.tablet = Some(index),
        }
    }

    pub fn get(&self, role: ScreenRole) -> Option<usize> {
        match role {
            ScreenRole::Monitor => self.monitor,
            ScreenRole::Tablet => self.tablet,
        }
    }

    /// Whether a mesh index backs one of the screen overlays. Such meshes are
    /// excluded from the GPU draw list so the flat DOM content has nothing to
    /// visually compete with.
    pub fn is_screen(&self, index: usize) -> bool {
        self.monitor == Some(index) || self.tablet == Some(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScreenRole, usize)> {
        let pairs = [
            self.monitor.map(|i| (ScreenRole::Monitor, i)),
            self.tablet.map(|i| (ScreenRole::Tablet, i)),
        ];
        pairs.into_iter().flatten()
    }
}

pub struct SceneModel {
    pub meshes: Vec<SceneMesh>,
    pub bounds: Aabb,
    pub roles: RoleBindings,
}

impl SceneModel {
    /// Parse a binary GLTF buffer into a centered, role-resolved scene model.
    pub fn parse_glb(bytes: &[u8]) -> Result<Self, SceneError> {
        let (document, buffers, _images) = gltf::import_slice(bytes)?;
        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or(SceneError::NoScene)?;

        let mut meshes = Vec::new();
        for node in scene.nodes() {
            collect_meshes(node, Mat4::IDENTITY, &buffers, &mut meshes);
        }
        Self::from_meshes(meshes)
    }

    /// Recenter about the scene bounding-box center and resolve screen roles.
    /// Split out from [`parse_glb`] so the geometry pipeline is testable
    /// without GLB fixtures.
    pub fn from_meshes(mut meshes: Vec<SceneMesh>) -> Result<Self, SceneError> {
        if meshes.is_empty() {
            return Err(SceneError::Empty);
        }

        let raw_bounds = meshes
            .iter()
            .fold(Aabb::EMPTY, |acc, m| acc.union(m.aabb));
        let center = raw_bounds.center();
        for mesh in &mut meshes {
            for v in &mut mesh.vertices {
                v.position = (Vec3::from_array(v.position) - center).to_array();
            }
            mesh.translation -= center;
            mesh.recompute_aabb();
        }

        let bounds = meshes
            .iter()
            .fold(Aabb::EMPTY, |acc, m| acc.union(m.aabb));
        let roles = RoleBindings::resolve(&meshes);
        Ok(Self {
            meshes,
            bounds,
            roles,
        })
    }
}

fn collect_meshes(
    node: gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<SceneMesh>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        let name = node
            .name()
            .or_else(|| mesh.name())
            .unwrap_or_default()
            .to_owned();
        let (_scale, rotation, translation) = world.to_scale_rotation_translation();
        let normal_matrix = Mat3::from_mat4(world).inverse().transpose();

        for primitive in mesh.primitives() {
            let reader = primitive.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));
            let Some(positions) = reader.read_positions() else {
                log::warn!("primitive without positions in node '{}', skipped", name);
                continue;
            };
            let positions: Vec<Vec3> = positions
                .map(|p| world.transform_point3(Vec3::from_array(p)))
                .collect();

            let indices: Vec<u32> = match reader.read_indices() {
                Some(read) => read.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };

            let normals: Vec<Vec3> = match reader.read_normals() {
                Some(read) => read
                    .map(|n| {
                        (normal_matrix * Vec3::from_array(n)).normalize_or_zero()
                    })
                    .collect(),
                None => face_normals(&positions, &indices),
            };

            let aabb = Aabb::from_points(positions.iter().copied());
            let vertices = positions
                .iter()
                .zip(normals.iter())
                .map(|(p, n)| Vertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                })
                .collect();

            out.push(SceneMesh {
                name: name.clone(),
                translation,
                rotation,
                vertices,
                indices,
                base_color: primitive
                    .material()
                    .pbr_metallic_roughness()
                    .base_color_factor(),
                aabb,
            });
        }
    }
    for child in node.children() {
        collect_meshes(child, world, buffers, out);
    }
}

/// Area-weighted vertex normals for primitives that ship without them.
/// Triangles referencing vertices outside the position buffer are skipped.
pub fn face_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let n = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += n;
        normals[b] += n;
        normals[c] += n;
    }
    for n in &mut normals {
        *n = n.normalize_or(Vec3::Z);
    }
    normals
}
