pub mod bounds;
pub mod camera;
pub mod constants;
pub mod focus;
pub mod framing;
pub mod orbit;
pub mod panel;
pub mod scene;

pub use bounds::Aabb;
pub use camera::Camera;
pub use constants::*;
pub use focus::{FocusController, FocusEvent, FocusPhase, HomePose};
pub use framing::{fit_camera_to_bounds, FitResult};
pub use orbit::OrbitControls;
pub use panel::PanelBinding;
pub use scene::{RoleBindings, SceneError, SceneMesh, SceneModel, ScreenRole, Vertex};
