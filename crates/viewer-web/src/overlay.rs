//! Overlay binder: connects resolved screen roles to their DOM wrapper and
//! blocker elements and hands the wrappers to the DOM compositor.

use crate::constants::{blocker_id, wrapper_id};
use crate::css3d::Css3dCompositor;
use crate::dom;
use viewer_core::{PanelBinding, SceneModel};
use web_sys as web;

pub struct OverlayPanel {
    pub binding: PanelBinding,
    pub wrapper: web::HtmlElement,
    pub blocker: web::HtmlElement,
}

/// Bind every resolved screen role to its DOM elements. A missing element is
/// a console warning and that overlay is skipped; the rest of the viewer keeps
/// working.
pub fn bind_panels(
    document: &web::Document,
    model: &SceneModel,
    compositor: &mut Css3dCompositor,
) -> Vec<OverlayPanel> {
    let mut panels = Vec::new();
    for (role, mesh_index) in model.roles.iter() {
        let binding = PanelBinding::from_mesh(role, &model.meshes[mesh_index]);

        let Some(wrapper) = dom::html_element(document, wrapper_id(role)) else {
            log::warn!("missing #{}, overlay for {:?} skipped", wrapper_id(role), role);
            continue;
        };
        let Some(blocker) = dom::html_element(document, blocker_id(role)) else {
            log::warn!("missing #{}, overlay for {:?} skipped", blocker_id(role), role);
            continue;
        };

        let style = wrapper.style();
        let _ = style.set_property("width", &format!("{}px", binding.pixel_size[0]));
        let _ = style.set_property("height", &format!("{}px", binding.pixel_size[1]));
        compositor.add_panel(&wrapper, binding.model_matrix());

        panels.push(OverlayPanel {
            binding,
            wrapper,
            blocker,
        });
    }
    panels
}
