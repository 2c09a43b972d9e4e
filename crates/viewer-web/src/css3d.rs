//! DOM-compositing 3D pass: positions the screen panel elements with CSS
//! `perspective` and `matrix3d` transforms so they register 1:1 with the
//! rendered meshes under the same camera.
//!
//! Panel transforms are fixed (the meshes never move), so they are written
//! once at bind time; only the camera transform is updated per frame.

use crate::constants::CSS3D_CONTAINER_ID;
use crate::dom;
use glam::Mat4;
use std::fmt::Write as _;
use viewer_core::Camera;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Css3dCompositor {
    container: web::HtmlElement,
    camera_element: web::HtmlElement,
}

impl Css3dCompositor {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let container = dom::html_element(document, CSS3D_CONTAINER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CSS3D_CONTAINER_ID))?;
        // The compositor layer sits above the canvas and must receive clicks.
        let _ = container.style().set_property("pointer-events", "auto");

        let camera_element: web::HtmlElement = document
            .create_element("div")
            .map_err(dom::js_error)?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("camera element has unexpected type"))?;
        let style = camera_element.style();
        let _ = style.set_property("width", "100%");
        let _ = style.set_property("height", "100%");
        let _ = style.set_property("transform-style", "preserve-3d");
        let _ = style.set_property("pointer-events", "none");
        container
            .append_child(&camera_element)
            .map_err(dom::js_error)?;

        Ok(Self {
            container,
            camera_element,
        })
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    /// Re-parent a panel wrapper into the compositor and write its world
    /// transform once.
    pub fn add_panel(&mut self, wrapper: &web::HtmlElement, matrix: Mat4) {
        let style = wrapper.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("pointer-events", "auto");
        let _ = style.set_property("transform", &object_css_matrix(&matrix));
        let _ = self.camera_element.append_child(wrapper);
    }

    /// Per-frame camera pass: viewport perspective plus the inverse camera
    /// transform, mirroring what the GPU projection does for the raster layer.
    pub fn render(&self, camera: &Camera) {
        let width = self.container.client_width() as f32;
        let height = self.container.client_height() as f32;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let fov_px = 0.5 * height / (camera.fovy_radians * 0.5).tan();
        let _ = self
            .container
            .style()
            .set_property("perspective", &format!("{fov_px}px"));

        let view = camera.view_matrix();
        let transform = format!(
            "translateZ({fov_px}px){}translate({}px,{}px)",
            camera_css_matrix(&view),
            width * 0.5,
            height * 0.5
        );
        let _ = self
            .camera_element
            .style()
            .set_property("transform", &transform);
    }
}

#[inline]
fn snap(v: f32) -> f32 {
    // Tiny residues produce exponent notation, which CSS rejects.
    if v.abs() < 1e-6 {
        0.0
    } else {
        v
    }
}

/// CSS lives in a y-down space; the second row of the view matrix flips sign.
fn camera_css_matrix(m: &Mat4) -> String {
    let e = m.to_cols_array();
    let mut out = String::from("matrix3d(");
    for (i, v) in e.iter().enumerate() {
        let v = if i % 4 == 1 { -v } else { *v };
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}", snap(v));
    }
    out.push(')');
    out
}

/// Object matrices flip their second column instead, and panels are centered
/// on their anchor point.
fn object_css_matrix(m: &Mat4) -> String {
    let e = m.to_cols_array();
    let mut out = String::from("translate(-50%,-50%)matrix3d(");
    for (i, v) in e.iter().enumerate() {
        let v = if (4..8).contains(&i) { -v } else { *v };
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}", snap(v));
    }
    out.push(')');
    out
}
