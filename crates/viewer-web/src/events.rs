//! Event wiring: panel blockers, UI buttons, viewport resize and orbit input.

use crate::constants::{
    nav_id, EXIT_BUTTON_ID, RESET_BUTTON_ID, THEME_BUTTON_ID, VISIBLE_CLASS,
};
use crate::dom;
use crate::overlay::OverlayPanel;
use crate::{Theme, Viewer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{fit_camera_to_bounds, PanelBinding, ScreenRole, DEFAULT_FIT_MARGIN, ORBIT_DOLLY_STEP};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared entry point for blocker clicks and section-navigation entries.
/// The focus guard makes a second activation while zoomed a no-op.
fn activate_panel(
    viewer: &Rc<RefCell<Viewer>>,
    active: &Rc<RefCell<Option<ScreenRole>>>,
    binding: PanelBinding,
    blocker: &web::HtmlElement,
) {
    let mut v = viewer.borrow_mut();
    let Viewer { camera, focus, .. } = &mut *v;
    if focus.focus_on(camera, binding.focus_eye(), binding.focus_target(), Instant::now()) {
        // Out of the way so it no longer intercepts pointer events once zoomed
        dom::set_display(blocker, "none");
        *active.borrow_mut() = Some(binding.role);
    }
}

pub fn wire_panel_clicks(
    panels: &Rc<Vec<OverlayPanel>>,
    viewer: &Rc<RefCell<Viewer>>,
    active: &Rc<RefCell<Option<ScreenRole>>>,
) {
    for panel in panels.iter() {
        let viewer = viewer.clone();
        let active = active.clone();
        let binding = panel.binding;
        let blocker = panel.blocker.clone();
        dom::add_click_listener_to(&panel.blocker, move || {
            activate_panel(&viewer, &active, binding, &blocker);
        });
    }
}

pub fn wire_section_nav(
    document: &web::Document,
    panels: &Rc<Vec<OverlayPanel>>,
    viewer: &Rc<RefCell<Viewer>>,
    active: &Rc<RefCell<Option<ScreenRole>>>,
) {
    for role in ScreenRole::ALL {
        let Some(panel) = panels.iter().find(|p| p.binding.role == role) else {
            continue;
        };
        let viewer = viewer.clone();
        let active = active.clone();
        let binding = panel.binding;
        let blocker = panel.blocker.clone();
        dom::add_click_listener(document, nav_id(role), move || {
            activate_panel(&viewer, &active, binding, &blocker);
        });
    }
}

pub fn wire_exit_button(document: &web::Document, viewer: &Rc<RefCell<Viewer>>) {
    let doc = document.clone();
    let viewer = viewer.clone();
    dom::add_click_listener(document, EXIT_BUTTON_ID, move || {
        let mut v = viewer.borrow_mut();
        let Viewer { camera, focus, .. } = &mut *v;
        if focus.exit(camera, Instant::now()) {
            if let Some(btn) = dom::html_element(&doc, EXIT_BUTTON_ID) {
                dom::remove_class(&btn, VISIBLE_CLASS);
            }
        }
    });
}

pub fn wire_reset_button(document: &web::Document, viewer: &Rc<RefCell<Viewer>>) {
    let viewer = viewer.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        let mut v = viewer.borrow_mut();
        // Resets are blocked while zoomed or mid-transition
        if !v.focus.is_idle() {
            return;
        }
        let bounds = v.model_bounds;
        let Viewer { camera, orbit, .. } = &mut *v;
        if let Some(fit) = fit_camera_to_bounds(camera, &bounds, DEFAULT_FIT_MARGIN) {
            orbit.max_distance = fit.max_orbit_distance;
        }
    });
}

pub fn wire_theme_button(document: &web::Document, theme: &Rc<RefCell<Theme>>) {
    let doc = document.clone();
    let theme = theme.clone();
    dom::add_click_listener(document, THEME_BUTTON_ID, move || {
        let next = theme.borrow().toggled();
        *theme.borrow_mut() = next;
        if let Some(btn) = dom::html_element(&doc, THEME_BUTTON_ID) {
            btn.set_inner_text(next.button_label());
        }
    });
}

pub fn wire_resize(canvas: &web::HtmlCanvasElement, viewer: &Rc<RefCell<Viewer>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let viewer = viewer.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
        viewer.borrow_mut().camera.set_aspect(aspect);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Pointer drag rotates, wheel dollies. Input lands on the compositor layer,
/// which sits above the canvas.
pub fn wire_orbit(container: &web::HtmlElement, viewer: &Rc<RefCell<Viewer>>) {
    let drag: Rc<RefCell<Option<(f32, f32)>>> = Rc::new(RefCell::new(None));

    // pointerdown
    {
        let drag = drag.clone();
        let target = container.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            *drag.borrow_mut() = Some((ev.client_x() as f32, ev.client_y() as f32));
            let _ = target.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = container
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let drag = drag.clone();
        let viewer = viewer.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let Some((last_x, last_y)) = *drag.borrow() else {
                return;
            };
            let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
            viewer.borrow_mut().orbit.rotate(x - last_x, y - last_y);
            *drag.borrow_mut() = Some((x, y));
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup
    {
        let drag = drag.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            *drag.borrow_mut() = None;
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // wheel
    {
        let viewer = viewer.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            let scale = if ev.delta_y() < 0.0 {
                ORBIT_DOLLY_STEP
            } else {
                1.0 / ORBIT_DOLLY_STEP
            };
            viewer.borrow_mut().orbit.dolly(scale);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = container.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
