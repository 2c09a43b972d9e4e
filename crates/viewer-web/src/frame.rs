//! Per-frame driver: advances the focus transition, applies orbit damping and
//! issues both render passes.

use crate::constants::{BLOCKER_VISIBLE_DISPLAY, EXIT_BUTTON_ID, VISIBLE_CLASS};
use crate::css3d::Css3dCompositor;
use crate::overlay::OverlayPanel;
use crate::{dom, render, Theme, Viewer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{FocusEvent, ScreenRole};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub viewer: Rc<RefCell<Viewer>>,
    pub panels: Rc<Vec<OverlayPanel>>,
    pub active_panel: Rc<RefCell<Option<ScreenRole>>>,
    pub theme: Rc<RefCell<Theme>>,
    pub canvas: web::HtmlCanvasElement,
    pub compositor: Css3dCompositor,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let mut viewer = self.viewer.borrow_mut();
        let Viewer {
            camera,
            orbit,
            focus,
            ..
        } = &mut *viewer;

        if let Some(event) = focus.tick(camera, now) {
            match event {
                FocusEvent::Focused => {
                    orbit.enabled = false;
                    if let Some(doc) = dom::window_document() {
                        if let Some(btn) = dom::html_element(&doc, EXIT_BUTTON_ID) {
                            dom::add_class(&btn, VISIBLE_CLASS);
                        }
                    }
                }
                FocusEvent::ReturnedHome => {
                    orbit.enabled = true;
                    if let Some(role) = self.active_panel.borrow_mut().take() {
                        if let Some(panel) = self.panels.iter().find(|p| p.binding.role == role) {
                            dom::set_display(&panel.blocker, BLOCKER_VISIBLE_DISPLAY);
                        }
                    }
                }
            }
        }
        orbit.update(camera);

        if let Some(gpu) = &mut self.gpu {
            gpu.set_clear_color(self.theme.borrow().background());
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = gpu.render(camera) {
                log::error!("render error: {:?}", e);
            }
        }
        self.compositor.render(camera);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
