#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{
    fit_camera_to_bounds, Aabb, Camera, FocusController, OrbitControls, SceneModel,
    BACKGROUND_DARK, BACKGROUND_LIGHT, DEFAULT_FIT_MARGIN,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod css3d;
mod dom;
mod events;
mod frame;
mod loader;
mod overlay;
mod render;

use constants::MODEL_URL;

/// Background theme; the toggle button swaps it and its own label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn background(self) -> [f32; 3] {
        match self {
            Theme::Dark => BACKGROUND_DARK,
            Theme::Light => BACKGROUND_LIGHT,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Theme::Dark => "🌙 Night mode",
            Theme::Light => "☀️ Day mode",
        }
    }
}

/// All mutable viewer state behind one handle; written by the focus
/// controller, the framer and the orbit controls, read by the render loop.
pub struct Viewer {
    pub camera: Camera,
    pub orbit: OrbitControls,
    pub focus: FocusController,
    pub model_bounds: Aabb,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio viewer starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::create_render_canvas(&document)?;
    dom::sync_canvas_backing_size(&canvas);
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;

    let viewer = Rc::new(RefCell::new(Viewer {
        camera: Camera::new(aspect),
        orbit: OrbitControls::new(),
        focus: FocusController::new(),
        model_bounds: Aabb::EMPTY,
    }));

    let mut compositor = css3d::Css3dCompositor::new(&document)?;
    let mut gpu = frame::init_gpu(&canvas).await;

    let bytes = match loader::fetch_bytes(MODEL_URL).await {
        Ok(bytes) => bytes,
        Err(e) => {
            loader::report_fatal(MODEL_URL, &e);
            return Ok(());
        }
    };
    let model = match SceneModel::parse_glb(&bytes) {
        Ok(model) => model,
        Err(e) => {
            loader::report_fatal(MODEL_URL, &anyhow::Error::from(e));
            return Ok(());
        }
    };
    log::info!("model loaded: {} meshes", model.meshes.len());

    {
        let mut v = viewer.borrow_mut();
        v.model_bounds = model.bounds;
        let Viewer {
            camera,
            orbit,
            focus,
            ..
        } = &mut *v;
        if let Some(fit) = fit_camera_to_bounds(camera, &model.bounds, DEFAULT_FIT_MARGIN) {
            orbit.max_distance = fit.max_orbit_distance;
        }
        // Home pose is the post-fit view; exits return here.
        focus.capture_home(camera);
    }

    let panels = Rc::new(overlay::bind_panels(&document, &model, &mut compositor));
    if let Some(g) = &mut gpu {
        g.upload_scene(&model);
    }

    let theme = Rc::new(RefCell::new(Theme::Dark));
    let active_panel = Rc::new(RefCell::new(None));

    events::wire_panel_clicks(&panels, &viewer, &active_panel);
    events::wire_section_nav(&document, &panels, &viewer, &active_panel);
    events::wire_exit_button(&document, &viewer);
    events::wire_reset_button(&document, &viewer);
    events::wire_theme_button(&document, &theme);
    events::wire_resize(&canvas, &viewer);
    events::wire_orbit(compositor.container(), &viewer);

    let ctx = frame::FrameContext {
        viewer,
        panels,
        active_panel,
        theme,
        canvas,
        compositor,
        gpu,
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
