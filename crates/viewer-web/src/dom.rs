use crate::constants::WEBGL_CONTAINER_ID;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_error(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}

#[inline]
pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_click_listener_to(el: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_display(el: &web::HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}

#[inline]
pub fn add_class(el: &web::HtmlElement, class: &str) {
    let _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::HtmlElement, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Maintain canvas internal pixel size to match CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Create the raster canvas inside the WebGL container. It sits under the DOM
/// compositor layer and must not intercept pointer events.
pub fn create_render_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = html_element(document, WEBGL_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", WEBGL_CONTAINER_ID))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("canvas element has unexpected type"))?;
    let style = canvas.style();
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("width", "100%");
    let _ = style.set_property("height", "100%");
    let _ = style.set_property("pointer-events", "none");
    container.append_child(&canvas).map_err(js_error)?;
    Ok(canvas)
}
