//! Single-shot asset fetch. Runs once at startup; a failure is fatal to the
//! 3D experience but not to the page.

use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(dom::js_error)?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("fetch returned a non-Response value"))?;
    if !response.ok() {
        anyhow::bail!("fetching '{}' failed with status {}", url, response.status());
    }
    let buffer = JsFuture::from(response.array_buffer().map_err(dom::js_error)?)
        .await
        .map_err(dom::js_error)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Console diagnostic plus a blocking user-facing alert.
pub fn report_fatal(url: &str, err: &anyhow::Error) {
    log::error!("failed to load model '{}': {:#}", url, err);
    if let Some(w) = web::window() {
        let _ = w.alert_with_message(&format!(
            "Error loading '{}'. Check the console (F12) and make sure the file exists.",
            url
        ));
    }
}
