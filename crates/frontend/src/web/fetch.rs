//! Network access: page markup, the gallery manifest and the static
//! fallback list.

use crate::nav::cache::CacheEntry;
use contracts::shared::gallery::{GalleryItem, GalleryManifest};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{DomParser, SupportedType};

/// Raw markup of a page, relative to the current document.
pub async fn fetch_page(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| format!("Failed to read body: {}", e))
}

pub async fn fetch_manifest(url: &str) -> Result<GalleryManifest, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Extract the content region and `<title>` from a fetched page.
pub fn parse_fragment(raw: &str, content_selector: &str) -> Result<CacheEntry, String> {
    let parser = DomParser::new().map_err(|e| format!("DOMParser unavailable: {:?}", e))?;
    let doc = parser
        .parse_from_string(raw, SupportedType::TextHtml)
        .map_err(|e| format!("Failed to parse page: {:?}", e))?;
    let content = doc
        .query_selector(content_selector)
        .ok()
        .flatten()
        .ok_or_else(|| format!("page has no '{}' element", content_selector))?;
    let title = doc
        .query_selector("title")
        .ok()
        .flatten()
        .and_then(|t| t.text_content())
        .unwrap_or_default();
    Ok(CacheEntry {
        content: content.inner_html(),
        title,
    })
}

/// Gallery items published on `window[global]`, if it holds an array of
/// well-formed items.
pub fn fallback_items(global: &str) -> Option<Vec<GalleryItem>> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(global)).ok()?;
    if !js_sys::Array::is_array(&value) {
        return None;
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| log::warn!("window.{} is not a gallery item list: {}", global, e))
        .ok()
}
