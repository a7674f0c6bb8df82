//! Browser glue for results: object URLs for the preview image and the
//! download link.

use std::fmt;

use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// MIME type of every result.
pub const JPEG_MIME: &str = "image/jpeg";

/// Wrap JPEG bytes in a `Blob`.
pub(crate) fn jpeg_blob(bytes: &[u8]) -> Result<Blob, JsValue> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(JPEG_MIME);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

fn revoke(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("failed to revoke preview URL: {:?}", e);
    }
}

/// Save `bytes` as `filename` through a temporary anchor element.
pub(crate) fn trigger_download(bytes: &[u8], filename: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Document has no body"))?;

    let url = Url::create_object_url_with_blob(&jpeg_blob(bytes)?)?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.set_attribute("style", "display:none;")?;

    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    revoke(&url);

    log::info!("download started: {} ({} bytes)", filename, bytes.len());
    Ok(())
}

/// The object URL currently shown as the preview image.
///
/// Replacing or clearing it revokes the previous URL so the browser can
/// free the blob.
#[derive(Debug, Default)]
pub(crate) struct PreviewUrl {
    url: Option<String>,
}

impl PreviewUrl {
    pub(crate) fn get(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Point the preview at new JPEG bytes.
    ///
    /// If no URL can be created the old one is still revoked, so the preview
    /// never shows a previous result.
    pub(crate) fn replace(&mut self, bytes: &[u8]) -> Option<&str> {
        let url = jpeg_blob(bytes).and_then(|blob| Url::create_object_url_with_blob(&blob));
        self.install(url)
    }

    fn install<E: fmt::Debug>(&mut self, url: Result<String, E>) -> Option<&str> {
        self.clear();
        match url {
            Ok(url) => Some(self.url.insert(url).as_str()),
            Err(e) => {
                log::warn!("failed to create preview URL: {:?}", e);
                None
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        if let Some(url) = self.url.take() {
            revoke(&url);
        }
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        self.clear();
    }
}
