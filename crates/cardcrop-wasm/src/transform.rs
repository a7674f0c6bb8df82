//! Stateless transform bindings.
//!
//! These run one transform with the default configuration and return the
//! JPEG bytes. Pages that keep state between slider moves should use
//! [`JsSession`](crate::JsSession) instead.
//!
//! ```typescript
//! const image = decode_image(bytes);
//! const small = compress_image(image);
//! const card = card_image(image, 0, -40, 25);
//! const rect = card_crop_rect(image.width, image.height, 0, -40, 25);
//! ```

use crate::types::JsSourceImage;
use cardcrop_core::config::{CardConfig, CompressConfig};
use cardcrop_core::params::CardParams;
use cardcrop_core::transform;
use wasm_bindgen::prelude::*;

/// Downscale so neither side exceeds 1200 px and encode as JPEG (quality 80).
#[wasm_bindgen]
pub fn compress_image(image: &JsSourceImage) -> Result<Vec<u8>, JsValue> {
    transform::compress(image.as_source(), &CompressConfig::default())
        .map(|out| out.bytes)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render a 600x900 framed card and encode as JPEG (quality 85).
///
/// Offsets are clamped to [-100, 100] and zoom to [0, 100].
#[wasm_bindgen]
pub fn card_image(
    image: &JsSourceImage,
    offset_x: i32,
    offset_y: i32,
    zoom: i32,
) -> Result<Vec<u8>, JsValue> {
    let params = CardParams::new(offset_x, offset_y, zoom);
    transform::card(image.as_source(), &params, &CardConfig::default())
        .map(|out| out.bytes)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Output size of [`compress_image`] for a `width x height` source, as `[w, h]`.
#[wasm_bindgen]
pub fn compress_dimensions(width: u32, height: u32) -> Vec<u32> {
    let (w, h) = transform::compress_dimensions(width, height, &CompressConfig::default());
    vec![w, h]
}

/// The source rectangle a card render samples, as `{ x, y, width, height }`.
#[wasm_bindgen]
pub fn card_crop_rect(
    width: u32,
    height: u32,
    offset_x: i32,
    offset_y: i32,
    zoom: i32,
) -> Result<JsValue, JsValue> {
    let params = CardParams::new(offset_x, offset_y, zoom);
    let rect = transform::crop_rect(width, height, &params, &CardConfig::default());
    serde_wasm_bindgen::to_value(&rect).map_err(|e| JsValue::from_str(&e.to_string()))
}
