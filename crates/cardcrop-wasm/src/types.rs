//! WASM-compatible wrapper types.

use cardcrop_core::decode::SourceImage;
use cardcrop_core::params::Mode;
use wasm_bindgen::prelude::*;

/// A decoded, upright image held in WASM memory.
///
/// Pixels are RGBA8 with EXIF orientation already applied. Call `pixels()`
/// only when JavaScript really needs the data; it copies the buffer.
#[wasm_bindgen]
pub struct JsSourceImage {
    inner: SourceImage,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Wrap raw RGBA pixel data (4 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsSourceImage, JsValue> {
        SourceImage::from_raw(width, height, pixels)
            .map(Self::from_source)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Number of bytes in the RGBA buffer.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.as_rgba().as_raw().len()
    }

    /// Whether any pixel is not fully opaque.
    #[wasm_bindgen(getter)]
    pub fn has_transparency(&self) -> bool {
        self.inner.has_transparency()
    }

    /// Copy of the RGBA pixel data as a `Uint8Array`.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.as_rgba().as_raw().clone()
    }
}

impl JsSourceImage {
    pub(crate) fn from_source(inner: SourceImage) -> Self {
        Self { inner }
    }

    pub(crate) fn as_source(&self) -> &SourceImage {
        &self.inner
    }
}

/// Parse a mode name from JavaScript (`"compress"` or `"card"`).
pub(crate) fn parse_mode(value: &str) -> Result<Mode, JsValue> {
    value
        .parse::<Mode>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
