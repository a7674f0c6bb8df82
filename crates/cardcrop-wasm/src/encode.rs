//! JPEG encoding WASM binding.
//!
//! ```typescript
//! import { encode_jpeg } from '@cardcrop/wasm';
//!
//! const pixels = new Uint8Array(100 * 100 * 3).fill(128);
//! const jpeg = encode_jpeg(pixels, 100, 100, 85);
//! ```

use cardcrop_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data (3 bytes per pixel, row-major) to JPEG bytes.
///
/// `quality` is on the 1-100 scale; out-of-range values are clamped.
///
/// # Errors
///
/// Returns an error if either dimension is zero, the buffer length does not
/// match `width * height * 3`, or the encoder fails.
#[wasm_bindgen]
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a canvas-style quality fraction (0.0-1.0) to the 1-100 scale.
#[wasm_bindgen]
pub fn quality_from_fraction(fraction: f32) -> u8 {
    encode::quality_from_fraction(fraction)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![128u8; 100 * 100 * 3];
        let jpeg = encode_jpeg(&pixels, 100, 100, 80).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_invalid_dimensions() {
        assert!(encode_jpeg(&[128u8; 30], 0, 10, 80).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let pixels = vec![128u8; 50 * 50 * 3];
        assert!(encode_jpeg(&pixels, 100, 100, 80).is_err());
    }
}
