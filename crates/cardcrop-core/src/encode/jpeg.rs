//! JPEG encoding for rendered output.
//!
//! Both transforms produce an RGB raster that is encoded here. Quality is
//! expressed on the encoder's 1-100 scale; [`quality_from_fraction`] maps the
//! 0.0-1.0 scale used by canvas `toBlob` onto it.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use thiserror::Error;

/// Why a raster could not be encoded.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("RGB buffer holds {actual} bytes, {expected} needed")]
    InvalidPixelData { expected: usize, actual: usize },

    #[error("Cannot encode a {width}x{height} image")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("JPEG encoder error: {0}")]
    EncodingFailed(String),

    /// The encoder returned no bytes
    #[error("JPEG encoder produced an empty payload")]
    EmptyOutput,
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (clamped to 1-100)
///
/// # Errors
///
/// Fails on zero dimensions, a mismatched buffer, an encoder error, or an
/// empty result.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    let bytes = buffer.into_inner();
    if bytes.is_empty() {
        return Err(EncodeError::EmptyOutput);
    }
    Ok(bytes)
}

/// Encode an `RgbImage` to JPEG bytes.
pub fn encode_rgb_image(image: &RgbImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(image.as_raw(), image.width(), image.height(), quality)
}

/// Map a canvas-style quality fraction (0.0-1.0) onto the 1-100 scale.
///
/// Non-finite input falls back to the encoder default of 92.
pub fn quality_from_fraction(fraction: f32) -> u8 {
    if !fraction.is_finite() {
        return 92;
    }
    (fraction.clamp(0.0, 1.0) * 100.0).round().clamp(1.0, 100.0) as u8
}
