//! Decoded image and the small enums around it.

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a file could not be turned into a [`SourceImage`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not in any format this build can read.
    #[error("Unrecognized image format")]
    InvalidFormat,

    /// The format was recognized but the data could not be decoded.
    #[error("Image data is corrupted: {0}")]
    CorruptedFile(String),

    /// A raster with no pixels, or a zero target size.
    #[error("Decoded image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Pixel buffer length doesn't match the stated dimensions.
    #[error("RGBA buffer holds {actual} bytes, {expected} needed")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Resampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Nearest,
    /// Closest match to a browser canvas `drawImage`.
    #[default]
    Bilinear,
    /// Sharper, and noticeably slower on large sources.
    Lanczos3,
}

impl From<FilterType> for image::imageops::FilterType {
    fn from(filter: FilterType) -> Self {
        match filter {
            FilterType::Nearest => Self::Nearest,
            FilterType::Bilinear => Self::Triangle,
            FilterType::Lanczos3 => Self::Lanczos3,
        }
    }
}

/// EXIF orientation tag, named after where the stored first row and first
/// column end up (`TopLeft` is upright).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    TopLeft = 1,
    TopRight = 2,
    BottomRight = 3,
    BottomLeft = 4,
    LeftTop = 5,
    RightTop = 6,
    RightBottom = 7,
    LeftBottom = 8,
}

impl Orientation {
    /// Map a raw tag value; anything outside 1-8 is treated as upright.
    pub fn from_exif(value: u32) -> Self {
        match value {
            2 => Self::TopRight,
            3 => Self::BottomRight,
            4 => Self::BottomLeft,
            5 => Self::LeftTop,
            6 => Self::RightTop,
            7 => Self::RightBottom,
            8 => Self::LeftBottom,
            _ => Self::TopLeft,
        }
    }

    /// Whether the upright image has width and height exchanged.
    pub fn is_transposed(self) -> bool {
        (self as u8) >= 5
    }
}

/// A decoded source image.
///
/// Pixels are RGBA8 with EXIF orientation already applied. The image is
/// immutable once built; sessions and render jobs share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    /// Build a source image from raw RGBA pixel data.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::EmptyImage` for zero dimensions and
    /// `DecodeError::InvalidPixelData` when the buffer length is wrong.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        let expected = (width as usize) * (height as usize) * 4;
        let actual = pixels.len();
        if expected == 0 {
            return Err(DecodeError::EmptyImage { width, height });
        }
        if actual != expected {
            return Err(DecodeError::InvalidPixelData { expected, actual });
        }
        RgbaImage::from_raw(width, height, pixels)
            .map(|pixels| Self { pixels })
            .ok_or(DecodeError::InvalidPixelData { expected, actual })
    }

    /// Wrap an already decoded `RgbaImage`.
    pub fn from_rgba_image(pixels: RgbaImage) -> Result<Self, DecodeError> {
        match pixels.dimensions() {
            (0, _) | (_, 0) => Err(DecodeError::EmptyImage {
                width: pixels.width(),
                height: pixels.height(),
            }),
            _ => Ok(Self { pixels }),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Borrow the underlying RGBA raster.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Returns true if any pixel is not fully opaque.
    pub fn has_transparency(&self) -> bool {
        self.pixels.pixels().any(|p| p.0[3] != u8::MAX)
    }
}
