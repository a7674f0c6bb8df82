//! Pixel-space crop rectangles.
//!
//! Card geometry resolves to a [`CropRect`] in source pixels; [`apply_crop`]
//! cuts that region out of the source raster.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel coordinates, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Returns true if the rectangle lies entirely inside a `width x height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}

/// Cut `rect` out of `image`.
///
/// The rectangle is clamped to the image bounds and the output is never
/// smaller than 1x1. A rectangle covering the whole image returns a copy.
pub fn apply_crop(image: &RgbaImage, rect: CropRect) -> RgbaImage {
    let (img_w, img_h) = image.dimensions();

    if rect == CropRect::full(img_w, img_h) {
        return image.clone();
    }

    let x = rect.x.min(img_w.saturating_sub(1));
    let y = rect.y.min(img_h.saturating_sub(1));
    let width = rect.width.min(img_w - x).max(1);
    let height = rect.height.min(img_h - y).max(1);

    image::imageops::crop_imm(image, x, y, width, height).to_image()
}
