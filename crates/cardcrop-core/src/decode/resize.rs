//! Image resizing for the compress path and card interior.
//!
//! All functions return new rasters without modifying the input.

use image::RgbImage;

use super::{DecodeError, FilterType};

/// Resize an RGB raster to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` if either target dimension is zero.
pub fn resize(
    image: &RgbImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RgbImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    if image.dimensions() == (width, height) {
        return Ok(image.clone());
    }

    Ok(image::imageops::resize(image, width, height, filter.into()))
}

/// Resize an image so neither side exceeds `max_side`, preserving aspect ratio.
///
/// Images already within the bound are returned unchanged (no upscaling).
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` if `max_side` is zero.
pub fn resize_to_fit(
    image: &RgbImage,
    max_side: u32,
    filter: FilterType,
) -> Result<RgbImage, DecodeError> {
    if max_side == 0 {
        return Err(DecodeError::EmptyImage {
            width: max_side,
            height: max_side,
        });
    }

    let (width, height) = calculate_fit_dimensions(image.width(), image.height(), max_side);
    resize(image, width, height, filter)
}

/// Calculate dimensions to fit within `max_side` while preserving aspect ratio.
///
/// Uses `ratio = min(max/w, max/h, 1)` and rounds each axis independently,
/// so the aspect ratio may drift by up to half a pixel per axis. Each axis
/// is kept at one pixel or more.
pub fn calculate_fit_dimensions(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let max = f64::from(max_side);
    let ratio = (max / f64::from(width)).min(max / f64::from(height)).min(1.0);

    let new_width = (f64::from(width) * ratio).round() as u32;
    let new_height = (f64::from(height) * ratio).round() as u32;
    (new_width.max(1), new_height.max(1))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: images within the bound keep their exact dimensions.
        #[test]
        fn prop_small_images_unscaled(width in 1u32..=1200, height in 1u32..=1200) {
            prop_assert_eq!(calculate_fit_dimensions(width, height, 1200), (width, height));
        }

        /// Property: oversized images land on the bound with aspect preserved.
        #[test]
        fn prop_large_images_fit_bound(width in 1u32..=8000, height in 1u32..=8000) {
            prop_assume!(width.max(height) > 1200);
            let (w, h) = calculate_fit_dimensions(width, height, 1200);

            prop_assert!(w <= 1200 && h <= 1200);
            prop_assert!(w.max(h) >= 1199, "longer side should be ~1200, got {}x{}", w, h);

            let ratio = 1200.0 / f64::from(width.max(height));
            let exact_w = f64::from(width) * ratio;
            let exact_h = f64::from(height) * ratio;
            prop_assert!((f64::from(w) - exact_w).abs() <= 1.0);
            prop_assert!((f64::from(h) - exact_h).abs() <= 1.0);
        }
    }
}
