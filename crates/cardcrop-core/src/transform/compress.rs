//! Compress transform: aspect-preserving downscale and JPEG re-encode.

use image::RgbImage;

use super::canvas::{self, BLACK};
use super::{EncodedOutput, TransformError};
use crate::config::CompressConfig;
use crate::decode::{self, SourceImage};
use crate::encode;
use crate::params::Mode;

/// Output dimensions for an image of `width x height`.
///
/// `ratio = min(max_side / width, max_side / height, 1)`, each axis rounded.
pub fn compress_dimensions(width: u32, height: u32, config: &CompressConfig) -> (u32, u32) {
    decode::calculate_fit_dimensions(width, height, config.max_side)
}

/// Render the scaled raster without encoding it.
pub fn render_compress(
    image: &SourceImage,
    config: &CompressConfig,
) -> Result<RgbImage, TransformError> {
    let flat = canvas::flatten(image.as_rgba(), BLACK);
    Ok(decode::resize_to_fit(&flat, config.max_side, config.filter)?)
}

/// Downscale `image` so neither side exceeds `config.max_side` and encode it.
///
/// Images already within the bound pass through at their own size but are
/// still re-encoded.
pub fn compress(
    image: &SourceImage,
    config: &CompressConfig,
) -> Result<EncodedOutput, TransformError> {
    let raster = render_compress(image, config)?;
    let bytes = encode::encode_rgb_image(&raster, config.quality)?;

    log::debug!(
        "compress {}x{} -> {}x{} ({} bytes)",
        image.width(),
        image.height(),
        raster.width(),
        raster.height(),
        bytes.len()
    );

    Ok(EncodedOutput::new(
        Mode::Compress,
        raster.width(),
        raster.height(),
        bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn source(width: u32, height: u32) -> SourceImage {
        SourceImage::from_rgba_image(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 90, 255])
        }))
        .unwrap()
    }

    #[test]
    fn test_small_image_keeps_dimensions() {
        let out = compress(&source(640, 480), &CompressConfig::default()).unwrap();
        assert_eq!((out.width, out.height), (640, 480));
        assert_eq!(&out.bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_square_2000_becomes_1200() {
        let out = compress(&source(2000, 2000), &CompressConfig::default()).unwrap();
        assert_eq!((out.width, out.height), (1200, 1200));
        assert_eq!(out.mode, Mode::Compress);
    }

    #[test]
    fn test_portrait_long_side_bound() {
        let raster = render_compress(&source(1500, 3000), &CompressConfig::default()).unwrap();
        assert_eq!(raster.dimensions(), (600, 1200));
    }

    #[test]
    fn test_compress_dimensions_uses_config() {
        let config = CompressConfig {
            max_side: 100,
            ..CompressConfig::default()
        };
        assert_eq!(compress_dimensions(400, 200, &config), (100, 50));
    }

    #[test]
    fn test_transparent_pixels_flatten_to_black() {
        let clear = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 0]));
        let img = SourceImage::from_rgba_image(clear).unwrap();
        let raster = render_compress(&img, &CompressConfig::default()).unwrap();
        assert!(raster.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_compress_is_deterministic() {
        let img = source(300, 200);
        let config = CompressConfig::default();
        let a = compress(&img, &config).unwrap();
        let b = compress(&img, &config).unwrap();
        assert_eq!(a.bytes, b.bytes);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        /// Property: rendered size always matches the computed dimensions.
        #[test]
        fn prop_render_matches_dimensions(
            width in 1u32..=300,
            height in 1u32..=300,
            max_side in 1u32..=200,
        ) {
            let raw = RgbaImage::from_pixel(width, height, Rgba([1, 2, 3, 255]));
            let img = SourceImage::from_rgba_image(raw).unwrap();
            let config = CompressConfig { max_side, ..CompressConfig::default() };

            let raster = render_compress(&img, &config).unwrap();
            prop_assert_eq!(raster.dimensions(), compress_dimensions(width, height, &config));
            prop_assert!(raster.width() <= max_side && raster.height() <= max_side);
        }
    }
}
