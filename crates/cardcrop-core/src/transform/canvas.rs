//! Minimal raster canvas operations: solid fill, alpha flattening and
//! scaled blits.
//!
//! These mirror what a 2D canvas does for the two transforms. A cleared
//! canvas encoded as JPEG turns transparent pixels black; a canvas filled
//! white first shows white through them.

use image::{Rgb, RgbImage, RgbaImage};

use super::crop::CropRect;
use crate::decode::{self, DecodeError, FilterType};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Create a canvas filled with a single color.
pub fn filled(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}

/// Composite an RGBA raster over a solid background color.
pub fn flatten(image: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    let mut out = RgbImage::new(image.width(), image.height());

    for (dst, src) in out.pixels_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = match a {
            u8::MAX => Rgb([r, g, b]),
            0 => background,
            _ => Rgb([
                blend(r, background.0[0], a),
                blend(g, background.0[1], a),
                blend(b, background.0[2], a),
            ]),
        };
    }

    out
}

#[inline]
fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    ((u32::from(fg) * a + u32::from(bg) * (255 - a) + 127) / 255) as u8
}

/// Draw `src` scaled to exactly fill `dest` on `canvas`.
///
/// Parts of `dest` outside the canvas are clipped.
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` if `dest` has zero size.
pub fn draw_scaled(
    canvas: &mut RgbImage,
    src: &RgbImage,
    dest: CropRect,
    filter: FilterType,
) -> Result<(), DecodeError> {
    let scaled = decode::resize(src, dest.width, dest.height, filter)?;
    image::imageops::replace(canvas, &scaled, i64::from(dest.x), i64::from(dest.y));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_filled() {
        let canvas = filled(4, 3, WHITE);
        assert_eq!(canvas.dimensions(), (4, 3));
        assert!(canvas.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_flatten_opaque_passthrough() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        let flat = flatten(&img, WHITE);
        assert!(flat.pixels().all(|p| *p == Rgb([10, 20, 30])));
    }

    #[test]
    fn test_flatten_transparent_shows_background() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        assert!(flatten(&img, WHITE).pixels().all(|p| *p == WHITE));
        assert!(flatten(&img, BLACK).pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn test_flatten_half_alpha() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let flat = flatten(&img, WHITE);
        // 255 * 127 / 255 = 127
        assert_eq!(flat.get_pixel(0, 0), &Rgb([127, 127, 127]));
    }

    #[test]
    fn test_draw_scaled_places_region() {
        let mut canvas = filled(10, 10, WHITE);
        let src = filled(2, 2, BLACK);
        draw_scaled(&mut canvas, &src, CropRect::new(2, 3, 4, 5), FilterType::Nearest).unwrap();

        assert_eq!(canvas.get_pixel(2, 3), &BLACK);
        assert_eq!(canvas.get_pixel(5, 7), &BLACK);
        assert_eq!(canvas.get_pixel(1, 3), &WHITE);
        assert_eq!(canvas.get_pixel(6, 3), &WHITE);
        assert_eq!(canvas.get_pixel(2, 8), &WHITE);
    }

    #[test]
    fn test_draw_scaled_clips_at_edge() {
        let mut canvas = filled(4, 4, WHITE);
        let src = filled(1, 1, BLACK);
        draw_scaled(&mut canvas, &src, CropRect::new(2, 2, 5, 5), FilterType::Nearest).unwrap();

        assert_eq!(canvas.get_pixel(3, 3), &BLACK);
        assert_eq!(canvas.get_pixel(1, 1), &WHITE);
    }

    #[test]
    fn test_draw_scaled_zero_dest_errors() {
        let mut canvas = filled(4, 4, WHITE);
        let src = filled(1, 1, BLACK);
        let dest = CropRect::new(0, 0, 0, 3);
        assert!(draw_scaled(&mut canvas, &src, dest, FilterType::Nearest).is_err());
    }
}
