//! Card transform: fixed-aspect crop with a white frame, pan and zoom.
//!
//! # Geometry
//!
//! 1. The base rectangle is the largest rectangle with the card's aspect that
//!    fits inside the source. Sources taller than the card lose top/bottom,
//!    wider ones lose left/right.
//! 2. Zoom shrinks the base rectangle by `1 + zoom/100 * 1.5`.
//! 3. Offsets pan the shrunken rectangle inside the source: 0 centers it,
//!    -100/100 pin it to an edge.
//!
//! The crop is then scaled into the interior of a white canvas, leaving a
//! frame of `margin` pixels on every side.

use image::RgbImage;

use super::canvas::{self, WHITE};
use super::crop::{apply_crop, CropRect};
use super::{EncodedOutput, TransformError};
use crate::config::CardConfig;
use crate::decode::SourceImage;
use crate::encode;
use crate::params::{CardParams, Mode};

/// Size of the largest card-aspect rectangle that fits in `width x height`.
pub fn base_size(width: u32, height: u32, card: &CardConfig) -> (u32, u32) {
    let (w, h) = (f64::from(width), f64::from(height));
    let (cw, ch) = (f64::from(card.width), f64::from(card.height));

    // height/width > card.height/card.width, compared without division
    let too_tall =
        u64::from(height) * u64::from(card.width) > u64::from(width) * u64::from(card.height);

    if too_tall {
        let base_h = (w * ch / cw).round() as u32;
        (width, base_h.clamp(1, height))
    } else {
        let base_w = (h * cw / ch).round() as u32;
        (base_w.clamp(1, width), height)
    }
}

/// Resolve slider values to a source-pixel crop rectangle.
///
/// The rectangle always lies inside the source.
pub fn crop_rect(width: u32, height: u32, params: &CardParams, card: &CardConfig) -> CropRect {
    let (base_w, base_h) = base_size(width, height, card);

    let factor = params.zoom_factor();
    let src_w = ((f64::from(base_w) / factor).round() as u32).clamp(1, width);
    let src_h = ((f64::from(base_h) / factor).round() as u32).clamp(1, height);

    let max_x = width - src_w;
    let max_y = height - src_h;

    CropRect::new(
        pan(max_x, params.relative_x()),
        pan(max_y, params.relative_y()),
        src_w,
        src_h,
    )
}

/// Position along an axis with `max` pixels of travel for a relative offset.
fn pan(max: u32, rel: f64) -> u32 {
    let centered = f64::from(max) / 2.0;
    let pos = (centered + rel * centered).round();
    pos.clamp(0.0, f64::from(max)) as u32
}

/// Where the crop lands on the output canvas.
pub fn interior_rect(card: &CardConfig) -> CropRect {
    let (width, height) = card.interior();
    CropRect::new(card.margin, card.margin, width, height)
}

/// Render the framed card raster without encoding it.
pub fn render_card(
    image: &SourceImage,
    params: &CardParams,
    card: &CardConfig,
) -> Result<RgbImage, TransformError> {
    let rect = crop_rect(image.width(), image.height(), params, card);
    let cropped = canvas::flatten(&apply_crop(image.as_rgba(), rect), WHITE);

    let mut out = canvas::filled(card.width, card.height, WHITE);
    canvas::draw_scaled(&mut out, &cropped, interior_rect(card), card.filter)?;

    log::debug!(
        "card crop {}x{}+{}+{} from {}x{} (zoom {}, offset {},{})",
        rect.width,
        rect.height,
        rect.x,
        rect.y,
        image.width(),
        image.height(),
        params.zoom,
        params.offset_x,
        params.offset_y
    );

    Ok(out)
}

/// Crop `image` to a framed card and encode it.
pub fn card(
    image: &SourceImage,
    params: &CardParams,
    card: &CardConfig,
) -> Result<EncodedOutput, TransformError> {
    let raster = render_card(image, params, card)?;
    let bytes = encode::encode_rgb_image(&raster, card.quality)?;

    Ok(EncodedOutput::new(
        Mode::Card,
        raster.width(),
        raster.height(),
        bytes,
    ))
}
