//! Source image decoding with EXIF orientation handling.
//!
//! The format is sniffed from the bytes, so any container the `image` crate
//! was built with (JPEG, PNG, WebP, GIF, BMP) is accepted. Orientation is
//! applied up front so every later geometry step sees the image upright.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, Orientation, SourceImage};

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized,
/// `DecodeError::CorruptedFile` if decoding fails, and
/// `DecodeError::EmptyImage` if the result has no pixels.
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    let orientation = read_orientation(bytes);
    let img = decode_dynamic(bytes)?;
    SourceImage::from_rgba_image(upright(img, orientation).into_rgba8())
}

/// Extract the EXIF orientation value from encoded image bytes.
///
/// Returns `Orientation::TopLeft` when there is no EXIF block.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from_exif)
            .unwrap_or_default(),
        Err(_) => Orientation::TopLeft,
    }
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn upright(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::TopLeft => img,
        Orientation::TopRight => img.fliph(),
        Orientation::BottomRight => img.rotate180(),
        Orientation::BottomLeft => img.flipv(),
        // Transpose: mirror across the main diagonal.
        Orientation::LeftTop => img.rotate90().fliph(),
        Orientation::RightTop => img.rotate90(),
        // Transverse: mirror across the anti-diagonal.
        Orientation::RightBottom => img.rotate270().fliph(),
        Orientation::LeftBottom => img.rotate270(),
    }
}
