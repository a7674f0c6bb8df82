//! The two output transforms: compress and card.
//!
//! Both take an immutable [`SourceImage`] plus explicit parameters and return
//! an [`EncodedOutput`]. Neither touches session state, so the same inputs
//! always produce byte-identical output.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the (orientation-corrected) source
//! - Crop rectangles are in source pixels
//! - Card offsets are slider values in [-100, 100], zoom in [0, 100]

mod canvas;
mod card;
mod compress;
mod crop;

use thiserror::Error;

use crate::config::EngineConfig;
use crate::decode::{DecodeError, SourceImage};
use crate::encode::EncodeError;
use crate::params::{Mode, RenderParams};

pub use canvas::{draw_scaled, filled, flatten, BLACK, WHITE};
pub use card::{base_size, card, crop_rect, interior_rect, render_card};
pub use compress::{compress, compress_dimensions, render_compress};
pub use crop::{apply_crop, CropRect};

/// Errors that can occur while running a transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Resampling the raster failed.
    #[error("Resize failed: {0}")]
    Resize(#[from] DecodeError),

    /// Encoding the rendered raster failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// An encoded transform result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedOutput {
    /// Mode that produced this output.
    pub mode: Mode,
    /// Rendered width in pixels.
    pub width: u32,
    /// Rendered height in pixels.
    pub height: u32,
    /// JPEG bytes.
    pub bytes: Vec<u8>,
}

impl EncodedOutput {
    pub fn new(mode: Mode, width: u32, height: u32, bytes: Vec<u8>) -> Self {
        Self {
            mode,
            width,
            height,
            bytes,
        }
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Run the transform selected by `params.mode` and encode the result.
pub fn run_transform(
    image: &SourceImage,
    params: &RenderParams,
    config: &EngineConfig,
) -> Result<EncodedOutput, TransformError> {
    match params.mode {
        Mode::Compress => compress(image, &config.compress),
        Mode::Card => card(image, &params.card.clamped(), &config.card),
    }
}
