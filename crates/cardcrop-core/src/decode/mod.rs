//! Image decoding for Cardcrop.
//!
//! This module provides functionality for:
//! - Decoding a user-selected image file (JPEG, PNG, WebP, GIF, BMP)
//! - Applying EXIF orientation so the image is upright
//! - Resizing rasters for the compress path and the card interior
//!
//! # Architecture
//!
//! Decoding runs once per file selection. The result is an immutable
//! [`SourceImage`] that every later transform reads from.
//!
//! # Examples
//!
//! ```ignore
//! use cardcrop_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod resize;
mod source;
mod types;

pub use resize::{calculate_fit_dimensions, resize, resize_to_fit};
pub use source::{decode_image, read_orientation};
pub use types::{DecodeError, FilterType, Orientation, SourceImage};
