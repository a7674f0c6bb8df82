//! Output encoding for Cardcrop.
//!
//! Every transform result is encoded as JPEG. Compress output uses quality
//! 80 and card output quality 85 unless the engine config says otherwise.
//!
//! # Examples
//!
//! ```ignore
//! use cardcrop_core::encode::encode_jpeg;
//!
//! let pixels = vec![128u8; 100 * 100 * 3];
//! let jpeg_bytes = encode_jpeg(&pixels, 100, 100, 80).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, encode_rgb_image, quality_from_fraction, EncodeError};
