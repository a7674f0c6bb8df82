//! Cardcrop WASM - WebAssembly bindings for Cardcrop
//!
//! This crate exposes the cardcrop-core engine to a browser page and supplies
//! the small amount of browser glue the page needs.
//!
//! # Module Structure
//!
//! - `session` - Stateful page session (load, mode, sliders, preview, download)
//! - `types` - WASM-compatible wrapper for decoded images
//! - `decode` - Image decoding bindings
//! - `encode` - JPEG encoding binding
//! - `transform` - Stateless compress and card bindings
//! - `preview` - Object URLs and the download link
//! - `logger` - `log` backend writing to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSession } from '@cardcrop/wasm';
//!
//! await init();
//!
//! const session = new JsSession();
//! session.load(new Uint8Array(await file.arrayBuffer()));
//! console.log(session.original_summary, session.summary);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod logger;
mod preview;
mod session;
mod transform;
mod types;

pub use decode::{decode_image, image_orientation};
pub use encode::{encode_jpeg, quality_from_fraction};
pub use logger::set_log_level;
pub use preview::JPEG_MIME;
pub use session::JsSession;
pub use transform::{card_crop_rect, card_image, compress_dimensions, compress_image};
pub use types::JsSourceImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logger::init();
    log::info!("cardcrop {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
