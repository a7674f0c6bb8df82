//! Stateful session binding for the card tool page.
//!
//! A page creates one `JsSession`, feeds it file bytes and control changes,
//! and reads back the summary line, the preview URL and the download.
//!
//! ```typescript
//! const session = new JsSession();
//! session.load(new Uint8Array(await file.arrayBuffer()));
//! preview.src = session.preview_url;
//! info.textContent = session.summary;
//!
//! modeSelect.onchange = () => session.set_mode(modeSelect.value);
//! zoomSlider.oninput = () => session.set_zoom(zoomSlider.valueAsNumber);
//! downloadButton.onclick = () => session.download();
//! ```

use crate::preview::{self, PreviewUrl};
use crate::types::parse_mode;
use cardcrop_core::config::EngineConfig;
use cardcrop_core::session::{RenderJob, RenderOutcome, Session};
use wasm_bindgen::prelude::*;

/// One page's worth of state: current image, mode, sliders and result.
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
    preview: PreviewUrl,
}

impl Default for JsSession {
    fn default() -> Self {
        Self::from_session(Session::new())
    }
}

#[wasm_bindgen]
impl JsSession {
    /// Create a session with the default card layout.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsSession {
        Self::default()
    }

    /// Create a session from a partial configuration object, e.g.
    /// `{ card: { margin: 20 }, compress: { quality: 70 } }`.
    ///
    /// Missing fields keep their defaults.
    pub fn with_config(config: JsValue) -> Result<JsSession, JsValue> {
        let config: EngineConfig = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Session::with_config(config)
            .map(Self::from_session)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Load newly selected file bytes and render them in the current mode.
    ///
    /// On failure the previous image and result stay in place.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let job = self
            .inner
            .load(bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.preview.clear();
        self.settle(Some(job));
        Ok(())
    }

    /// Switch between `"compress"` and `"card"`.
    ///
    /// Returns `true` if a new result was produced.
    pub fn set_mode(&mut self, mode: &str) -> Result<bool, JsValue> {
        let mode = parse_mode(mode)?;
        let job = self.inner.set_mode(mode);
        Ok(self.settle(job))
    }

    /// Returns `true` if a new result was produced.
    pub fn set_offset_x(&mut self, value: i32) -> bool {
        let job = self.inner.set_offset_x(value);
        self.settle(job)
    }

    pub fn set_offset_y(&mut self, value: i32) -> bool {
        let job = self.inner.set_offset_y(value);
        self.settle(job)
    }

    pub fn set_zoom(&mut self, value: i32) -> bool {
        let job = self.inner.set_zoom(value);
        self.settle(job)
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.mode().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn offset_x(&self) -> i32 {
        self.inner.card_params().offset_x
    }

    #[wasm_bindgen(getter)]
    pub fn offset_y(&self) -> i32 {
        self.inner.card_params().offset_y
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> i32 {
        self.inner.card_params().zoom
    }

    /// Whether the preview and download button should be shown.
    #[wasm_bindgen(getter)]
    pub fn has_result(&self) -> bool {
        self.inner.has_result()
    }

    /// Size line for the current result, e.g. `圧縮後: 98.4 KB（12.3%）`.
    #[wasm_bindgen(getter)]
    pub fn summary(&self) -> Option<String> {
        self.inner.report().map(|r| r.summary())
    }

    /// Size line for the loaded file, e.g. `元画像: 812.0 KB`.
    #[wasm_bindgen(getter)]
    pub fn original_summary(&self) -> Option<String> {
        self.inner.original_summary()
    }

    #[wasm_bindgen(getter)]
    pub fn result_width(&self) -> Option<u32> {
        self.inner.result().map(|r| r.width)
    }

    #[wasm_bindgen(getter)]
    pub fn result_height(&self) -> Option<u32> {
        self.inner.result().map(|r| r.height)
    }

    /// Copy of the current JPEG bytes.
    pub fn result_bytes(&self) -> Option<Vec<u8>> {
        self.inner.result().map(|r| r.bytes.clone())
    }

    /// File name a download would use in the current mode.
    #[wasm_bindgen(getter)]
    pub fn download_filename(&self) -> String {
        self.inner.mode().download_filename().to_string()
    }

    /// Object URL of the current result for an `<img>` element.
    #[wasm_bindgen(getter)]
    pub fn preview_url(&self) -> Option<String> {
        self.preview.get().map(str::to_string)
    }

    /// Save the current result. Returns `false` if there is nothing to save.
    pub fn download(&self) -> Result<bool, JsValue> {
        match self.inner.download() {
            Some(download) => {
                preview::trigger_download(download.bytes, download.filename)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl JsSession {
    fn from_session(inner: Session) -> Self {
        Self {
            inner,
            preview: PreviewUrl::default(),
        }
    }

    // Renders run to completion before returning, so every job settles here.
    // A committed result stays committed even if its preview URL fails; the
    // preview is then empty rather than showing an older result.
    fn settle(&mut self, job: Option<RenderJob>) -> bool {
        let Some(job) = job else {
            return false;
        };

        match self.inner.complete_render(job.run()) {
            RenderOutcome::Committed { .. } => {
                if let Some(result) = self.inner.result() {
                    self.preview.replace(&result.bytes);
                }
                true
            }
            RenderOutcome::Stale | RenderOutcome::Failed(_) => false,
        }
    }
}
