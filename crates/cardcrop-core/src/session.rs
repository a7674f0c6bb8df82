//! Per-page session state.
//!
//! A [`Session`] owns the loaded image, the current mode and card sliders,
//! and the single current result. Rendering is split into three steps so a
//! host can run the encode off the event loop:
//!
//! 1. [`Session::begin_render`] snapshots the image and parameters into a
//!    [`RenderJob`] tagged with a sequence number.
//! 2. [`RenderJob::run`] does the work and touches no session state.
//! 3. [`Session::complete_render`] commits the output, unless a newer job
//!    has already settled or a file was loaded after the job was issued.
//!
//! The last job to be started wins, regardless of completion order.

use std::sync::Arc;

use thiserror::Error;

use crate::config::{ConfigError, EngineConfig};
use crate::decode::{self, DecodeError, SourceImage};
use crate::params::{CardParams, Mode, RenderParams};
use crate::report::{self, SizeReport};
use crate::transform::{self, EncodedOutput, TransformError};

/// Errors from [`Session::load`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// No bytes were supplied.
    #[error("No file data provided")]
    EmptyFile,

    /// The bytes could not be decoded as an image.
    #[error("Failed to load image: {0}")]
    Decode(#[from] DecodeError),
}

/// A snapshot of everything one render needs.
#[derive(Debug, Clone)]
pub struct RenderJob {
    seq: u64,
    image: Arc<SourceImage>,
    params: RenderParams,
    config: EngineConfig,
}

impl RenderJob {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Run the transform. Pure; may be called from anywhere.
    pub fn run(self) -> RenderOutput {
        let result = transform::run_transform(&self.image, &self.params, &self.config);
        RenderOutput {
            seq: self.seq,
            result,
        }
    }
}

/// The result of [`RenderJob::run`], handed back to [`Session::complete_render`].
#[derive(Debug)]
pub struct RenderOutput {
    pub seq: u64,
    pub result: Result<EncodedOutput, TransformError>,
}

/// What [`Session::complete_render`] did with an output.
#[derive(Debug)]
pub enum RenderOutcome {
    /// The output is now the current result.
    Committed {
        report: SizeReport,
        /// The result that was replaced, if any.
        superseded: Option<EncodedOutput>,
    },
    /// A newer job already settled, or a file was loaded since; discarded.
    Stale,
    /// The transform failed; the previous result is kept.
    Failed(TransformError),
}

impl RenderOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, RenderOutcome::Committed { .. })
    }
}

/// Bytes and file name for saving the current result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Download<'a> {
    pub filename: &'static str,
    pub bytes: &'a [u8],
}

/// Session state for one page.
#[derive(Debug)]
pub struct Session {
    config: EngineConfig,
    image: Option<Arc<SourceImage>>,
    original_size: u64,
    result: Option<EncodedOutput>,
    mode: Mode,
    card: CardParams,
    next_seq: u64,
    // Jobs issued before this sequence belong to a previous file.
    load_seq: u64,
    // Newest sequence that completed, successfully or not.
    settled_seq: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a custom configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: EngineConfig) -> Self {
        Self {
            config,
            image: None,
            original_size: 0,
            result: None,
            mode: Mode::default(),
            card: CardParams::neutral(),
            next_seq: 1,
            load_seq: 0,
            settled_seq: 0,
        }
    }

    /// Decode a newly selected file and make it the current image.
    ///
    /// On success the card sliders are reset, the previous result is
    /// dropped, and a job for the current mode is returned. On failure the
    /// session is left exactly as it was.
    pub fn load(&mut self, bytes: &[u8]) -> Result<RenderJob, SessionError> {
        if bytes.is_empty() {
            return Err(SessionError::EmptyFile);
        }

        let image = decode::decode_image(bytes).map_err(|e| {
            log::warn!("decode failed for {} byte file: {}", bytes.len(), e);
            SessionError::Decode(e)
        })?;

        log::info!(
            "loaded {}x{} image ({} bytes)",
            image.width(),
            image.height(),
            bytes.len()
        );

        self.original_size = bytes.len() as u64;
        self.result = None;
        self.card = CardParams::neutral();
        let image = Arc::new(image);
        self.image = Some(Arc::clone(&image));
        self.load_seq = self.next_seq;

        Ok(self.issue(image))
    }

    /// Snapshot the current image and parameters, if an image is loaded.
    pub fn begin_render(&mut self) -> Option<RenderJob> {
        let image = Arc::clone(self.image.as_ref()?);
        Some(self.issue(image))
    }

    fn issue(&mut self, image: Arc<SourceImage>) -> RenderJob {
        let seq = self.next_seq;
        self.next_seq += 1;

        RenderJob {
            seq,
            image,
            params: self.render_params(),
            config: self.config,
        }
    }

    /// Accept or discard the output of a job.
    pub fn complete_render(&mut self, output: RenderOutput) -> RenderOutcome {
        if output.seq < self.load_seq || output.seq <= self.settled_seq {
            log::debug!(
                "discarding stale render #{} (settled #{}, load #{})",
                output.seq,
                self.settled_seq,
                self.load_seq
            );
            return RenderOutcome::Stale;
        }
        self.settled_seq = output.seq;

        match output.result {
            Ok(encoded) => {
                let report =
                    SizeReport::new(encoded.mode, encoded.len() as u64, self.original_size);
                log::info!("render #{} committed: {}", output.seq, report);
                let superseded = self.result.replace(encoded);
                RenderOutcome::Committed { report, superseded }
            }
            Err(e) => {
                log::warn!("render #{} failed: {}", output.seq, e);
                RenderOutcome::Failed(e)
            }
        }
    }

    /// Begin, run and complete a render in one call.
    pub fn render_sync(&mut self) -> Option<RenderOutcome> {
        let job = self.begin_render()?;
        Some(self.complete_render(job.run()))
    }

    /// Switch mode. Re-renders when an image is loaded.
    pub fn set_mode(&mut self, mode: Mode) -> Option<RenderJob> {
        self.mode = mode;
        self.begin_render()
    }

    /// Store new slider values. Re-renders only in card mode.
    pub fn set_card_params(&mut self, params: CardParams) -> Option<RenderJob> {
        self.card = params.clamped();
        match self.mode {
            Mode::Card => self.begin_render(),
            Mode::Compress => None,
        }
    }

    pub fn set_offset_x(&mut self, value: i32) -> Option<RenderJob> {
        self.set_card_params(CardParams {
            offset_x: value,
            ..self.card
        })
    }

    pub fn set_offset_y(&mut self, value: i32) -> Option<RenderJob> {
        self.set_card_params(CardParams {
            offset_y: value,
            ..self.card
        })
    }

    pub fn set_zoom(&mut self, value: i32) -> Option<RenderJob> {
        self.set_card_params(CardParams {
            zoom: value,
            ..self.card
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn card_params(&self) -> CardParams {
        self.card
    }

    pub fn render_params(&self) -> RenderParams {
        RenderParams {
            mode: self.mode,
            card: self.card,
        }
    }

    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_deref()
    }

    /// Byte length of the loaded file, 0 before the first load.
    pub fn original_size(&self) -> u64 {
        self.original_size
    }

    pub fn result(&self) -> Option<&EncodedOutput> {
        self.result.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Size summary for the current result.
    pub fn report(&self) -> Option<SizeReport> {
        self.result
            .as_ref()
            .map(|r| SizeReport::new(r.mode, r.len() as u64, self.original_size))
    }

    /// `元画像: ... KB` for the loaded file.
    pub fn original_summary(&self) -> Option<String> {
        self.image
            .as_ref()
            .map(|_| report::original_summary(self.original_size))
    }

    /// The current result with the file name for the current mode.
    pub fn download(&self) -> Option<Download<'_>> {
        self.result.as_ref().map(|r| Download {
            filename: self.mode.download_filename(),
            bytes: &r.bytes,
        })
    }
}
