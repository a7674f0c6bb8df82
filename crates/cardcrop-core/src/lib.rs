//! Cardcrop Core - image resize and card crop engine
//!
//! This crate provides the engine behind the cardcrop tool: decoding a
//! user-selected image, either downscaling it for sharing or cropping it to a
//! framed 2:3 trading card with pan and zoom, and re-encoding the result as
//! JPEG.
//!
//! The [`Session`] type holds the state of one page and issues
//! [`RenderJob`]s; the transforms themselves are plain functions over an
//! immutable [`SourceImage`].

pub mod config;
pub mod decode;
pub mod encode;
pub mod params;
pub mod report;
pub mod session;
pub mod transform;

pub use config::{CardConfig, CompressConfig, ConfigError, EngineConfig};
pub use decode::{decode_image, DecodeError, FilterType, SourceImage};
pub use encode::{encode_jpeg, EncodeError};
pub use params::{CardParams, Mode, RenderParams};
pub use report::SizeReport;
pub use session::{
    Download, RenderJob, RenderOutcome, RenderOutput, Session, SessionError,
};
pub use transform::{run_transform, CropRect, EncodedOutput, TransformError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render_params() {
        let params = RenderParams::default();
        assert_eq!(params.mode, Mode::Compress);
        assert!(params.card.is_neutral());
    }

    #[test]
    fn test_params_serialization() {
        let params = RenderParams::card(CardParams::new(-20, 35, 60));
        let json = serde_json::to_string(&params).unwrap();
        let parsed: RenderParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, parsed);
        assert!(json.contains("\"mode\":\"card\""));
    }

    #[test]
    fn test_config_partial_deserialization() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"card":{"margin":10},"compress":{"quality":70}}"#).unwrap();
        assert_eq!(config.card.margin, 10);
        assert_eq!(config.card.width, 600);
        assert_eq!(config.compress.quality, 70);
        assert_eq!(config.compress.max_side, 1200);
        assert_eq!(config.validate(), Ok(()));
    }
}
