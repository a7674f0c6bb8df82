//! Engine configuration.
//!
//! The defaults reproduce the fixed layout of the card tool: a 1200 px long
//! side for compression at quality 80, and a 600x900 card with a 30 px white
//! frame at quality 85. Hosts may override any field; missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::FilterType;

/// Longest side allowed in compress mode.
pub const MAX_SIDE: u32 = 1200;
/// Card output width.
pub const CARD_WIDTH: u32 = 600;
/// Card output height.
pub const CARD_HEIGHT: u32 = 900;
/// White frame width on every card edge.
pub const FRAME_MARGIN: u32 = 30;
/// JPEG quality for compress output.
pub const COMPRESS_QUALITY: u8 = 80;
/// JPEG quality for card output.
pub const CARD_QUALITY: u8 = 85;

/// Errors raised by [`EngineConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("compress.max_side must be non-zero")]
    ZeroMaxSide,

    #[error("card size must be non-zero, got {width}x{height}")]
    ZeroCardSize { width: u32, height: u32 },

    #[error("card margin {margin} leaves no interior in a {width}x{height} card")]
    MarginTooLarge { margin: u32, width: u32, height: u32 },

    #[error("{field} quality must be within 1-100, got {value}")]
    QualityOutOfRange { field: &'static str, value: u8 },
}

/// Settings for the compress transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressConfig {
    pub max_side: u32,
    pub quality: u8,
    pub filter: FilterType,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            max_side: MAX_SIDE,
            quality: COMPRESS_QUALITY,
            filter: FilterType::Bilinear,
        }
    }
}

/// Settings for the card transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub quality: u8,
    pub filter: FilterType,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            margin: FRAME_MARGIN,
            quality: CARD_QUALITY,
            filter: FilterType::Bilinear,
        }
    }
}

impl CardConfig {
    /// Size of the area inside the frame.
    pub fn interior(&self) -> (u32, u32) {
        (
            self.width.saturating_sub(self.margin.saturating_mul(2)),
            self.height.saturating_sub(self.margin.saturating_mul(2)),
        )
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub compress: CompressConfig,
    pub card: CardConfig,
}

impl EngineConfig {
    /// Check that every size and quality is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.compress.max_side == 0 {
            return Err(ConfigError::ZeroMaxSide);
        }
        check_quality("compress", self.compress.quality)?;

        let card = &self.card;
        if card.width == 0 || card.height == 0 {
            return Err(ConfigError::ZeroCardSize {
                width: card.width,
                height: card.height,
            });
        }
        let (inner_w, inner_h) = card.interior();
        if inner_w == 0 || inner_h == 0 {
            return Err(ConfigError::MarginTooLarge {
                margin: card.margin,
                width: card.width,
                height: card.height,
            });
        }
        check_quality("card", card.quality)
    }
}

fn check_quality(field: &'static str, value: u8) -> Result<(), ConfigError> {
    if (1..=100).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::QualityOutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.compress.max_side, 1200);
        assert_eq!(config.card.interior(), (540, 840));
    }

    #[test]
    fn test_zero_max_side_rejected() {
        let mut config = EngineConfig::default();
        config.compress.max_side = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxSide));
    }

    #[test]
    fn test_margin_too_large_rejected() {
        let mut config = EngineConfig::default();
        config.card.margin = 300;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MarginTooLarge { margin: 300, .. })
        ));
    }

    #[test]
    fn test_zero_card_size_rejected() {
        let mut config = EngineConfig::default();
        config.card.height = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroCardSize { .. })
        ));
    }

    #[test]
    fn test_quality_range() {
        let mut config = EngineConfig::default();
        config.card.quality = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::QualityOutOfRange {
                field: "card",
                value: 0
            })
        );

        config.card.quality = 85;
        config.compress.quality = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::QualityOutOfRange {
            field: "compress",
            value: 150,
        };
        assert_eq!(err.to_string(), "compress quality must be within 1-100, got 150");
    }
}
