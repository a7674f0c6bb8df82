//! Render parameters: output mode and the card pan/zoom sliders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lower bound of the horizontal/vertical offset sliders.
pub const OFFSET_MIN: i32 = -100;
/// Upper bound of the horizontal/vertical offset sliders.
pub const OFFSET_MAX: i32 = 100;
/// Lower bound of the zoom slider (no magnification).
pub const ZOOM_MIN: i32 = 0;
/// Upper bound of the zoom slider (maximum magnification).
pub const ZOOM_MAX: i32 = 100;

/// Which transform the session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Aspect-preserving downscale and re-encode.
    #[default]
    Compress,
    /// Fixed 2:3 bordered crop with pan and zoom.
    Card,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Compress => "compress",
            Mode::Card => "card",
        }
    }

    /// File name offered when the user downloads a result in this mode.
    pub fn download_filename(self) -> &'static str {
        match self {
            Mode::Compress => "compressed.jpg",
            Mode::Card => "oshi-card.jpg",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compress" => Ok(Mode::Compress),
            "card" => Ok(Mode::Card),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Slider positions for card mode.
///
/// Offsets run from -100 (pinned to the left/top edge) through 0 (centered)
/// to 100 (pinned to the right/bottom edge). Zoom runs from 0 (the full
/// base rectangle) to 100 (the base rectangle shrunk by 2.5x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardParams {
    pub offset_x: i32,
    pub offset_y: i32,
    pub zoom: i32,
}

impl CardParams {
    /// Create slider values, clamping each into its domain.
    pub fn new(offset_x: i32, offset_y: i32, zoom: i32) -> Self {
        Self {
            offset_x,
            offset_y,
            zoom,
        }
        .clamped()
    }

    /// Neutral sliders: centered, no zoom.
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    /// Copy with every value clamped into its slider domain.
    pub fn clamped(self) -> Self {
        Self {
            offset_x: self.offset_x.clamp(OFFSET_MIN, OFFSET_MAX),
            offset_y: self.offset_y.clamp(OFFSET_MIN, OFFSET_MAX),
            zoom: self.zoom.clamp(ZOOM_MIN, ZOOM_MAX),
        }
    }

    /// Zoom factor in [1.0, 2.5]: `1 + (zoom / 100) * 1.5`.
    pub fn zoom_factor(&self) -> f64 {
        let zoom = f64::from(self.zoom.clamp(ZOOM_MIN, ZOOM_MAX));
        1.0 + (zoom / 100.0) * 1.5
    }

    /// Horizontal offset normalized to [-1, 1].
    pub fn relative_x(&self) -> f64 {
        f64::from(self.offset_x.clamp(OFFSET_MIN, OFFSET_MAX)) / 100.0
    }

    /// Vertical offset normalized to [-1, 1].
    pub fn relative_y(&self) -> f64 {
        f64::from(self.offset_y.clamp(OFFSET_MIN, OFFSET_MAX)) / 100.0
    }
}

/// Everything a transform needs besides the image itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderParams {
    pub mode: Mode,
    pub card: CardParams,
}

impl RenderParams {
    pub fn compress() -> Self {
        Self {
            mode: Mode::Compress,
            card: CardParams::neutral(),
        }
    }

    pub fn card(card: CardParams) -> Self {
        Self {
            mode: Mode::Card,
            card: card.clamped(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("compress".parse::<Mode>().unwrap(), Mode::Compress);
        assert_eq!(" Card ".parse::<Mode>().unwrap(), Mode::Card);
        assert_eq!(
            "poster".parse::<Mode>().unwrap_err(),
            UnknownMode("poster".to_string())
        );
    }

    #[test]
    fn test_mode_round_trips_through_display() {
        for mode in [Mode::Compress, Mode::Card] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_download_filenames() {
        assert_eq!(Mode::Card.download_filename(), "oshi-card.jpg");
        assert_eq!(Mode::Compress.download_filename(), "compressed.jpg");
    }

    #[test]
    fn test_card_params_clamp() {
        let params = CardParams::new(-250, 101, 400);
        assert_eq!(params, CardParams::new(-100, 100, 100));

        let params = CardParams::new(0, 0, -5);
        assert_eq!(params.zoom, 0);
    }

    #[test]
    fn test_card_params_neutral() {
        assert!(CardParams::neutral().is_neutral());
        assert!(!CardParams::new(0, 0, 1).is_neutral());
    }

    #[test]
    fn test_zoom_factor_range() {
        assert_eq!(CardParams::new(0, 0, 0).zoom_factor(), 1.0);
        assert_eq!(CardParams::new(0, 0, 100).zoom_factor(), 2.5);
        assert!((CardParams::new(0, 0, 50).zoom_factor() - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_relative_offsets() {
        let params = CardParams::new(-100, 50, 0);
        assert_eq!(params.relative_x(), -1.0);
        assert_eq!(params.relative_y(), 0.5);

        // Unclamped field values are still read inside the domain.
        let raw = CardParams {
            offset_x: 900,
            offset_y: -900,
            zoom: 900,
        };
        assert_eq!(raw.relative_x(), 1.0);
        assert_eq!(raw.relative_y(), -1.0);
        assert_eq!(raw.zoom_factor(), 2.5);
    }

    #[test]
    fn test_render_params_card_clamps() {
        let params = RenderParams::card(CardParams {
            offset_x: 1000,
            offset_y: 0,
            zoom: 0,
        });
        assert_eq!(params.mode, Mode::Card);
        assert_eq!(params.card.offset_x, 100);
    }
}
