//! Human-readable size summaries.
//!
//! Sizes are shown in KB (1024 bytes) with one decimal, and the output is
//! compared to the originally selected file as a percentage with one
//! decimal. Rounding follows `Number.toFixed`: the exact binary value is
//! rounded to the nearest tenth, and exact ties go up.

use std::fmt;

use serde::Serialize;

use crate::params::Mode;

/// Label for the original file line.
pub const ORIGINAL_LABEL: &str = "元画像";
/// Label for compress output.
pub const COMPRESS_LABEL: &str = "圧縮後";
/// Label for card output.
pub const CARD_LABEL: &str = "トレカ画像";

/// Size of an encoded result relative to the original file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeReport {
    pub mode: Mode,
    pub output_bytes: u64,
    pub original_bytes: u64,
}

impl SizeReport {
    pub fn new(mode: Mode, output_bytes: u64, original_bytes: u64) -> Self {
        Self {
            mode,
            output_bytes,
            original_bytes,
        }
    }

    /// `100 * output / original`; 0 when the original size is unknown.
    pub fn percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.original_bytes as f64 * 100.0
    }

    /// Output size in KB, one decimal.
    pub fn output_kb(&self) -> String {
        kilobytes(self.output_bytes)
    }

    /// The summary line shown under the preview.
    pub fn summary(&self) -> String {
        let kb = self.output_kb();
        let percent = fixed1(self.percent());
        match self.mode {
            Mode::Compress => format!("{COMPRESS_LABEL}: {kb} KB（{percent}%）"),
            Mode::Card => format!("{CARD_LABEL}: {kb} KB（元の {percent}%）"),
        }
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// The line describing the selected file, e.g. `元画像: 512.0 KB`.
pub fn original_summary(original_bytes: u64) -> String {
    format!("{ORIGINAL_LABEL}: {} KB", kilobytes(original_bytes))
}

/// Bytes as KB with one decimal.
pub fn kilobytes(bytes: u64) -> String {
    fixed1(bytes as f64 / 1024.0)
}

// `{:.1}` rounds the exact value but sends ties to even. A tenth-tie is
// only representable when `4 * value` is an odd integer.
fn fixed1(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilobytes() {
        assert_eq!(kilobytes(0), "0.0");
        assert_eq!(kilobytes(1024), "1.0");
        assert_eq!(kilobytes(1536), "1.5");
        // 1280 / 1024 = 1.25 rounds up
        assert_eq!(kilobytes(1280), "1.3");
    }

    #[test]
    fn test_percent() {
        let report = SizeReport::new(Mode::Compress, 250, 1000);
        assert_eq!(report.percent(), 25.0);

        let report = SizeReport::new(Mode::Compress, 1, 3);
        assert!((report.percent() - 33.333).abs() < 0.001);
    }

    #[test]
    fn test_percent_rounds_exact_value() {
        // 3 / 2000 * 100 is stored just below 0.15
        let report = SizeReport::new(Mode::Compress, 3, 2000);
        assert!(report.summary().ends_with("（0.1%）"));
        assert_eq!(fixed1(SizeReport::new(Mode::Compress, 9, 2000).percent()), "0.4");
        assert_eq!(fixed1(SizeReport::new(Mode::Card, 19, 2000).percent()), "0.9");
    }

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(fixed1(0.25), "0.3");
        assert_eq!(fixed1(0.75), "0.8");
        assert_eq!(fixed1(12.25), "12.3");
        assert_eq!(fixed1(0.05), "0.1");
        assert_eq!(fixed1(2.5), "2.5");
    }

    #[test]
    fn test_percent_zero_original() {
        let report = SizeReport::new(Mode::Card, 500, 0);
        assert_eq!(report.percent(), 0.0);
        assert_eq!(report.summary(), "トレカ画像: 0.5 KB（元の 0.0%）");
    }

    #[test]
    fn test_compress_summary() {
        let report = SizeReport::new(Mode::Compress, 102_400, 409_600);
        assert_eq!(report.summary(), "圧縮後: 100.0 KB（25.0%）");
    }

    #[test]
    fn test_card_summary() {
        let report = SizeReport::new(Mode::Card, 51_200, 300_000);
        // 51200 / 300000 = 17.0666...%
        assert_eq!(report.summary(), "トレカ画像: 50.0 KB（元の 17.1%）");
        assert_eq!(report.to_string(), report.summary());
    }

    #[test]
    fn test_output_can_exceed_original() {
        let report = SizeReport::new(Mode::Compress, 3000, 1000);
        assert_eq!(report.summary(), "圧縮後: 2.9 KB（300.0%）");
    }

    #[test]
    fn test_original_summary() {
        assert_eq!(original_summary(524_288), "元画像: 512.0 KB");
    }
}
