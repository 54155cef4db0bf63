//! Legend metadata for the preset scales.
//!
//! Each preset has three entries naming its low (0 %), middle (50 %) and
//! high (100 %) colors. This is data only: locating and updating whatever
//! displays the legend is left to the caller.

use crate::color::Rgb;
use crate::error::Result;
use crate::presets::ScaleId;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One labelled swatch of a legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LegendEntry {
    /// Human-readable color name.
    pub name: &'static str,
    /// Background color as an `rgb(...)` string.
    pub rgb: &'static str,
    /// Contrasting text color, when one is specified.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub color: Option<&'static str>,
}

impl LegendEntry {
    const fn new(name: &'static str, rgb: &'static str, color: Option<&'static str>) -> Self {
        Self { name, rgb, color }
    }

    /// Parses the background color.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidColor`] if `rgb` is malformed.
    pub fn swatch(&self) -> Result<Rgb> {
        self.rgb.parse()
    }
}

const WHITE: Option<&str> = Some("white");
const BLACK: Option<&str> = Some("black");

static HEATMAP: [LegendEntry; 3] = [
    LegendEntry::new("dark blue", "rgb(10, 20, 120)", WHITE),
    LegendEntry::new("purple", "rgb(130, 65, 160)", WHITE),
    LegendEntry::new("bright orange", "rgb(255, 165, 0)", BLACK),
];

static STEPPED_HEATMAP: [LegendEntry; 3] = [
    LegendEntry::new("dark blue", "rgb(0, 0, 100)", WHITE),
    LegendEntry::new("light mauve", "rgb(120, 120, 190)", WHITE),
    LegendEntry::new("bright orange", "rgb(255, 165, 0)", BLACK),
];

static RED_YELLOW_GREEN: [LegendEntry; 3] = [
    LegendEntry::new("red", "rgb(255,0,0)", WHITE),
    LegendEntry::new("yellow", "rgb(255,216,0)", BLACK),
    LegendEntry::new("green", "rgb(0,255,0)", BLACK),
];

static SUNSET: [LegendEntry; 3] = [
    LegendEntry::new("violet", "rgb(75, 0, 130)", WHITE),
    LegendEntry::new("pink orange", "rgb(255, 95, 71)", None),
    LegendEntry::new("yellow", "rgb(255,255,0)", None),
];

static PEACOCK_MINT: [LegendEntry; 3] = [
    LegendEntry::new("peacock blue", "rgb(0, 95, 105)", WHITE),
    LegendEntry::new("turquoise", "rgb(40, 175, 141)", WHITE),
    LegendEntry::new("bright mint", "rgb(79, 255, 176)", BLACK),
];

static CHAMBRAY: [LegendEntry; 3] = [
    LegendEntry::new("chambray", "rgb(48, 89, 138)", WHITE),
    LegendEntry::new("sky blue", "rgb(0,102,255)", WHITE),
    LegendEntry::new("white ice", "rgb(227,247,250)", BLACK),
];

static DEEP_SEA: [LegendEntry; 3] = [
    LegendEntry::new("dark blue", "rgb(7, 71, 133)", WHITE),
    LegendEntry::new("sea blue", "rgb(32, 135, 185)", WHITE),
    LegendEntry::new("clear sky", "rgb(116, 197, 209)", BLACK),
];

/// Returns the low, middle and high legend entries of a preset.
#[must_use]
pub fn legend(id: ScaleId) -> &'static [LegendEntry; 3] {
    match id {
        ScaleId::Heatmap => &HEATMAP,
        ScaleId::SteppedHeatmap => &STEPPED_HEATMAP,
        ScaleId::RedYellowGreen => &RED_YELLOW_GREEN,
        ScaleId::Sunset => &SUNSET,
        ScaleId::PeacockMint => &PEACOCK_MINT,
        ScaleId::Chambray => &CHAMBRAY,
        ScaleId::DeepSea => &DEEP_SEA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_swatch_parses() {
        for id in ScaleId::ALL {
            for entry in legend(id) {
                assert!(entry.swatch().is_ok(), "{id}: {}", entry.rgb);
            }
        }
    }

    #[test]
    fn test_missing_text_color_is_preserved() {
        let sunset = legend(ScaleId::Sunset);
        assert_eq!(sunset[0].color, Some("white"));
        assert_eq!(sunset[1].color, None);
        assert_eq!(sunset[2].color, None);
    }
}
