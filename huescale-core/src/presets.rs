//! Preset color scales.

use std::fmt;
use std::str::FromStr;

use crate::color::RgbFormat;
use crate::error::Error;
use crate::input::{NormalizeMode, ScalarInput};
use crate::legend::{legend, LegendEntry};
use crate::scale::{Boundary, ColorScale, ColorStop, Curve, Domain};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static HEATMAP_STOPS: [ColorStop; 3] = [
    ColorStop::at(0.0, 10, 20, 120),
    ColorStop::at(0.5, 130, 65, 160),
    ColorStop::at(1.0, 255, 165, 0),
];

/// Dark blue through purple to bright orange, sampled in 11 steps.
pub static HEATMAP: ColorScale = ColorScale::new(&HEATMAP_STOPS);

static STEPPED_HEATMAP_STOPS: [ColorStop; 7] = [
    ColorStop::new(0, 0, 100),
    ColorStop::new(30, 60, 150),
    ColorStop::new(70, 90, 180),
    ColorStop::new(120, 120, 190),
    ColorStop::new(170, 110, 130),
    ColorStop::new(215, 130, 80),
    ColorStop::new(255, 165, 0),
];

/// Seven evenly spaced stops from dark blue to bright orange, sampled in 11 steps.
pub static STEPPED_HEATMAP: ColorScale = ColorScale::new(&STEPPED_HEATMAP_STOPS);

static RED_YELLOW_GREEN_STOPS: [ColorStop; 3] = [
    ColorStop::at(0.0, 255, 0, 0),
    ColorStop::at(59.0, 255, 255, 0),
    ColorStop::at(100.0, 0, 255, 0),
];

/// Red at 0 %, yellow at 59 %, green at 100 %.
pub static RED_YELLOW_GREEN: ColorScale = ColorScale::new(&RED_YELLOW_GREEN_STOPS)
    .with_domain(Domain::Percent)
    .with_mode(NormalizeMode::Percentage);

static SUNSET_STOPS: [ColorStop; 4] = [
    ColorStop::at(0.0, 75, 0, 130),
    ColorStop::at(33.0, 255, 20, 147),
    ColorStop::at(66.0, 255, 165, 0),
    ColorStop::at(100.0, 255, 255, 0),
];

/// Dark purple, deep pink, orange, bright yellow at 0/33/66/100 %.
pub static SUNSET: ColorScale = ColorScale::new(&SUNSET_STOPS)
    .with_domain(Domain::Percent)
    .with_boundary(Boundary::Lower)
    .with_mode(NormalizeMode::Percentage);

static PEACOCK_MINT_STOPS: [ColorStop; 2] = [
    ColorStop::at(0.0, 0, 95, 105),
    ColorStop::at(100.0, 79, 255, 176),
];

/// Peacock blue to bright mint.
pub static PEACOCK_MINT: ColorScale = ColorScale::new(&PEACOCK_MINT_STOPS)
    .with_domain(Domain::Percent)
    .with_mode(NormalizeMode::Percentage);

static CHAMBRAY_STOPS: [ColorStop; 3] = [
    ColorStop::at(0.0, 48, 89, 138),
    ColorStop::at(50.0, 0, 102, 255),
    ColorStop::at(100.0, 227, 247, 250),
];

/// Chambray through sky blue to white ice.
pub static CHAMBRAY: ColorScale = ColorScale::new(&CHAMBRAY_STOPS)
    .with_domain(Domain::Percent)
    .with_boundary(Boundary::Lower)
    .with_mode(NormalizeMode::Percentage)
    .with_format(RgbFormat::Compact);

static DEEP_SEA_CURVES: [Curve; 2] = [Curve::Power(1.2), Curve::Power(0.8)];

static DEEP_SEA_STOPS: [ColorStop; 3] = [
    ColorStop::at(0.0, 7, 71, 133),
    ColorStop::at(50.0, 32, 135, 185),
    ColorStop::at(100.0, 116, 197, 209),
];

/// Deep blue to light teal; eases in below 50 % and out above.
pub static DEEP_SEA: ColorScale = ColorScale::new(&DEEP_SEA_STOPS)
    .with_curves(&DEEP_SEA_CURVES)
    .with_domain(Domain::Percent)
    .with_boundary(Boundary::Lower)
    .with_mode(NormalizeMode::Percentage)
    .with_format(RgbFormat::Compact);

/// Identifier of a preset scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScaleId {
    Heatmap,
    SteppedHeatmap,
    RedYellowGreen,
    Sunset,
    PeacockMint,
    Chambray,
    DeepSea,
}

impl ScaleId {
    /// Every preset, in display order.
    pub const ALL: [ScaleId; 7] = [
        ScaleId::Heatmap,
        ScaleId::SteppedHeatmap,
        ScaleId::RedYellowGreen,
        ScaleId::Sunset,
        ScaleId::PeacockMint,
        ScaleId::Chambray,
        ScaleId::DeepSea,
    ];

    /// Returns the kebab-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ScaleId::Heatmap => "heatmap",
            ScaleId::SteppedHeatmap => "stepped-heatmap",
            ScaleId::RedYellowGreen => "red-yellow-green",
            ScaleId::Sunset => "sunset",
            ScaleId::PeacockMint => "peacock-mint",
            ScaleId::Chambray => "chambray",
            ScaleId::DeepSea => "deep-sea",
        }
    }

    /// Returns the scale definition.
    #[must_use]
    pub fn scale(self) -> &'static ColorScale {
        match self {
            ScaleId::Heatmap => &HEATMAP,
            ScaleId::SteppedHeatmap => &STEPPED_HEATMAP,
            ScaleId::RedYellowGreen => &RED_YELLOW_GREEN,
            ScaleId::Sunset => &SUNSET,
            ScaleId::PeacockMint => &PEACOCK_MINT,
            ScaleId::Chambray => &CHAMBRAY,
            ScaleId::DeepSea => &DEEP_SEA,
        }
    }

    /// Returns the low, middle and high legend entries.
    #[must_use]
    pub fn legend(self) -> &'static [LegendEntry; 3] {
        legend(self)
    }

    /// Renders a raw input through this preset.
    #[must_use]
    pub fn render<'a>(self, input: impl Into<ScalarInput<'a>>) -> String {
        self.scale().render(input)
    }
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ScaleId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownScale(s.to_string()))
    }
}
