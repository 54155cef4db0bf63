//! RGB triples and their `rgb(...)` text form.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGB color produced by the interpolation engine.
///
/// Channels are conceptually in `[0, 255]` but are not clamped: stops or
/// factors outside their nominal range yield out-of-range channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    /// Creates a color from its three channels.
    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Blends towards `other` by `factor`, rounding each channel to nearest.
    ///
    /// `factor` is not clamped; values outside `[0, 1]` extrapolate.
    #[must_use]
    pub fn blend(self, other: Rgb, factor: f64) -> Rgb {
        let mix = |a: i32, b: i32| {
            let a = f64::from(a);
            round_channel(a + factor * (f64::from(b) - a))
        };

        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Formats the color as an `rgb(...)` string in the given style.
    #[must_use]
    pub fn css(self, format: RgbFormat) -> String {
        match format {
            RgbFormat::Spaced => format!("rgb({}, {}, {})", self.r, self.g, self.b),
            RgbFormat::Compact => format!("rgb({},{},{})", self.r, self.g, self.b),
        }
    }
}

/// Rounds half away from zero; NaN maps to 0.
#[allow(clippy::cast_possible_truncation)]
fn round_channel(value: f64) -> i32 {
    value.round() as i32
}

impl From<[i32; 3]> for Rgb {
    fn from([r, g, b]: [i32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [i32; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Spacing style of the `rgb(...)` text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RgbFormat {
    /// `rgb(r, g, b)`
    #[default]
    Spaced,
    /// `rgb(r,g,b)`
    Compact,
}

/// Parse an `rgb(r,g,b)` color string.
///
/// Whitespace around the channels is ignored, so both the spaced and the
/// compact form are accepted. Channels may be any integer.
fn parse_rgb(s: &str) -> Result<Rgb> {
    let invalid = |reason| Error::InvalidColor {
        input: s.to_string(),
        reason,
    };

    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty color string"));
    }

    let lower = trimmed.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgb(")
        .and_then(|x| x.strip_suffix(')'))
        .ok_or_else(|| invalid("expected rgb(r, g, b)"))?;

    let channels = args
        .split(',')
        .map(|t| t.trim().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| invalid("channel is not an integer"))?;

    match channels[..] {
        [r, g, b] => Ok(Rgb::new(r, g, b)),
        _ => Err(invalid("expected three channels")),
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_rgb(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        parse_rgb(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Rgb::new(10, 20, 120);
        let b = Rgb::new(130, 65, 160);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
        assert_eq!(a.blend(b, 0.5), Rgb::new(70, 43, 140));
    }

    #[test]
    fn test_blend_rounds_half_away_from_zero() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, -255, 1);
        assert_eq!(a.blend(b, 0.5), Rgb::new(128, -128, 1));
    }

    #[test]
    fn test_blend_extrapolates() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(100, 100, 250);
        assert_eq!(a.blend(b, 2.0), Rgb::new(200, 100, 300));
        assert_eq!(a.blend(b, -1.0), Rgb::new(-100, 100, 150));
    }

    #[test]
    fn test_css_formats() {
        let c = Rgb::new(255, 95, 71);
        assert_eq!(c.css(RgbFormat::Spaced), "rgb(255, 95, 71)");
        assert_eq!(c.css(RgbFormat::Compact), "rgb(255,95,71)");
        assert_eq!(c.to_string(), "rgb(255, 95, 71)");
    }

    #[test]
    fn test_parse() {
        assert_eq!("rgb(255, 95, 71)".parse::<Rgb>(), Ok(Rgb::new(255, 95, 71)));
        assert_eq!(Rgb::try_from(" RGB(0,102,255) "), Ok(Rgb::new(0, 102, 255)));
        assert_eq!("rgb(-3, 300, 0)".parse::<Rgb>(), Ok(Rgb::new(-3, 300, 0)));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "   ", "#ff0000", "rgb(1,2)", "rgb(1,2,3,4)", "rgb(1,x,3)", "rgb(1,2,3"] {
            assert!(
                matches!(bad.parse::<Rgb>(), Err(Error::InvalidColor { .. })),
                "{bad:?} should not parse"
            );
        }
    }
}
