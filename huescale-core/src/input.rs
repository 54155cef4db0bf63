//! Raw scalar inputs and the normalizer.
//!
//! Inputs arrive either as numbers or as percentage-bearing text such as
//! `"59%"`. Normalization never fails: anything that does not yield a finite
//! number is treated as 0.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A raw measurement as handed to the normalizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarInput<'a> {
    /// A numeric value, expected on a 0-100 scale.
    Number(f64),
    /// Text with a leading numeric run, e.g. `"59"`, `"59%"` or `"59 units"`.
    Text(&'a str),
    /// Anything that is neither a number nor text.
    Missing,
}

impl ScalarInput<'_> {
    /// Returns the raw value carried by this input, or 0 when none can be read.
    #[must_use]
    pub fn value(self) -> f64 {
        let raw = match self {
            ScalarInput::Number(v) => Some(v),
            ScalarInput::Text(text) => leading_number(text),
            ScalarInput::Missing => None,
        };

        match raw {
            Some(v) if v.is_finite() => v,
            _ => {
                log::debug!("no finite value in {self:?}, defaulting to 0");
                0.0
            }
        }
    }
}

impl From<f64> for ScalarInput<'_> {
    fn from(value: f64) -> Self {
        ScalarInput::Number(value)
    }
}

impl From<f32> for ScalarInput<'_> {
    fn from(value: f32) -> Self {
        ScalarInput::Number(f64::from(value))
    }
}

impl From<i32> for ScalarInput<'_> {
    fn from(value: i32) -> Self {
        ScalarInput::Number(f64::from(value))
    }
}

impl From<u32> for ScalarInput<'_> {
    fn from(value: u32) -> Self {
        ScalarInput::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for ScalarInput<'a> {
    fn from(text: &'a str) -> Self {
        ScalarInput::Text(text)
    }
}

impl<'a> From<&'a String> for ScalarInput<'a> {
    fn from(text: &'a String) -> Self {
        ScalarInput::Text(text.as_str())
    }
}

impl<'a, T: Into<ScalarInput<'a>>> From<Option<T>> for ScalarInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ScalarInput::Missing, Into::into)
    }
}

/// Parses the longest leading decimal literal of `text`.
///
/// Leading whitespace is skipped; whatever follows the literal (a `%` sign,
/// units, garbage) is ignored. Returns `None` when no digits are found.
fn leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_start = end + 1 + sign;
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Which representation the normalizer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NormalizeMode {
    /// Coarse index in `0..=10`: the value divided by 10 and rounded.
    Step,
    /// The value itself, clamped to `[0, 100]`.
    #[default]
    Percentage,
}

/// Output of [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "mode", content = "value", rename_all = "lowercase")
)]
pub enum NormalizedScalar {
    /// Step index in `0..=10`.
    Step(u8),
    /// Percentage in `[0, 100]`.
    Percentage(f64),
}

impl NormalizedScalar {
    /// Position along a gradient in `[0, 1]`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        match self {
            NormalizedScalar::Step(step) => f64::from(step) / 10.0,
            NormalizedScalar::Percentage(pct) => pct / 100.0,
        }
    }

    /// Position along a gradient in `[0, 100]`.
    #[must_use]
    pub fn percent(self) -> f64 {
        match self {
            NormalizedScalar::Step(step) => f64::from(step) * 10.0,
            NormalizedScalar::Percentage(pct) => pct,
        }
    }

    /// The mode this scalar was produced under.
    #[must_use]
    pub fn mode(self) -> NormalizeMode {
        match self {
            NormalizedScalar::Step(_) => NormalizeMode::Step,
            NormalizedScalar::Percentage(_) => NormalizeMode::Percentage,
        }
    }
}

impl std::fmt::Display for NormalizedScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizedScalar::Step(step) => write!(f, "step {step}"),
            NormalizedScalar::Percentage(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Normalizes a raw input into a step index or a clamped percentage.
///
/// Both modes clamp, so callers never need to guard the result before
/// handing it to a scale.
///
/// # Examples
///
/// ```
/// use huescale_core::{normalize, NormalizeMode, NormalizedScalar};
///
/// assert_eq!(normalize("59%", NormalizeMode::Step), NormalizedScalar::Step(6));
/// assert_eq!(normalize(-5.0, NormalizeMode::Percentage), NormalizedScalar::Percentage(0.0));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn normalize<'a>(input: impl Into<ScalarInput<'a>>, mode: NormalizeMode) -> NormalizedScalar {
    let value = input.into().value();
    match mode {
        NormalizeMode::Step => {
            let step = (value / 10.0).round().clamp(0.0, 10.0);
            NormalizedScalar::Step(step as u8)
        }
        NormalizeMode::Percentage => NormalizedScalar::Percentage(value.clamp(0.0, 100.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("59"), Some(59.0));
        assert_eq!(leading_number("59%"), Some(59.0));
        assert_eq!(leading_number("  12.5 % charged"), Some(12.5));
        assert_eq!(leading_number("-.5"), Some(-0.5));
        assert_eq!(leading_number("5."), Some(5.0));
        assert_eq!(leading_number("1e2%"), Some(100.0));
        assert_eq!(leading_number("7e"), Some(7.0));
        assert_eq!(leading_number("3e+"), Some(3.0));
        assert_eq!(leading_number("abc"), None);
        assert_eq!(leading_number("%50"), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn test_fallback_to_zero() {
        assert!(ScalarInput::Missing.value().abs() < f64::EPSILON);
        assert!(ScalarInput::Number(f64::NAN).value().abs() < f64::EPSILON);
        assert!(ScalarInput::Number(f64::INFINITY).value().abs() < f64::EPSILON);
        assert!(ScalarInput::Text("1e999").value().abs() < f64::EPSILON);
        assert!(ScalarInput::Text("n/a").value().abs() < f64::EPSILON);
        assert_eq!(ScalarInput::from(None::<f64>), ScalarInput::Missing);
    }

    #[test]
    fn test_step_rounding() {
        assert_eq!(normalize(44.9, NormalizeMode::Step), NormalizedScalar::Step(4));
        assert_eq!(normalize(45.0, NormalizeMode::Step), NormalizedScalar::Step(5));
        assert_eq!(normalize("95%", NormalizeMode::Step), NormalizedScalar::Step(10));
        assert_eq!(normalize(1000, NormalizeMode::Step), NormalizedScalar::Step(10));
    }

    #[test]
    fn test_percentage_clamps() {
        assert_eq!(
            normalize(150, NormalizeMode::Percentage),
            NormalizedScalar::Percentage(100.0)
        );
        assert_eq!(
            normalize("42.25%", NormalizeMode::Percentage),
            NormalizedScalar::Percentage(42.25)
        );
    }

    #[test]
    fn test_scalar_views() {
        let step = NormalizedScalar::Step(7);
        assert!((step.fraction() - 0.7).abs() < 1e-12);
        assert!((step.percent() - 70.0).abs() < 1e-12);
        assert_eq!(step.mode(), NormalizeMode::Step);
        assert_eq!(step.to_string(), "step 7");

        let pct = NormalizedScalar::Percentage(25.0);
        assert!((pct.fraction() - 0.25).abs() < 1e-12);
        assert_eq!(pct.to_string(), "25%");
    }
}
