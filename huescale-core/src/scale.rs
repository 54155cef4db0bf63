//! Piecewise color scales and the interpolation engine.
//!
//! A [`ColorScale`] is an ordered list of [`ColorStop`]s. Sampling it locates
//! the segment between two adjacent stops, shapes the position inside that
//! segment with the segment's [`Curve`], and blends the two endpoint colors
//! channel by channel.

use crate::color::{Rgb, RgbFormat};
use crate::config::RenderConfig;
use crate::input::{normalize, NormalizeMode, NormalizedScalar, ScalarInput};

/// An anchor color on a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Color at this stop.
    pub color: Rgb,
    /// Position in the scale's [`Domain`]; `None` for evenly spaced stops.
    pub position: Option<f64>,
}

impl ColorStop {
    /// A stop that takes its position from even spacing.
    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self {
            color: Rgb::new(r, g, b),
            position: None,
        }
    }

    /// A stop pinned to `position`, expressed in the scale's domain.
    #[must_use]
    pub const fn at(position: f64, r: i32, g: i32, b: i32) -> Self {
        Self {
            color: Rgb::new(r, g, b),
            position: Some(position),
        }
    }
}

/// Shaping applied to the local blend factor within one segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Curve {
    /// Straight-line blend.
    #[default]
    Linear,
    /// `t.powf(exponent)`: exponents above 1 ease in, below 1 ease out.
    Power(f64),
}

impl Curve {
    /// Shapes a local segment position.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Curve::Linear => t,
            Curve::Power(exponent) => t.powf(exponent),
        }
    }
}

/// Units in which stop positions are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Domain {
    /// Positions in `[0, 1]`.
    #[default]
    Unit,
    /// Positions in `[0, 100]`.
    Percent,
}

impl Domain {
    /// Length of the domain.
    #[must_use]
    pub fn span(self) -> f64 {
        match self {
            Domain::Unit => 1.0,
            Domain::Percent => 100.0,
        }
    }
}

/// Which segment owns a value that sits exactly on an interior stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// The stop opens the following segment (`x < upper` stays below).
    #[default]
    Upper,
    /// The stop closes the preceding segment (`x <= upper` stays below).
    Lower,
}

/// An immutable piecewise color scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    stops: &'static [ColorStop],
    curves: &'static [Curve],
    domain: Domain,
    boundary: Boundary,
    mode: NormalizeMode,
    format: RgbFormat,
}

impl ColorScale {
    /// Creates a linear scale over unit-domain stops, normalized by step
    /// and rendered in the spaced format.
    #[must_use]
    pub const fn new(stops: &'static [ColorStop]) -> Self {
        Self {
            stops,
            curves: &[],
            domain: Domain::Unit,
            boundary: Boundary::Upper,
            mode: NormalizeMode::Step,
            format: RgbFormat::Spaced,
        }
    }

    /// Sets per-segment curves; segments past the end of `curves` are linear.
    #[must_use]
    pub const fn with_curves(mut self, curves: &'static [Curve]) -> Self {
        self.curves = curves;
        self
    }

    /// Sets the domain stop positions are written in.
    #[must_use]
    pub const fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Sets the tie-break for values on interior stops.
    #[must_use]
    pub const fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets how raw inputs are normalized by [`ColorScale::render`].
    #[must_use]
    pub const fn with_mode(mut self, mode: NormalizeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the output format used by [`ColorScale::render`].
    #[must_use]
    pub const fn with_format(mut self, format: RgbFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the stops.
    #[must_use]
    pub fn stops(&self) -> &'static [ColorStop] {
        self.stops
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Returns the curve of segment `index`.
    #[must_use]
    pub fn curve(&self, index: usize) -> Curve {
        self.curves.get(index).copied().unwrap_or_default()
    }

    /// Returns the position domain.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the interior-stop tie-break.
    #[must_use]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Returns the native normalization mode.
    #[must_use]
    pub fn mode(&self) -> NormalizeMode {
        self.mode
    }

    /// Returns the native output format.
    #[must_use]
    pub fn format(&self) -> RgbFormat {
        self.format
    }

    /// Returns the position of stop `index` in domain units.
    ///
    /// Stops without an explicit position are evenly spaced.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self, index: usize) -> f64 {
        match self.stops.get(index).and_then(|s| s.position) {
            Some(p) => p,
            None => {
                let segments = self.segment_count().max(1) as f64;
                self.domain.span() * index as f64 / segments
            }
        }
    }

    /// Samples the scale at a fraction of its length.
    ///
    /// Values outside `[0, 1]` are not clamped and extrapolate past the
    /// first or last stop.
    #[must_use]
    pub fn color_at(&self, fraction: f64) -> Rgb {
        let x = match self.domain {
            Domain::Unit => fraction,
            Domain::Percent => fraction * 100.0,
        };
        self.locate(x)
    }

    /// Samples the scale at a percentage of its length.
    ///
    /// Values outside `[0, 100]` are not clamped and extrapolate.
    #[must_use]
    pub fn color_at_percent(&self, percent: f64) -> Rgb {
        let x = match self.domain {
            Domain::Unit => percent / 100.0,
            Domain::Percent => percent,
        };
        self.locate(x)
    }

    /// Samples the scale at a normalized scalar.
    #[must_use]
    pub fn sample(&self, scalar: NormalizedScalar) -> Rgb {
        match scalar {
            NormalizedScalar::Step(_) => self.color_at(scalar.fraction()),
            NormalizedScalar::Percentage(pct) => self.color_at_percent(pct),
        }
    }

    /// Normalizes `input` with the native mode and renders it in the native format.
    ///
    /// # Examples
    ///
    /// ```
    /// use huescale_core::RED_YELLOW_GREEN;
    ///
    /// assert_eq!(RED_YELLOW_GREEN.render("59%"), "rgb(255, 255, 0)");
    /// ```
    #[must_use]
    pub fn render<'a>(&self, input: impl Into<ScalarInput<'a>>) -> String {
        self.render_with(input, &RenderConfig::default())
    }

    /// Like [`ColorScale::render`], with the mode and format overridable.
    #[must_use]
    pub fn render_with<'a>(
        &self,
        input: impl Into<ScalarInput<'a>>,
        config: &RenderConfig,
    ) -> String {
        let scalar = normalize(input, config.mode.unwrap_or(self.mode));
        self.sample(scalar).css(config.format.unwrap_or(self.format))
    }

    /// Finds the active segment for `x` (domain units) and blends across it.
    fn locate(&self, x: f64) -> Rgb {
        match self.stops {
            [] => return Rgb::default(),
            [only] => return only.color,
            _ => {}
        }

        let (index, local) = if self.stops.iter().all(|s| s.position.is_none()) {
            self.even_segment(x)
        } else {
            self.positioned_segment(x)
        };

        let factor = self.curve(index).apply(local);
        log::trace!("x={x} segment={index} local={local} factor={factor}");
        self.stops[index].color.blend(self.stops[index + 1].color, factor)
    }

    /// Segment lookup for evenly spaced stops: `floor(x * n)` clamped to the last segment.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn even_segment(&self, x: f64) -> (usize, f64) {
        let segments = self.segment_count();
        let position = x / self.domain.span() * segments as f64;
        let floor = position.floor();
        let index = if floor.is_nan() || floor <= 0.0 {
            0
        } else {
            (floor as usize).min(segments - 1)
        };
        (index, position - index as f64)
    }

    /// Segment lookup for explicitly positioned stops.
    fn positioned_segment(&self, x: f64) -> (usize, f64) {
        let last = self.segment_count() - 1;
        let index = (0..last)
            .find(|&i| {
                let upper = self.position(i + 1);
                match self.boundary {
                    Boundary::Upper => x < upper,
                    Boundary::Lower => x <= upper,
                }
            })
            .unwrap_or(last);

        let lower = self.position(index);
        let upper = self.position(index + 1);
        (index, (x - lower) / (upper - lower))
    }
}
