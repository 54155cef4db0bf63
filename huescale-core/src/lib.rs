//! huescale-core: Color scales for mapping percentages to RGB.
//!
//! This crate provides the normalizer that turns numbers or percentage text
//! into a clamped scalar, the piecewise interpolation engine, the preset
//! scales, and the legend metadata that accompanies them.
//!

pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod legend;
pub mod presets;
pub mod scale;

pub use color::{Rgb, RgbFormat};
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use input::{normalize, NormalizeMode, NormalizedScalar, ScalarInput};
pub use legend::{legend, LegendEntry};
pub use presets::{
    ScaleId, CHAMBRAY, DEEP_SEA, HEATMAP, PEACOCK_MINT, RED_YELLOW_GREEN, STEPPED_HEATMAP, SUNSET,
};
pub use scale::{Boundary, ColorScale, ColorStop, Curve, Domain};
