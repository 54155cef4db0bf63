//! Render configuration.

use crate::color::RgbFormat;
use crate::input::NormalizeMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Overrides applied when rendering a raw input through a scale.
///
/// Unset fields fall back to the scale's own mode and format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Normalization mode; `None` keeps the scale's native mode.
    pub mode: Option<NormalizeMode>,
    /// Output format; `None` keeps the scale's native format.
    pub format: Option<RgbFormat>,
}

impl RenderConfig {
    /// Creates a configuration with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the normalization mode.
    #[must_use]
    pub fn with_mode(mut self, mode: NormalizeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: RgbFormat) -> Self {
        self.format = Some(format);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = RenderConfig::new();
        assert_eq!(config.mode, None);
        assert_eq!(config.format, None);

        let config = config
            .with_mode(NormalizeMode::Step)
            .with_format(RgbFormat::Compact);
        assert_eq!(config.mode, Some(NormalizeMode::Step));
        assert_eq!(config.format, Some(RgbFormat::Compact));
    }
}
