//! Renderer tuning knobs.
//!
//! The pixel constants below were tuned against SVG sub-pixel rounding in
//! browsers. A different drawing surface may need different values, so they
//! are carried in a config rather than hard-coded into the engine.

use serde::Deserialize;

use crate::error::Result;

/// Shift applied to every corner so a border overlaps the preceding cell's border.
pub const OFFSET_TO_OVERLAP_PRECEDING_BORDER: f64 = -1.0;

/// Extra top/left inset for the current-cell highlight so it nests inside the cell.
pub const INSET_FOR_CURRENT_CELL_HIGHLIGHT: f64 = 1.0;

/// Added to the furthest right/bottom reach so the last edge is not clipped.
pub const MARGIN_FOR_SAFE_RENDERING_OF_RIGHT_BOTTOM_EDGE: f64 = 1.0;

/// Stacking order of the overlay relative to the grid.
pub const DEFAULT_Z_INDEX: i32 = 5;

/// Configuration for [`crate::render::BorderRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BorderRendererConfig {
    /// Offset added to both corners after the origin is subtracted.
    pub overlap_bias: f64,
    /// Top/left inset for [`crate::types::StrokeKind::CurrentHighlight`].
    pub current_inset: f64,
    /// Margin added to the render extent on both axes.
    pub safety_margin: f64,
    /// CSS z-index of the overlay (DOM surface only).
    pub z_index: i32,
}

impl Default for BorderRendererConfig {
    fn default() -> Self {
        Self {
            overlap_bias: OFFSET_TO_OVERLAP_PRECEDING_BORDER,
            current_inset: INSET_FOR_CURRENT_CELL_HIGHLIGHT,
            safety_margin: MARGIN_FOR_SAFE_RENDERING_OF_RIGHT_BOTTOM_EDGE,
            z_index: DEFAULT_Z_INDEX,
        }
    }
}

impl BorderRendererConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`crate::BorderError::Config`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_constants() {
        let config = BorderRendererConfig::default();
        assert_eq!(config.overlap_bias, -1.0);
        assert_eq!(config.current_inset, 1.0);
        assert_eq!(config.safety_margin, 1.0);
        assert_eq!(config.z_index, 5);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = BorderRendererConfig::from_json(r#"{"overlap_bias": -0.5}"#).unwrap();
        assert_eq!(config.overlap_bias, -0.5);
        assert_eq!(config.current_inset, 1.0);
        assert_eq!(config.z_index, 5);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = BorderRendererConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::BorderError::Config(_)));
    }
}
