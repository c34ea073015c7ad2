//! Presentation constants for the heat map.
//!
//! Every value here is fixed configuration, never derived from the data.
//! `ChartConfig::default()` is the chart as published; `from_json` accepts a
//! partial document and fills the rest from the defaults.

use crate::dataset::DATASET_URL;
use crate::error::{HeatMapError, Result};
use serde::{Deserialize, Serialize};

/// Cool to warm, one color per bucket.
pub const BUCKET_COLORS: [&str; 6] = [
    "#55CCFF", "#77CCCC", "#99CC99", "#BBCC66", "#DDCC33", "#FFCC00",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 80.0,
            bottom: 40.0,
            left: 120.0,
            right: 180.0,
        }
    }
}

/// Geometry of the color legend strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 20.0,
            margin: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipConfig {
    pub line_height: f64,
    pub padding: f64,
    /// Approximate glyph width used to size the box from the longest line.
    pub char_width: f64,
    /// Vertical distance between consecutive text baselines.
    pub line_spacing: f64,
    /// How many years to the right of the hovered cell the tooltip sits.
    pub year_offset: i32,
    pub fill: String,
    pub opacity: f64,
    pub highlight_stroke: String,
    pub highlight_stroke_width: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            line_height: 14.0,
            padding: 5.0,
            char_width: 8.0,
            line_spacing: 16.0,
            year_offset: 10,
            fill: "lightgrey".to_string(),
            opacity: 0.8,
            highlight_stroke: "red".to_string(),
            highlight_stroke_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub dataset_url: String,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub legend: LegendConfig,
    pub colors: Vec<String>,
    pub tooltip: TooltipConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dataset_url: DATASET_URL.to_string(),
            width: 1440.0,
            height: 580.0,
            margin: Margin::default(),
            legend: LegendConfig::default(),
            colors: BUCKET_COLORS.iter().map(|c| c.to_string()).collect(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Parse a (possibly partial) config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ChartConfig = serde_json::from_str(json)?;
        if config.colors.is_empty() {
            return Err(HeatMapError::InvalidFormat(
                "config needs at least one bucket color".to_string(),
            ));
        }
        if config.plot_width() <= 0.0 || config.plot_height() <= 0.0 {
            return Err(HeatMapError::InvalidFormat(format!(
                "margins leave no plot area in a {}x{} chart",
                config.width, config.height
            )));
        }
        Ok(config)
    }

    /// Horizontal pixel range for the year axis.
    pub fn x_range(&self) -> (f64, f64) {
        (self.margin.left, self.width - self.margin.right)
    }

    /// Vertical pixel range for the month bands.
    pub fn y_range(&self) -> (f64, f64) {
        (self.margin.top, self.height - self.margin.bottom)
    }

    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn bucket_count(&self) -> usize {
        self.colors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = ChartConfig::default();
        assert_eq!(config.x_range(), (120.0, 1260.0));
        assert_eq!(config.y_range(), (80.0, 540.0));
        assert_eq!(config.plot_width(), 1140.0);
        assert_eq!(config.bucket_count(), 6);
        assert_eq!(config.colors[0], "#55CCFF");
        assert_eq!(config.colors[5], "#FFCC00");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ChartConfig::from_json(r#"{"width": 1000, "tooltip": {"yearOffset": 4}}"#)
            .unwrap();
        assert_eq!(config.width, 1000.0);
        assert_eq!(config.height, 580.0);
        assert_eq!(config.tooltip.year_offset, 4);
        assert_eq!(config.tooltip.line_height, 14.0);
        assert_eq!(config.dataset_url, DATASET_URL);
    }

    #[test]
    fn test_rejects_empty_palette() {
        assert!(ChartConfig::from_json(r#"{"colors": []}"#).is_err());
    }

    #[test]
    fn test_rejects_margins_wider_than_chart() {
        assert!(ChartConfig::from_json(r#"{"width": 200}"#).is_err());
    }
}
