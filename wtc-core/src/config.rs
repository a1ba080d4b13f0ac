//! Dashboard configuration.
//!
//! Every field defaults to the values the dashboard ships with, so a config
//! document only needs to name what it overrides.

use crate::chart_type::ChartType;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The two weekly series and their shared category labels.
///
/// The series may have different lengths: the current period is usually
/// still in progress while the previous one is complete.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyData {
    pub this_period: Vec<f64>,
    pub previous_period: Vec<f64>,
    pub labels: Vec<String>,
}

impl Default for WeeklyData {
    fn default() -> Self {
        Self {
            this_period: vec![6.0, 10.0, 7.0, 6.0, 8.0],
            previous_period: vec![2.6, 4.6, 4.0, 7.0, 5.0, 11.0, 9.0],
            labels: ["M", "T", "W", "T", "F", "S", "S"]
                .iter()
                .map(|l| l.to_string())
                .collect(),
        }
    }
}

impl WeeklyData {
    /// Label and value of the most recent sample of the current period.
    pub fn last_sample(&self) -> Option<(&str, f64)> {
        let idx = self.this_period.len().checked_sub(1)?;
        let label = self.labels.get(idx)?;
        Some((label.as_str(), self.this_period[idx]))
    }
}

/// Colours handed to the charting engine. CSS variables resolve against the
/// page stylesheet because the chart renders to SVG.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub this_period: String,
    pub previous_period: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub marker_fill: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            this_period: "var(--this-week-color)".to_string(),
            previous_period: "var(--previous-week-color)".to_string(),
            x_axis_label: "var(--x-axis-label-color)".to_string(),
            y_axis_label: "var(--y-axis-label-color)".to_string(),
            marker_fill: "#fff".to_string(),
        }
    }
}

/// Animation timings. Engine durations are in milliseconds, GSAP durations
/// in seconds.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Draw duration of the previous-period line
    pub line_draw_ms: u32,
    /// Grow duration of the bars when switching to columns
    pub column_enter_ms: u32,
    /// Duration of the bars collapsing to zero
    pub collapse_ms: u32,
    pub update_easing: String,
    pub shrink_secs: f64,
    pub shrink_ease: String,
    pub line_marker_delay_ms: u32,
    pub column_marker_delay_ms: u32,
    pub marker_enter_ms: u32,
    pub marker_exit_ms: u32,
    /// Upper bound on waiting for the engine's `finished` event
    pub finish_timeout_ms: u64,
    /// Upper bound on waiting for the clip-path tweens
    pub shrink_timeout_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            line_draw_ms: 800,
            column_enter_ms: 200,
            collapse_ms: 200,
            update_easing: "quadraticInOut".to_string(),
            shrink_secs: 0.4,
            shrink_ease: "power2.inOut".to_string(),
            line_marker_delay_ms: 700,
            column_marker_delay_ms: 200,
            marker_enter_ms: 400,
            marker_exit_ms: 200,
            finish_timeout_ms: 1000,
            shrink_timeout_ms: 1000,
        }
    }
}

impl Timings {
    /// Marker entrance delay matching each mode's own entrance animation.
    pub fn marker_delay_ms(&self, chart_type: ChartType) -> u32 {
        match chart_type {
            ChartType::Line => self.line_marker_delay_ms,
            ChartType::Column => self.column_marker_delay_ms,
        }
    }

    pub fn finish_timeout(&self) -> Duration {
        Duration::from_millis(self.finish_timeout_ms)
    }

    pub fn shrink_timeout(&self) -> Duration {
        Duration::from_millis(self.shrink_timeout_ms)
    }
}

/// Everything the chart component needs to build its options.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub data: WeeklyData,
    pub palette: Palette,
    pub timings: Timings,
    /// Y-axis tick interval; the axis maximum is rounded up to a multiple of it
    pub axis_step: f64,
    pub smoothness: f64,
    pub marker_radius: f64,
    /// Horizontal shift of the marker in column mode, so it sits on the bar
    pub column_marker_offset: f64,
    pub bar_width: f64,
    pub bar_gap: String,
    pub y_label_margin: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data: WeeklyData::default(),
            palette: Palette::default(),
            timings: Timings::default(),
            axis_step: 3.0,
            smoothness: 0.4,
            marker_radius: 6.0,
            column_marker_offset: -5.0,
            bar_width: 3.0,
            bar_gap: "200%".to_string(),
            y_label_margin: 20,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data.labels.is_empty() {
            return Err(ConfigError::NoLabels);
        }
        if self.data.labels.len() < self.data.this_period.len() {
            return Err(ConfigError::LabelsTooShort {
                labels: self.data.labels.len(),
                samples: self.data.this_period.len(),
            });
        }
        if self.axis_step.is_nan() || self.axis_step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.axis_step));
        }
        Ok(())
    }
}

/// Labels shown on the slide button, one per chart type.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleLabels {
    pub line: String,
    pub column: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            line: "Line".to_string(),
            column: "Column".to_string(),
        }
    }
}

impl ToggleLabels {
    /// Resolve a label emitted by the slide button. Unknown labels resolve to `None`.
    pub fn resolve(&self, label: &str) -> Option<ChartType> {
        if label == self.column {
            Some(ChartType::Column)
        } else if label == self.line {
            Some(ChartType::Line)
        } else {
            None
        }
    }

    pub fn label_for(&self, chart_type: ChartType) -> &str {
        match chart_type {
            ChartType::Line => &self.line,
            ChartType::Column => &self.column,
        }
    }
}

/// Top-level configuration of the dashboard app.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub toggle: ToggleLabels,
    pub initial_chart_type: ChartType,
    pub chart: ChartConfig,
}

impl DashboardConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.chart.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_has_partial_current_week() {
        let data = WeeklyData::default();
        assert_eq!(data.this_period.len(), 5);
        assert_eq!(data.previous_period.len(), 7);
        assert_eq!(data.labels.len(), 7);
    }

    #[test]
    fn test_last_sample() {
        let data = WeeklyData::default();
        assert_eq!(data.last_sample(), Some(("F", 8.0)));

        let empty = WeeklyData {
            this_period: vec![],
            ..WeeklyData::default()
        };
        assert_eq!(empty.last_sample(), None);
    }

    #[test]
    fn test_marker_delay_per_mode() {
        let timings = Timings::default();
        assert_eq!(timings.marker_delay_ms(ChartType::Line), 700);
        assert_eq!(timings.marker_delay_ms(ChartType::Column), 200);
    }

    #[test]
    fn test_toggle_labels_resolve() {
        let labels = ToggleLabels::default();
        assert_eq!(labels.resolve("Column"), Some(ChartType::Column));
        assert_eq!(labels.resolve("Line"), Some(ChartType::Line));
        assert_eq!(labels.resolve("Pie"), None);
        assert_eq!(labels.label_for(ChartType::Column), "Column");
    }

    #[test]
    fn test_from_json_partial_override() {
        let json = r#"{
            "title": "Sessions",
            "initial_chart_type": "COLUMN",
            "chart": { "data": { "this_period": [1, 2, 3] }, "axis_step": 5 }
        }"#;
        let config = DashboardConfig::from_json(json).unwrap();
        assert_eq!(config.title, "Sessions");
        assert_eq!(config.initial_chart_type, ChartType::Column);
        assert_eq!(config.chart.data.this_period, vec![1.0, 2.0, 3.0]);
        // untouched fields keep their defaults
        assert_eq!(config.chart.data.labels.len(), 7);
        assert_eq!(config.chart.axis_step, 5.0);
        assert_eq!(config.chart.timings, Timings::default());
        assert_eq!(config.toggle, ToggleLabels::default());
    }

    #[test]
    fn test_from_json_rejects_short_labels() {
        let json = r#"{ "chart": { "data": { "labels": ["M", "T"] } } }"#;
        match DashboardConfig::from_json(json) {
            Err(ConfigError::LabelsTooShort { labels, samples }) => {
                assert_eq!(labels, 2);
                assert_eq!(samples, 5);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_bad_step_and_syntax() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{ "chart": { "axis_step": 0 } }"#),
            Err(ConfigError::InvalidStep(_))
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{ "chart": { "data": { "labels": [] } } }"#),
            Err(ConfigError::NoLabels)
        ));
        assert!(matches!(
            DashboardConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
