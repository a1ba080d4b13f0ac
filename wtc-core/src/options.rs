//! Builders for the ECharts option objects and GSAP tween vars.
//!
//! Everything here is pure: the orchestrator decides when to apply an option,
//! these functions only decide what it contains.

use crate::chart_type::ChartType;
use crate::config::{ChartConfig, Timings};
use crate::surface::Point;
use serde::Serialize;
use serde_json::{json, Value};

/// Graphic id of the last-data-point marker.
pub const MARKER_ID: &str = "lastDot";

pub const THIS_PERIOD_NAME: &str = "This week";
pub const PREVIOUS_PERIOD_NAME: &str = "Previous week";

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    Line(LineSeries),
    Bar(BarSeries),
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub name: String,
    pub smooth: f64,
    pub smooth_monotone: String,
    pub data: Vec<f64>,
    pub show_symbol: bool,
    pub line_style: LineStyle,
    pub z: i32,
    pub animation_duration: u32,
}

/// A bar series. Unset fields are merged from the series already on the chart.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration_update: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Show {
    pub show: bool,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct AxisLabel {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<u32>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Vec<String>,
    pub axis_line: Show,
    pub boundary_gap: bool,
    pub axis_label: AxisLabel,
}

/// Value axis. The label formatter cannot travel as JSON; the bridge attaches
/// [`y_axis_label`] to `axisLabel.formatter` when it applies the option.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    #[serde(rename = "type")]
    pub kind: String,
    pub max: f64,
    pub axis_line: Show,
    pub split_line: Show,
    pub axis_label: AxisLabel,
    pub interval: f64,
}

/// Smallest multiple of `step` that is >= the largest value of both series.
pub fn nice_max(this_period: &[f64], previous_period: &[f64], step: f64) -> f64 {
    let max = this_period
        .iter()
        .chain(previous_period.iter())
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return 0.0;
    }
    (max / step).ceil() * step
}

/// Y-axis tick label: blank at and below zero.
pub fn y_axis_label(value: f64) -> String {
    if value > 0.0 {
        format!("{}", value)
    } else {
        String::new()
    }
}

pub fn x_axis(config: &ChartConfig) -> XAxis {
    XAxis {
        kind: "category".to_string(),
        data: config.data.labels.clone(),
        axis_line: Show { show: false },
        boundary_gap: false,
        axis_label: AxisLabel {
            color: config.palette.x_axis_label.clone(),
            margin: None,
        },
    }
}

pub fn y_axis(config: &ChartConfig) -> YAxis {
    let data = &config.data;
    YAxis {
        kind: "value".to_string(),
        max: nice_max(&data.this_period, &data.previous_period, config.axis_step),
        axis_line: Show { show: false },
        split_line: Show { show: false },
        axis_label: AxisLabel {
            color: config.palette.y_axis_label.clone(),
            margin: Some(config.y_label_margin),
        },
        interval: config.axis_step,
    }
}

/// Line series, this period drawn above the previous one.
///
/// The previous period draws in `line_draw_ms`; the current period's duration
/// is scaled by the length ratio so both lines advance at the same speed per
/// point.
pub fn line_series(config: &ChartConfig) -> Vec<Series> {
    let data = &config.data;
    let previous_ms = config.timings.line_draw_ms;
    let this_ms = if data.this_period.is_empty() {
        previous_ms
    } else {
        (data.previous_period.len() as f64 / data.this_period.len() as f64 * previous_ms as f64)
            .round() as u32
    };

    let line = |name: &str, values: &[f64], color: &str, z: i32, duration: u32| {
        Series::Line(LineSeries {
            name: name.to_string(),
            smooth: config.smoothness,
            smooth_monotone: "x".to_string(),
            data: values.to_vec(),
            show_symbol: false,
            line_style: LineStyle {
                color: color.to_string(),
                width: 3.0,
            },
            z,
            animation_duration: duration,
        })
    };

    vec![
        line(THIS_PERIOD_NAME, &data.this_period, &config.palette.this_period, 2, this_ms),
        line(
            PREVIOUS_PERIOD_NAME,
            &data.previous_period,
            &config.palette.previous_period,
            1,
            previous_ms,
        ),
    ]
}

pub fn column_series(config: &ChartConfig) -> Vec<Series> {
    let bar = |name: &str, values: &[f64], color: &str| {
        Series::Bar(BarSeries {
            name: Some(name.to_string()),
            data: values.to_vec(),
            bar_width: Some(config.bar_width),
            color: Some(color.to_string()),
            bar_gap: Some(config.bar_gap.clone()),
            ..BarSeries::default()
        })
    };

    vec![
        bar(THIS_PERIOD_NAME, &config.data.this_period, &config.palette.this_period),
        bar(
            PREVIOUS_PERIOD_NAME,
            &config.data.previous_period,
            &config.palette.previous_period,
        ),
    ]
}

/// Both bar series at zero height, animated by the engine itself.
pub fn collapsed_bars(config: &ChartConfig) -> Vec<Series> {
    let timings = &config.timings;
    [&config.data.this_period, &config.data.previous_period]
        .iter()
        .map(|values| {
            Series::Bar(BarSeries {
                data: vec![0.0; values.len()],
                animation_duration_update: Some(timings.collapse_ms),
                animation_easing: Some(timings.update_easing.clone()),
                ..BarSeries::default()
            })
        })
        .collect()
}

pub fn series_for(config: &ChartConfig, chart_type: ChartType) -> Vec<Series> {
    match chart_type {
        ChartType::Line => line_series(config),
        ChartType::Column => column_series(config),
    }
}

/// The option the chart is created with: axes only, no entrance animation.
pub fn base_option(config: &ChartConfig) -> Value {
    json!({
        "xAxis": x_axis(config),
        "yAxis": y_axis(config),
        "emphasis": { "disabled": true },
        "animation": true,
        "animationDuration": 0,
    })
}

pub fn collapse_option(config: &ChartConfig) -> Value {
    json!({ "series": collapsed_bars(config) })
}

/// Swap the series to `chart_type`, carrying the marker graphic along.
pub fn series_update(config: &ChartConfig, chart_type: ChartType, marker: Vec<Value>) -> Value {
    let timings = &config.timings;
    let mut update = json!({
        "animationEasing": timings.update_easing,
        "series": series_for(config, chart_type),
        "graphic": marker,
    });
    if chart_type == ChartType::Column {
        update["animationDuration"] = json!(timings.column_enter_ms);
    }
    update
}

/// Marker position for `chart_type` given the projected last data point.
pub fn place_marker(projected: Point, chart_type: ChartType, column_offset: f64) -> Point {
    match chart_type {
        ChartType::Line => projected,
        ChartType::Column => Point {
            x: projected.x + column_offset,
            y: projected.y,
        },
    }
}

/// Marker circle with its entrance keyframes: overshoot, undershoot, bounce.
pub fn marker_graphic(config: &ChartConfig, at: Point, delay_ms: u32) -> Value {
    let r = config.marker_radius;
    json!({
        "type": "circle",
        "id": MARKER_ID,
        "shape": { "cx": at.x, "cy": at.y, "r": 4 },
        "style": { "fill": config.palette.marker_fill },
        "z": 10,
        "keyframeAnimation": {
            "duration": config.timings.marker_enter_ms,
            "delay": delay_ms,
            "loop": false,
            "keyframes": [
                { "percent": 0.0, "shape": { "r": 0 }, "style": { "opacity": 0 } },
                { "percent": 0.4, "shape": { "r": r * 2.0 }, "easing": "cubicOut" },
                { "percent": 0.75, "shape": { "r": r * 0.85 }, "easing": "cubicInOut" },
                { "percent": 1.0, "shape": { "r": r }, "style": { "opacity": 1 }, "easing": "bounceOut" },
            ],
        },
    })
}

pub fn hide_marker_option(config: &ChartConfig) -> Value {
    json!({
        "graphic": [{
            "type": "circle",
            "id": MARKER_ID,
            "keyframeAnimation": {
                "duration": config.timings.marker_exit_ms,
                "loop": false,
                "keyframes": [
                    { "percent": 0.0, "shape": { "r": config.marker_radius } },
                    { "percent": 1.0, "shape": { "r": 0 }, "easing": "cubicIn" },
                ],
            },
        }],
    })
}

/// Move the marker without replaying its entrance. The radius is restated
/// because the stored shape still carries the pre-animation radius.
pub fn marker_move_option(config: &ChartConfig, at: Point) -> Value {
    json!({
        "graphic": [{
            "type": "circle",
            "id": MARKER_ID,
            "shape": { "cx": at.x, "cy": at.y, "r": config.marker_radius },
        }],
    })
}

// GSAP vars for the clip-path wipe

pub fn pivot_vars(origin: Point) -> Value {
    json!({ "scaleX": 1, "svgOrigin": format!("{} {}", origin.x, origin.y) })
}

pub fn shrink_vars(timings: &Timings) -> Value {
    json!({ "scaleX": 0, "duration": timings.shrink_secs, "ease": timings.shrink_ease })
}

pub fn reset_vars() -> Value {
    json!({ "scaleX": 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max_rounds_up_to_step() {
        let this_week = [6.0, 10.0, 7.0, 6.0, 8.0];
        let previous_week = [2.6, 4.6, 4.0, 7.0, 5.0, 11.0, 9.0];
        assert_eq!(nice_max(&this_week, &previous_week, 3.0), 12.0);
        // exact multiples are kept
        assert_eq!(nice_max(&[9.0], &[], 3.0), 9.0);
        assert_eq!(nice_max(&[], &[], 3.0), 0.0);
    }

    #[test]
    fn test_y_axis_label() {
        assert_eq!(y_axis_label(0.0), "");
        assert_eq!(y_axis_label(-3.0), "");
        assert_eq!(y_axis_label(9.0), "9");
        assert_eq!(y_axis_label(1.5), "1.5");
    }

    #[test]
    fn test_axes() {
        let config = ChartConfig::default();
        let y = serde_json::to_value(y_axis(&config)).unwrap();
        assert_eq!(y["type"], "value");
        assert_eq!(y["max"], 12.0);
        assert_eq!(y["interval"], 3.0);
        assert_eq!(y["axisLine"]["show"], false);
        assert_eq!(y["splitLine"]["show"], false);
        assert_eq!(y["axisLabel"]["margin"], 20);

        let x = serde_json::to_value(x_axis(&config)).unwrap();
        assert_eq!(x["type"], "category");
        assert_eq!(x["boundaryGap"], false);
        assert_eq!(x["axisLine"]["show"], false);
        assert_eq!(x["data"].as_array().unwrap().len(), 7);
        assert!(x["axisLabel"].get("margin").is_none());
    }

    #[test]
    fn test_line_series() {
        let config = ChartConfig::default();
        let series = serde_json::to_value(line_series(&config)).unwrap();
        let this_week = &series[0];
        let previous_week = &series[1];

        assert_eq!(this_week["type"], "line");
        assert_eq!(this_week["smoothMonotone"], "x");
        assert_eq!(this_week["showSymbol"], false);
        assert_eq!(this_week["lineStyle"]["width"], 3.0);
        assert_eq!(this_week["lineStyle"]["color"], "var(--this-week-color)");
        assert!(this_week["z"].as_i64() > previous_week["z"].as_i64());

        // 7 previous samples over 800ms, 5 current samples at the same pace
        assert_eq!(previous_week["animationDuration"], 800);
        assert_eq!(this_week["animationDuration"], 1120);
    }

    #[test]
    fn test_column_series() {
        let config = ChartConfig::default();
        let series = serde_json::to_value(column_series(&config)).unwrap();
        for s in series.as_array().unwrap() {
            assert_eq!(s["type"], "bar");
            assert_eq!(s["barWidth"], 3.0);
            assert_eq!(s["barGap"], "200%");
        }
        assert_eq!(series[1]["color"], "var(--previous-week-color)");
        assert_eq!(series[1]["data"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_collapsed_bars_keep_lengths() {
        let config = ChartConfig::default();
        let option = collapse_option(&config);
        let series = option["series"].as_array().unwrap();
        assert_eq!(series[0]["data"], json!([0.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(series[1]["data"].as_array().unwrap().len(), 7);
        assert_eq!(series[0]["animationDurationUpdate"], 200);
        assert!(series[0].get("name").is_none());
    }

    #[test]
    fn test_series_update_per_mode() {
        let config = ChartConfig::default();
        let line = series_update(&config, ChartType::Line, vec![]);
        assert!(line.get("animationDuration").is_none());
        assert_eq!(line["animationEasing"], "quadraticInOut");
        assert_eq!(line["series"], serde_json::to_value(line_series(&config)).unwrap());

        let column = series_update(&config, ChartType::Column, vec![]);
        assert_eq!(column["animationDuration"], 200);
        assert_eq!(column["graphic"], json!([]));
        assert_eq!(column["series"], serde_json::to_value(column_series(&config)).unwrap());
    }

    #[test]
    fn test_series_for_picks_renderer() {
        let config = ChartConfig::default();
        assert_eq!(series_for(&config, ChartType::Line), line_series(&config));
        assert_eq!(series_for(&config, ChartType::Column), column_series(&config));
        assert!(series_for(&config, ChartType::Column)
            .iter()
            .all(|s| matches!(s, Series::Bar(_))));
    }

    #[test]
    fn test_marker_move_keeps_settled_radius() {
        let config = ChartConfig::default();
        let moved = marker_move_option(&config, Point { x: 12.0, y: 34.0 });
        let marker = &moved["graphic"][0];
        assert_eq!(marker["id"], MARKER_ID);
        assert_eq!(marker["shape"]["cx"], 12.0);
        assert_eq!(marker["shape"]["cy"], 34.0);
        assert_eq!(marker["shape"]["r"], config.marker_radius);
        // no entrance replay on a move
        assert!(marker.get("keyframeAnimation").is_none());
    }

    #[test]
    fn test_place_marker_column_offset() {
        let projected = Point { x: 250.0, y: 80.0 };
        let line = place_marker(projected, ChartType::Line, -5.0);
        let column = place_marker(projected, ChartType::Column, -5.0);
        assert_eq!(line, projected);
        assert_eq!(column.x, line.x - 5.0);
        assert_eq!(column.y, line.y);
    }

    #[test]
    fn test_marker_keyframes() {
        let config = ChartConfig::default();
        let marker = marker_graphic(&config, Point { x: 1.0, y: 2.0 }, 700);
        assert_eq!(marker["id"], MARKER_ID);
        assert_eq!(marker["keyframeAnimation"]["delay"], 700);
        let frames = marker["keyframeAnimation"]["keyframes"].as_array().unwrap();
        let radii: Vec<f64> = frames
            .iter()
            .map(|f| f["shape"]["r"].as_f64().unwrap())
            .collect();
        assert_eq!(radii, vec![0.0, 12.0, 6.0 * 0.85, 6.0]);
        assert_eq!(frames[0]["style"]["opacity"], 0);
        assert_eq!(frames[3]["style"]["opacity"], 1);
        assert_eq!(frames[3]["easing"], "bounceOut");
    }

    #[test]
    fn test_hide_marker_shrinks_to_zero() {
        let option = hide_marker_option(&ChartConfig::default());
        let hide = &option["graphic"][0];
        assert_eq!(hide["id"], MARKER_ID);
        assert_eq!(hide["keyframeAnimation"]["duration"], 200);
        assert_eq!(hide["keyframeAnimation"]["keyframes"][1]["shape"]["r"], 0);
    }

    #[test]
    fn test_tween_vars() {
        let pivot = pivot_vars(Point { x: 40.0, y: 110.5 });
        assert_eq!(pivot["svgOrigin"], "40 110.5");
        let shrink = shrink_vars(&Timings::default());
        assert_eq!(shrink["scaleX"], 0);
        assert_eq!(shrink["duration"], 0.4);
        assert_eq!(shrink["ease"], "power2.inOut");
    }
}
