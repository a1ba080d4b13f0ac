//! Weekly trend chart
//!
//! Shows this week against the previous week as a smoothed line chart or a
//! column chart, switched with a slide button. Switching animates between the
//! two renderings.
//!
//! Data flow:
//! 1. `include_str!` embeds `assets/dashboard.json` (series, labels, palette
//!    and timing overrides) into the WASM binary.
//! 2. On mount: parse and validate the config into `AppState`.
//! 3. The slide button emits a label, which resolves to a `ChartType`.
//! 4. `TrendChart` turns each chart type change into a transition.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use wtc_chart_ui::components::{ChartHeader, ErrorDisplay, SlideButton, TrendChart};
use wtc_chart_ui::js_bridge;
use wtc_chart_ui::state::AppState;
use wtc_core::DashboardConfig;

const DASHBOARD_JSON: &str = include_str!("../assets/dashboard.json");

/// DOM id for the ECharts container div.
const CHART_CONTAINER_ID: &str = "weekly-trend-chart";

/// Colours referenced by the chart palette and the slide button.
const PAGE_STYLE: &str = r#"
:root {
    --this-week-color: #4F8CFF;
    --previous-week-color: #9AA5B8;
    --x-axis-label-color: #7A8599;
    --y-axis-label-color: #7A8599;
    --toggle-track-color: #EEF1F6;
    --toggle-indicator-color: #FFFFFF;
    --toggle-label-color: #7A8599;
    --toggle-selected-color: #1F2937;
}
"#;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weekly-trend-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Parse the embedded dashboard config once on mount ───
    use_effect(move || {
        match DashboardConfig::from_json(DASHBOARD_JSON) {
            Ok(config) => {
                info!(
                    "Dashboard config loaded: {} samples this week, {} last week",
                    config.chart.data.this_period.len(),
                    config.chart.data.previous_period.len()
                );
                state.chart_type.set(config.initial_chart_type);
                state.config.set(Some(config));
            }
            Err(e) => {
                state.error_msg.set(Some(e.to_string()));
            }
        }
        state.loading.set(false);
    });

    let config = state.config.read().clone();

    rsx! {
        document::Script { src: js_bridge::ECHARTS_SRC }
        document::Script { src: js_bridge::GSAP_SRC }
        style { {PAGE_STYLE} }

        div {
            style: "max-width: 640px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone(), context: "Loading dashboard".to_string() }
            }

            if let Some(config) = config {
                Dashboard { config }
            } else if *state.loading.read() {
                div {
                    style: "display: flex; justify-content: center; padding: 40px; color: #666;",
                    "Loading dashboard..."
                }
            }
        }
    }
}

/// Header, slide button and chart, wired through `AppState::chart_type`.
#[component]
fn Dashboard(config: DashboardConfig) -> Element {
    let mut state = use_context::<AppState>();
    let chart_type = (state.chart_type)();
    let labels = config.toggle.clone();

    let on_change = move |label: String| match labels.resolve(&label) {
        Some(chart_type) => state.chart_type.set(chart_type),
        None => warn!("Ignoring unknown chart type label '{}'", label),
    };

    rsx! {
        ChartHeader {
            title: config.title.clone(),
            palette: config.chart.palette.clone(),
        }

        div {
            style: "display: flex; justify-content: flex-end; margin-bottom: 8px;",
            SlideButton {
                label_left: config.toggle.line.clone(),
                label_right: config.toggle.column.clone(),
                selected_label: config.toggle.label_for(chart_type).to_string(),
                on_change: on_change,
            }
        }

        TrendChart {
            id: CHART_CONTAINER_ID.to_string(),
            config: config.chart.clone(),
            chart_type: chart_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wtc_core::options::nice_max;
    use wtc_core::ChartType;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = DashboardConfig::from_json(DASHBOARD_JSON).unwrap();
        assert_eq!(config.initial_chart_type, ChartType::Line);
        let data = &config.chart.data;
        assert_eq!(nice_max(&data.this_period, &data.previous_period, config.chart.axis_step), 12.0);
    }

    #[test]
    fn test_toggle_labels_resolve_to_both_chart_types() {
        let config = DashboardConfig::from_json(DASHBOARD_JSON).unwrap();
        let labels = &config.toggle;
        assert_eq!(labels.resolve(&labels.line), Some(ChartType::Line));
        assert_eq!(labels.resolve(&labels.column), Some(ChartType::Column));
    }
}
