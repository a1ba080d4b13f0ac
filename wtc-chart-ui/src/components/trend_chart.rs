//! Weekly trend chart that animates between line and column rendering.

use crate::components::{ChartContainer, ErrorDisplay};
use crate::js_bridge::{self, BrowserClock, BrowserTransitions, EchartsSurface, GsapTweener};
use dioxus::prelude::*;
use log::{debug, error};
use std::rc::Rc;
use std::time::Duration;
use wtc_core::{ChartConfig, ChartType};

/// How long to wait for the ECharts and GSAP scripts before giving up.
const LIBRARY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Props, Clone, PartialEq)]
pub struct TrendChartProps {
    /// DOM id of the chart container
    pub id: String,
    pub config: ChartConfig,
    pub chart_type: ChartType,
    #[props(default = 320)]
    pub height: u32,
}

/// The chart owns one `Transitions` for its whole lifetime; every change of
/// the `chart_type` prop is handed to it as a transition request.
#[component]
pub fn TrendChart(props: TrendChartProps) -> Element {
    let config = props.config.clone();
    let transitions =
        use_hook(|| Rc::new(BrowserTransitions::new(config, GsapTweener, BrowserClock)));
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    // Latest chart type, read when the surface becomes ready
    let mut current = use_signal(|| props.chart_type);

    // ─── Effect 1: mount the chart once the libraries are loaded ───
    let mount_transitions = transitions.clone();
    let container_id = props.id.clone();
    use_effect(move || {
        let transitions = mount_transitions.clone();
        let container_id = container_id.clone();
        spawn(async move {
            if transitions.is_initialized() {
                return;
            }
            if let Err(e) = js_bridge::wait_for_libraries(&BrowserClock, LIBRARY_TIMEOUT).await {
                error!("{:#}", e);
                error_msg.set(Some(e.to_string()));
                return;
            }
            match EchartsSurface::mount(&container_id) {
                Ok(surface) => {
                    let chart_type = *current.peek();
                    let outcome = transitions.initialize(surface, chart_type).await;
                    debug!("Chart ready: {:?}", outcome);
                    loading.set(false);
                }
                Err(e) => {
                    error!("{:#}", e);
                    error_msg.set(Some(e.to_string()));
                }
            }
        });
    });

    // ─── Effect 2: run a transition whenever the chart type prop changes ───
    let chart_type = props.chart_type;
    let change_transitions = transitions.clone();
    use_effect(use_reactive!(|(chart_type,)| {
        current.set(chart_type);
        let transitions = change_transitions.clone();
        spawn(async move {
            let outcome = transitions.on_chart_type_changed(chart_type).await;
            debug!("Chart type {} requested: {:?}", chart_type, outcome);
        });
    }));

    let resize_transitions = transitions.clone();
    let on_resize = move |_: ()| {
        let transitions = resize_transitions.clone();
        spawn(async move {
            transitions.relayout().await;
        });
    };

    rsx! {
        if let Some(err) = error_msg() {
            ErrorDisplay { message: err, context: "Chart setup".to_string() }
        }
        ChartContainer {
            id: props.id.clone(),
            loading: loading(),
            height: props.height,
            on_resize: on_resize,
        }
    }
}
