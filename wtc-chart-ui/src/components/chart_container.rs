//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (ECharts will render into this)
    pub id: String,
    /// Whether the chart is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Chart height in pixels. ECharts sizes itself from its container.
    #[props(default = 320)]
    pub height: u32,
    /// Called whenever the container changes size
    pub on_resize: Option<EventHandler<()>>,
}

/// A fixed-height container div for an ECharts chart with loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let on_resize = props.on_resize;
    let chart_style = format!("width: 100%; height: {}px;", props.height);

    rsx! {
        div {
            style: "position: relative; width: 100%;",
            onresize: move |_| {
                if let Some(handler) = on_resize {
                    handler.call(());
                }
            },
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: var(--x-axis-label-color);",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "{chart_style}",
            }
        }
    }
}
