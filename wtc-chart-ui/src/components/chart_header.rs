//! Chart header component with title and series legend.

use dioxus::prelude::*;
use wtc_core::options::{PREVIOUS_PERIOD_NAME, THIS_PERIOD_NAME};
use wtc_core::Palette;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Series colours, used for the legend swatches
    pub palette: Palette,
}

/// Header for the trend chart showing the title and a legend for both weeks.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let entries = [
        (THIS_PERIOD_NAME, props.palette.this_period.clone()),
        (PREVIOUS_PERIOD_NAME, props.palette.previous_period.clone()),
    ];

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
            h3 {
                style: "margin: 0; font-size: 16px;",
                "{props.title}"
            }
            div {
                style: "display: flex; gap: 12px; font-size: 12px; color: var(--x-axis-label-color);",
                for (name, color) in entries {
                    span {
                        key: "{name}",
                        style: "display: flex; align-items: center; gap: 4px;",
                        span {
                            style: "display: inline-block; width: 8px; height: 8px; border-radius: 50%; background: {color};",
                        }
                        "{name}"
                    }
                }
            }
        }
    }
}
