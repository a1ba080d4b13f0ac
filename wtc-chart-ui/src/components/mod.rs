//! Reusable Dioxus RSX components for the weekly trend dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod slide_button;
mod trend_chart;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use slide_button::SlideButton;
pub use trend_chart::TrendChart;
