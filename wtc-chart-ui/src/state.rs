//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wtc_core::{ChartType, DashboardConfig};

/// Shared application state for the weekly trend dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dashboard configuration (None until parsed)
    pub config: Signal<Option<DashboardConfig>>,
    /// Chart type selected with the slide button
    pub chart_type: Signal<ChartType>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            config: Signal::new(None),
            chart_type: Signal::new(ChartType::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
