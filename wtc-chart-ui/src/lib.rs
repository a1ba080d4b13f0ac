//! Shared Dioxus components and ECharts/GSAP bridge for the weekly trend chart.
//!
//! This crate provides:
//! - `js_bridge`: wasm-bindgen bindings to the `echarts` and `gsap` globals,
//!   implementing the `wtc_core::surface` seams
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (slide button, trend chart, containers)

pub mod js_bridge;
pub mod state;
pub mod components;
