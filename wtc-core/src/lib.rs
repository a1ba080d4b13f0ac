//! Core types and transition orchestration for the weekly trend chart.
//!
//! This crate provides:
//! - `chart_type`: the LINE / COLUMN rendering mode
//! - `config`: dashboard configuration (series data, palette, timings)
//! - `options`: builders for the ECharts option objects and GSAP tween vars
//! - `surface`: the seams to the charting engine, the tweening engine and the timer
//! - `toggle`: the slide-button model
//! - `transitions`: the chart-type transition orchestrator

pub mod chart_type;
pub mod config;
pub mod error;
pub mod options;
pub mod surface;
pub mod toggle;
pub mod transitions;

pub use chart_type::ChartType;
pub use config::{ChartConfig, DashboardConfig, Palette, Timings, ToggleLabels, WeeklyData};
pub use error::ConfigError;
pub use transitions::{ReadyOutcome, TransitionOutcome, Transitions};
