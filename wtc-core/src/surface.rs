//! Seams to the collaborators the orchestrator drives.
//!
//! The browser implementations live in `wtc_chart_ui::js_bridge`; tests use
//! in-memory fakes on a tokio clock.

use futures::future::LocalBoxFuture;
use serde_json::Value;
use std::time::Duration;

/// A pixel position inside the chart.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bounding box of an SVG shape in user units.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    /// Pivot for the horizontal shrink: left edge, vertical centre.
    pub fn left_centre(&self) -> Point {
        Point {
            x: self.x,
            y: self.y + self.height / 2.0,
        }
    }
}

/// One `clipPath > path` element of the rendered chart.
#[derive(Debug, Clone)]
pub struct ClipShape<H> {
    pub handle: H,
    pub bbox: BBox,
}

/// The charting engine instance bound to a rendered chart.
pub trait ChartSurface {
    /// Handle to a shape inside the rendered SVG.
    type Shape;

    /// Merge an option object into the chart.
    fn set_option(&self, option: &Value);

    /// Resolves on the next `finished` event. Dropping the future unregisters the listener.
    fn on_finished(&self) -> LocalBoxFuture<'static, ()>;

    /// Project a (category, value) pair on the first grid into pixels.
    fn convert_to_pixel(&self, category: &str, value: f64) -> Option<Point>;

    /// Clip shapes of the rendered SVG, or `None` when there is no SVG output.
    fn clip_shapes(&self) -> Option<Vec<ClipShape<Self::Shape>>>;

    /// Re-fit the chart to its container.
    fn resize(&self);
}

/// The tweening engine.
pub trait Tweener<H> {
    /// Apply vars immediately.
    fn set(&self, target: &H, vars: &Value);

    /// Animate towards vars; resolves when the tween completes.
    fn to(&self, target: &H, vars: &Value) -> LocalBoxFuture<'static, ()>;
}

pub trait Clock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}
