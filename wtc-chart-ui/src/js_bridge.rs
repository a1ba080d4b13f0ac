//! Typed wrappers around the ECharts and GSAP globals.
//!
//! Both libraries are loaded with plain `<script>` tags and live on `window`.
//! This module binds the handful of functions the chart needs and implements
//! the `wtc_core::surface` seams on top of them. JS exceptions are caught and
//! logged, never turned into panics.

use anyhow::{anyhow, Result};
use futures::channel::oneshot;
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use js_sys::{Array, Function, Reflect};
use log::warn;
use serde_json::{json, Value};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;
use wtc_core::options;
use wtc_core::surface::{BBox, ChartSurface, ClipShape, Clock, Point, Tweener};
use wtc_core::Transitions;

pub const ECHARTS_SRC: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";
pub const GSAP_SRC: &str = "https://cdn.jsdelivr.net/npm/gsap@3.12.5/dist/gsap.min.js";

/// How often to look for the library globals while they load.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The orchestrator wired to the browser implementations.
pub type BrowserTransitions = Transitions<EchartsSurface, GsapTweener, BrowserClock>;

#[wasm_bindgen]
extern "C" {
    /// An ECharts chart instance.
    #[derive(Debug, Clone)]
    pub type EChartsInstance;

    #[wasm_bindgen(catch, js_namespace = echarts, js_name = init)]
    fn echarts_init(
        dom: &Element,
        theme: &JsValue,
        opts: &JsValue,
    ) -> std::result::Result<EChartsInstance, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setOption)]
    fn set_option(this: &EChartsInstance, option: &JsValue) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &EChartsInstance, event: &str, handler: &Function);

    #[wasm_bindgen(method)]
    fn off(this: &EChartsInstance, event: &str, handler: &Function);

    #[wasm_bindgen(catch, method, js_name = convertToPixel)]
    fn convert_to_pixel(
        this: &EChartsInstance,
        finder: &JsValue,
        value: &JsValue,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = getDom)]
    fn get_dom(this: &EChartsInstance) -> Element;

    #[wasm_bindgen(method)]
    fn resize(this: &EChartsInstance);

    #[wasm_bindgen(method)]
    fn dispose(this: &EChartsInstance);

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = set)]
    fn gsap_set(target: &JsValue, vars: &JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(target: &JsValue, vars: &JsValue) -> std::result::Result<JsValue, JsValue>;
}

/// Serialize to JSON and parse into a plain JS object.
fn to_js(value: &Value) -> Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| anyhow!("JSON.parse failed: {:?}", e))
}

fn global_defined(name: &str) -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map(|v| !v.is_undefined())
        .unwrap_or(false)
}

/// Wait until both `echarts` and `gsap` are defined, polling every 100ms.
pub async fn wait_for_libraries(clock: &impl Clock, limit: Duration) -> Result<()> {
    let mut waited = Duration::ZERO;
    loop {
        if global_defined("echarts") && global_defined("gsap") {
            return Ok(());
        }
        if waited >= limit {
            return Err(anyhow!(
                "Chart libraries not loaded after {} ms",
                limit.as_millis()
            ));
        }
        clock.sleep(POLL_INTERVAL).await;
        waited += POLL_INTERVAL;
    }
}

/// An ECharts instance rendering to SVG inside a container element.
///
/// The instance is disposed when the surface is dropped.
pub struct EchartsSurface {
    chart: EChartsInstance,
    y_label: Closure<dyn Fn(f64) -> String>,
}

impl EchartsSurface {
    /// Create the chart inside the element with `container_id`.
    pub fn mount(container_id: &str) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| anyhow!("No document available"))?;
        let dom = document
            .get_element_by_id(container_id)
            .ok_or_else(|| anyhow!("Chart container '{}' not found", container_id))?;
        // clip-path wipes need SVG output
        let opts = to_js(&json!({ "renderer": "svg" }))?;
        let chart = echarts_init(&dom, &JsValue::NULL, &opts)
            .map_err(|e| anyhow!("echarts.init failed: {:?}", e))?;

        Ok(Self {
            chart,
            y_label: Closure::new(options::y_axis_label),
        })
    }

    /// Point `yAxis.axisLabel.formatter` at the Rust label formatter.
    fn attach_y_formatter(&self, option: &JsValue) {
        let Ok(y_axis) = Reflect::get(option, &JsValue::from_str("yAxis")) else {
            return;
        };
        if !y_axis.is_object() {
            return;
        }
        if let Ok(label) = Reflect::get(&y_axis, &JsValue::from_str("axisLabel")) {
            if label.is_object() {
                if let Err(e) =
                    Reflect::set(&label, &JsValue::from_str("formatter"), self.y_label.as_ref())
                {
                    warn!("Failed to attach y-axis label formatter: {:?}", e);
                }
            }
        }
    }
}

impl Drop for EchartsSurface {
    fn drop(&mut self) {
        self.chart.dispose();
    }
}

/// Keeps a `finished` handler registered for as long as someone waits on it.
struct FinishedListener {
    chart: EChartsInstance,
    handler: Closure<dyn FnMut()>,
}

impl Drop for FinishedListener {
    fn drop(&mut self) {
        self.chart
            .off("finished", self.handler.as_ref().unchecked_ref());
    }
}

fn bbox_of(shape: &JsValue) -> BBox {
    let rect = Reflect::get(shape, &JsValue::from_str("getBBox"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .and_then(|f| f.call0(shape).ok());
    let Some(rect) = rect else {
        return BBox::default();
    };
    let field = |name: &str| {
        Reflect::get(&rect, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    };
    BBox {
        x: field("x"),
        y: field("y"),
        width: field("width"),
        height: field("height"),
    }
}

impl ChartSurface for EchartsSurface {
    type Shape = JsValue;

    fn set_option(&self, option: &Value) {
        let result = to_js(option).and_then(|js| {
            self.attach_y_formatter(&js);
            self.chart
                .set_option(&js)
                .map_err(|e| anyhow!("setOption failed: {:?}", e))
        });
        if let Err(e) = result {
            warn!("{}", e);
        }
    }

    fn on_finished(&self) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel::<()>();
        let mut tx = Some(tx);
        let handler = Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.take() {
                let _ = tx.send(());
            }
        });
        self.chart.on("finished", handler.as_ref().unchecked_ref());
        let listener = FinishedListener {
            chart: self.chart.clone(),
            handler,
        };

        async move {
            let _listener = listener;
            let _ = rx.await;
        }
        .boxed_local()
    }

    fn convert_to_pixel(&self, category: &str, value: f64) -> Option<Point> {
        let finder = to_js(&json!({ "xAxisIndex": 0, "yAxisIndex": 0 })).ok()?;
        let pair = Array::of2(&JsValue::from_str(category), &JsValue::from_f64(value));
        let result = self.chart.convert_to_pixel(&finder, &pair).ok()?;
        let projected: Array = result.dyn_into().ok()?;
        Some(Point {
            x: projected.get(0).as_f64()?,
            y: projected.get(1).as_f64()?,
        })
    }

    fn clip_shapes(&self) -> Option<Vec<ClipShape<JsValue>>> {
        let svg = self.chart.get_dom().query_selector("svg").ok().flatten()?;
        let nodes = svg.query_selector_all("clipPath > path").ok()?;
        let shapes = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .map(|node| {
                let handle: JsValue = node.into();
                let bbox = bbox_of(&handle);
                ClipShape { handle, bbox }
            })
            .collect();
        Some(shapes)
    }

    fn resize(&self) {
        self.chart.resize();
    }
}

/// Tweens through the global `gsap` object.
#[derive(Debug, Clone, Copy, Default)]
pub struct GsapTweener;

impl Tweener<JsValue> for GsapTweener {
    fn set(&self, target: &JsValue, vars: &Value) {
        let result = to_js(vars).and_then(|vars| {
            gsap_set(target, &vars).map_err(|e| anyhow!("gsap.set failed: {:?}", e))
        });
        if let Err(e) = result {
            warn!("{}", e);
        }
    }

    fn to(&self, target: &JsValue, vars: &Value) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel::<()>();
        let started = to_js(vars).and_then(|vars| {
            let on_complete = Closure::once_into_js(move || {
                let _ = tx.send(());
            });
            Reflect::set(&vars, &JsValue::from_str("onComplete"), &on_complete)
                .map_err(|e| anyhow!("Failed to attach onComplete: {:?}", e))?;
            gsap_to(target, &vars).map_err(|e| anyhow!("gsap.to failed: {:?}", e))?;
            Ok(())
        });

        match started {
            Ok(()) => async move {
                let _ = rx.await;
            }
            .boxed_local(),
            Err(e) => {
                warn!("{}", e);
                future::ready(()).boxed_local()
            }
        }
    }
}

/// `setTimeout`-backed timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let ms = duration.as_millis().min(i32::MAX as u128) as i32;
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
            }
        });
        async move {
            let _ = JsFuture::from(promise).await;
        }
        .boxed_local()
    }
}
