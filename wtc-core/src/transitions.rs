//! Chart-type transition orchestration.
//!
//! The two directions are deliberately asymmetric:
//!
//! - COLUMN -> LINE: the engine animates the bars down to zero by itself, we
//!   wait for its `finished` event and then swap in the line series.
//! - LINE -> COLUMN: the lines are wiped out by shrinking the SVG clip paths
//!   with GSAP, then the column series are swapped in.
//!
//! Every engine mutation happens under one async gate, so overlapping
//! transitions run one after the other. Each accepted request bumps a
//! generation counter; a transition whose generation is no longer current
//! stops before touching the series. Both waits are bounded by the configured
//! timeouts, after which the swap is forced.

use crate::chart_type::ChartType;
use crate::config::ChartConfig;
use crate::options;
use crate::surface::{ChartSurface, Clock, Point, Tweener};
use futures::future::{self, Either};
use futures::lock::Mutex;
use log::{debug, info, warn};
use serde_json::Value;
use std::cell::{OnceCell, RefCell};
use std::future::Future;
use std::pin::pin;
use std::time::Duration;

/// Result of [`Transitions::initialize`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReadyOutcome {
    Applied(ChartType),
    AlreadyInitialized,
}

/// Result of [`Transitions::on_chart_type_changed`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransitionOutcome {
    /// No chart surface yet
    NotInitialized,
    /// Already requested, or already on screen
    Unchanged,
    Completed { from: ChartType, to: ChartType },
    /// A superseded transition left the view half-animated and the target was re-applied
    Restored(ChartType),
    /// A newer request arrived before the series could be swapped
    Superseded,
}

#[derive(Debug, Default)]
struct ViewState {
    requested: ChartType,
    applied: Option<ChartType>,
    generation: u64,
    /// The marker or the geometry has been animated away since the last swap
    dirty: bool,
}

/// Owns the chart surface and sequences every change of chart type.
pub struct Transitions<S, T, C> {
    config: ChartConfig,
    surface: OnceCell<S>,
    tweener: T,
    clock: C,
    state: RefCell<ViewState>,
    gate: Mutex<()>,
}

impl<S, T, C> Transitions<S, T, C>
where
    S: ChartSurface,
    T: Tweener<S::Shape>,
    C: Clock,
{
    pub fn new(config: ChartConfig, tweener: T, clock: C) -> Self {
        Self {
            config,
            surface: OnceCell::new(),
            tweener,
            clock,
            state: RefCell::new(ViewState::default()),
            gate: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.surface.get().is_some()
    }

    /// Chart type whose series are currently on the chart.
    pub fn applied(&self) -> Option<ChartType> {
        self.state.borrow().applied
    }

    /// Take ownership of the chart surface once it is ready, wait for the
    /// first render and apply the series for `chart_type`.
    ///
    /// Only the first call has any effect.
    pub async fn initialize(&self, surface: S, chart_type: ChartType) -> ReadyOutcome {
        let _gate = self.gate.lock().await;
        if self.surface.get().is_some() {
            debug!("Chart surface already initialized, ignoring ready signal");
            return ReadyOutcome::AlreadyInitialized;
        }
        let surface = self.surface.get_or_init(|| surface);
        {
            let mut state = self.state.borrow_mut();
            state.requested = chart_type;
            state.generation += 1;
        }

        let finished = surface.on_finished();
        surface.set_option(&options::base_option(&self.config));
        self.wait_bounded(finished, self.config.timings.finish_timeout(), "Initial render")
            .await;

        self.apply_series(surface, chart_type);
        info!("Chart initialized as {}", chart_type);
        ReadyOutcome::Applied(chart_type)
    }

    /// React to a new chart-type input.
    pub async fn on_chart_type_changed(&self, target: ChartType) -> TransitionOutcome {
        let Some(surface) = self.surface.get() else {
            debug!("Chart type changed to {} before the chart was ready", target);
            return TransitionOutcome::NotInitialized;
        };
        let token = {
            let mut state = self.state.borrow_mut();
            if state.requested == target {
                return TransitionOutcome::Unchanged;
            }
            state.requested = target;
            state.generation += 1;
            state.generation
        };

        let _gate = self.gate.lock().await;
        if !self.is_current(token) {
            debug!("Transition to {} superseded before it started", target);
            return TransitionOutcome::Superseded;
        }

        let (applied, dirty) = {
            let state = self.state.borrow();
            (state.applied, state.dirty)
        };
        match applied {
            Some(from) if from == target => {
                if dirty {
                    self.restore(surface, target)
                } else {
                    TransitionOutcome::Unchanged
                }
            }
            Some(ChartType::Column) => self.column_to_line(surface, token).await,
            Some(ChartType::Line) => self.line_to_column(surface, token).await,
            None => self.restore(surface, target),
        }
    }

    /// Re-fit the chart to its container and move the marker to the new
    /// projection of the last data point.
    pub async fn relayout(&self) {
        let Some(surface) = self.surface.get() else {
            return;
        };
        let _gate = self.gate.lock().await;
        surface.resize();

        let (applied, dirty) = {
            let state = self.state.borrow();
            (state.applied, state.dirty)
        };
        let Some(chart_type) = applied else {
            return;
        };
        if dirty {
            return;
        }
        if let Some(at) = self.marker_position(surface, chart_type) {
            surface.set_option(&options::marker_move_option(&self.config, at));
        }
    }

    /// Where the marker goes for `chart_type`, if the last point can be projected.
    pub fn marker_position(&self, surface: &S, chart_type: ChartType) -> Option<Point> {
        let Some((label, value)) = self.config.data.last_sample() else {
            debug!("No current-period sample to mark");
            return None;
        };
        let projected = surface.convert_to_pixel(label, value)?;
        Some(options::place_marker(
            projected,
            chart_type,
            self.config.column_marker_offset,
        ))
    }

    async fn column_to_line(&self, surface: &S, token: u64) -> TransitionOutcome {
        self.hide_marker(surface);

        let finished = surface.on_finished();
        surface.set_option(&options::collapse_option(&self.config));
        self.wait_bounded(finished, self.config.timings.finish_timeout(), "Bar collapse")
            .await;

        if !self.is_current(token) {
            debug!("COLUMN -> LINE superseded after bar collapse");
            return TransitionOutcome::Superseded;
        }
        self.apply_series(surface, ChartType::Line);
        info!("Chart transition COLUMN -> LINE complete");
        TransitionOutcome::Completed {
            from: ChartType::Column,
            to: ChartType::Line,
        }
    }

    async fn line_to_column(&self, surface: &S, token: u64) -> TransitionOutcome {
        self.hide_marker(surface);
        self.shrink_clips(surface).await;

        if !self.is_current(token) {
            debug!("LINE -> COLUMN superseded after clip shrink");
            return TransitionOutcome::Superseded;
        }
        self.apply_series(surface, ChartType::Column);
        info!("Chart transition LINE -> COLUMN complete");
        TransitionOutcome::Completed {
            from: ChartType::Line,
            to: ChartType::Column,
        }
    }

    /// Undo a half-finished transition: unshrink the clip paths and put the
    /// target series and marker back.
    fn restore(&self, surface: &S, target: ChartType) -> TransitionOutcome {
        if let Some(shapes) = surface.clip_shapes() {
            let reset = options::reset_vars();
            for shape in &shapes {
                self.tweener.set(&shape.handle, &reset);
            }
        }
        self.apply_series(surface, target);
        info!("Chart restored to {}", target);
        TransitionOutcome::Restored(target)
    }

    /// Shrink every clip shape to zero width around its left edge, all at once.
    async fn shrink_clips(&self, surface: &S) {
        let shapes = match surface.clip_shapes() {
            Some(shapes) if !shapes.is_empty() => shapes,
            Some(_) => {
                debug!("No clip shapes rendered, skipping shrink");
                return;
            }
            None => {
                debug!("Chart has no SVG output, skipping shrink");
                return;
            }
        };

        let shrink = options::shrink_vars(&self.config.timings);
        let tweens: Vec<_> = shapes
            .iter()
            .map(|shape| {
                self.tweener
                    .set(&shape.handle, &options::pivot_vars(shape.bbox.left_centre()));
                self.tweener.to(&shape.handle, &shrink)
            })
            .collect();
        debug!("Shrinking {} clip shapes", tweens.len());

        self.wait_bounded(
            future::join_all(tweens),
            self.config.timings.shrink_timeout(),
            "Clip shrink",
        )
        .await;
    }

    fn hide_marker(&self, surface: &S) {
        self.state.borrow_mut().dirty = true;
        surface.set_option(&options::hide_marker_option(&self.config));
    }

    fn apply_series(&self, surface: &S, chart_type: ChartType) {
        let marker: Vec<Value> = match self.marker_position(surface, chart_type) {
            Some(at) => vec![options::marker_graphic(
                &self.config,
                at,
                self.config.timings.marker_delay_ms(chart_type),
            )],
            None => Vec::new(),
        };
        surface.set_option(&options::series_update(&self.config, chart_type, marker));

        let mut state = self.state.borrow_mut();
        state.applied = Some(chart_type);
        state.dirty = false;
    }

    fn is_current(&self, token: u64) -> bool {
        self.state.borrow().generation == token
    }

    async fn wait_bounded<F: Future>(&self, pending: F, limit: Duration, what: &str) {
        let pending = pin!(pending);
        if let Either::Right(_) = future::select(pending, self.clock.sleep(limit)).await {
            warn!(
                "{} did not finish within {} ms, forcing the pending update",
                what,
                limit.as_millis()
            );
        }
    }
}
