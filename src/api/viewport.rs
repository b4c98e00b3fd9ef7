use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    Axis, AxisLimits, Crosshair, CrosshairMode, RenderStrategy, ScrollbarMapper, SeriesStore,
    ViewRange,
};

/// How a viewport claims vertical space in the host layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Stretch to fill the remaining container height.
    FillParent,
    /// Fixed pixel height.
    FixedHeight(u32),
}

/// One chart surface: axis limits, crosshair, scrollbar tracks, and the data
/// series drawn on it.
///
/// Every mutating operation is total. Invalid parameters are logged and
/// ignored so one bad gesture never poisons the surface.
#[derive(Debug, Clone)]
pub struct Viewport {
    id: String,
    pub x_limits: AxisLimits,
    pub y_limits: AxisLimits,
    pub crosshair: Crosshair,
    pub visible: bool,
    pub layout: LayoutMode,
    pub series: SeriesStore,
    pub x_scroll: ScrollbarMapper,
    pub y_scroll: ScrollbarMapper,
    /// X sample positions of the last load, backing the horizontal scrollbar.
    nav_x: Vec<f64>,
    /// Y sample positions of the last load, backing the vertical scrollbar.
    nav_y: Vec<f64>,
    strategy: Option<RenderStrategy>,
}

impl Viewport {
    #[must_use]
    pub fn new(id: impl Into<String>, layout: LayoutMode) -> Self {
        Self {
            id: id.into(),
            x_limits: AxisLimits::default(),
            y_limits: AxisLimits::default(),
            crosshair: Crosshair::default(),
            visible: true,
            layout,
            series: SeriesStore::new(),
            x_scroll: ScrollbarMapper::new(),
            y_scroll: ScrollbarMapper::new(),
            nav_x: Vec::new(),
            nav_y: Vec::new(),
            strategy: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn limits(&self, axis: Axis) -> AxisLimits {
        match axis {
            Axis::X => self.x_limits,
            Axis::Y => self.y_limits,
        }
    }

    /// Replaces one axis interval. Inverted or non-finite bounds are logged
    /// and dropped. A direct limit change makes the scrollbar tracks stale.
    pub fn set_limits(&mut self, axis: Axis, min: f64, max: f64) {
        match AxisLimits::new(min, max) {
            Ok(limits) => {
                match axis {
                    Axis::X => self.x_limits = limits,
                    Axis::Y => self.y_limits = limits,
                }
                self.x_scroll.invalidate();
                self.y_scroll.invalidate();
            }
            Err(err) => {
                warn!(viewport = %self.id, ?axis, %err, "ignoring invalid limits");
            }
        }
    }

    pub(crate) fn copy_limits(&mut self, x: AxisLimits, y: AxisLimits) {
        self.x_limits = x;
        self.y_limits = y;
        self.x_scroll.invalidate();
        self.y_scroll.invalidate();
    }

    /// Rescales one axis around its center.
    pub fn zoom(&mut self, axis: Axis, factor: f64) {
        let result = self.limits(axis).zoom(factor);
        self.apply(axis, result, "zoom");
    }

    /// Rescales one axis keeping `anchor` fixed. The wheel-zoom path.
    pub fn zoom_around(&mut self, axis: Axis, factor: f64, anchor: f64) {
        let result = self.limits(axis).zoom_around(factor, anchor);
        self.apply(axis, result, "zoom_around");
    }

    /// Shifts one axis by a signed fraction of its span.
    pub fn pan(&mut self, axis: Axis, fraction: f64) {
        let result = self.limits(axis).pan(fraction);
        self.apply(axis, result, "pan");
    }

    fn apply(&mut self, axis: Axis, result: crate::error::PlotResult<AxisLimits>, op: &str) {
        match result {
            Ok(limits) => {
                match axis {
                    Axis::X => self.x_limits = limits,
                    Axis::Y => self.y_limits = limits,
                }
                self.x_scroll.invalidate();
                self.y_scroll.invalidate();
            }
            Err(err) => warn!(viewport = %self.id, ?axis, op, %err, "ignoring invalid gesture"),
        }
    }

    /// Rescales one axis to the full bounds of the loaded series. No-op when
    /// the store is empty.
    pub fn reset_axis(&mut self, axis: Axis) {
        let bounds = match axis {
            Axis::X => self.series.x_bounds(),
            Axis::Y => self.series.y_bounds(),
        };
        let Some((min, max)) = bounds else {
            debug!(viewport = %self.id, ?axis, "reset skipped, no data");
            return;
        };
        self.apply(axis, AxisLimits::from_bounds(min, max), "reset_axis");
    }

    /// Resets both axes to the data bounds.
    pub fn reset_all(&mut self) {
        self.reset_axis(Axis::X);
        self.reset_axis(Axis::Y);
    }

    /// Rescales the opposite axis to its data bounds. Applied after scrolls
    /// so the freshly exposed window stays fully visible.
    pub fn autoscale(&mut self, axis: Axis) {
        self.reset_axis(axis);
    }

    /// Records the sample positions backing the scrollbars and configures
    /// both tracks from the initial view window.
    pub fn configure_navigation(&mut self, x: Vec<f64>, y: Vec<f64>, view_range: Option<ViewRange>) {
        self.x_scroll.configure(view_range, &x);
        self.y_scroll.configure(None, &y);
        self.nav_x = x;
        self.nav_y = y;
    }

    /// Applies a scrollbar move on one axis. Returns true when the view
    /// window changed. The thumb is clamped to this viewport's own track and
    /// the opposite axis autoscales to keep the exposed window in frame.
    pub fn apply_scroll(&mut self, axis: Axis, new_index: usize) -> bool {
        let window = match axis {
            Axis::X => self.x_scroll.on_user_scroll(new_index, &self.nav_x),
            Axis::Y => self.y_scroll.on_user_scroll(new_index, &self.nav_y),
        };
        let Some((min, max)) = window else {
            return false;
        };
        match AxisLimits::from_bounds(min, max) {
            Ok(limits) => {
                match axis {
                    Axis::X => self.x_limits = limits,
                    Axis::Y => self.y_limits = limits,
                }
                self.autoscale(axis.opposite());
                true
            }
            Err(err) => {
                warn!(viewport = %self.id, ?axis, %err, "scroll produced invalid window");
                false
            }
        }
    }

    #[must_use]
    pub fn nav_x(&self) -> &[f64] {
        &self.nav_x
    }

    #[must_use]
    pub fn nav_y(&self) -> &[f64] {
        &self.nav_y
    }

    #[must_use]
    pub fn strategy(&self) -> Option<RenderStrategy> {
        self.strategy
    }

    pub(crate) fn set_strategy(&mut self, strategy: RenderStrategy) {
        self.strategy = Some(strategy);
    }

    pub fn set_crosshair_position(&mut self, x: f64, y: f64) {
        self.crosshair.set_position(x, y);
    }

    pub fn set_crosshair_visible(&mut self, visible: bool) {
        self.crosshair.set_visible(visible);
    }

    pub fn set_crosshair_mode(&mut self, mode: CrosshairMode) {
        self.crosshair.set_mode(mode);
    }
}
