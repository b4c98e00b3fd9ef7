use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::api::config::{LoadedSeries, PlotConfiguration, SeriesLoader};
use crate::api::lifecycle::LifecycleCommand;
use crate::api::policies::{ScrollbarSyncMode, SyncPolicies, WheelAxisMode};
use crate::api::status::StatusSink;
use crate::api::viewport::{LayoutMode, Viewport};
use crate::core::{
    Axis, AxisLimits, Color, CrosshairMode, FilterResult, LineSeries, select_render_strategy,
    StrategyThresholds,
};
use crate::render::RedrawHandler;

/// Pointer button driving a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Identifier of the primary viewport, created at construction and protected
/// from removal.
pub const PRIMARY_VIEWPORT_ID: &str = "0";

/// Default fixed height of the primary viewport in pixels.
pub const PRIMARY_HEIGHT: u32 = 600;

/// Default fixed height of secondary viewports in pixels.
pub const SECONDARY_HEIGHT: u32 = 500;

/// Assumed viewport width for fit-to-screen filtering.
pub const DEFAULT_WIDTH_PX: usize = 1000;

/// Samples per horizontal pixel considered visually dense enough.
pub const POINTS_PER_PIXEL: usize = 2;

/// Registry of viewports plus the synchronization rules between them.
///
/// Not thread safe by design: the set belongs to the single UI thread that
/// drives all interaction. Callers on other threads must marshal onto it.
///
/// Every operation is total. Bad identifiers and bad parameters are logged
/// and absorbed rather than returned as errors.
pub struct ViewportSet<R: RedrawHandler, S: StatusSink> {
    viewports: IndexMap<String, Viewport>,
    policies: SyncPolicies,
    thresholds: StrategyThresholds,
    redraw: R,
    status: S,
    maximized: Option<String>,
    /// Visibility each viewport had before the current maximize, restored on
    /// toggle-back.
    hidden_by_maximize: Vec<(String, bool)>,
}

impl<R: RedrawHandler, S: StatusSink> ViewportSet<R, S> {
    /// Creates the set with the protected primary viewport already present.
    #[must_use]
    pub fn new(redraw: R, status: S, policies: SyncPolicies) -> Self {
        let mut viewports = IndexMap::new();
        viewports.insert(
            PRIMARY_VIEWPORT_ID.to_owned(),
            Viewport::new(PRIMARY_VIEWPORT_ID, LayoutMode::FixedHeight(PRIMARY_HEIGHT)),
        );
        Self {
            viewports,
            policies,
            thresholds: StrategyThresholds::default(),
            redraw,
            status,
            maximized: None,
            hidden_by_maximize: Vec::new(),
        }
    }

    #[must_use]
    pub fn policies(&self) -> &SyncPolicies {
        &self.policies
    }

    pub fn set_policies(&mut self, policies: SyncPolicies) {
        self.policies = policies;
    }

    pub fn set_thresholds(&mut self, thresholds: StrategyThresholds) {
        self.thresholds = thresholds;
    }

    #[must_use]
    pub fn redraw_handler(&self) -> &R {
        &self.redraw
    }

    #[must_use]
    pub fn status_sink(&self) -> &S {
        &self.status
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.viewports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewports.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.viewports.contains_key(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Viewport> {
        self.viewports.get(id)
    }

    #[must_use]
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Viewport> {
        self.viewports.get_mut(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.viewports.keys().map(String::as_str)
    }

    #[must_use]
    pub fn maximized(&self) -> Option<&str> {
        self.maximized.as_deref()
    }

    /// Adds a secondary viewport. Duplicate identifiers fail the creation.
    pub fn add_viewport(&mut self, id: &str) -> bool {
        if self.viewports.contains_key(id) {
            warn!(viewport = id, "viewport id already exists, not created");
            return false;
        }
        self.viewports.insert(
            id.to_owned(),
            Viewport::new(id, LayoutMode::FixedHeight(SECONDARY_HEIGHT)),
        );
        debug!(viewport = id, "viewport created");
        true
    }

    /// Removes a secondary viewport. The primary is protected; closing the
    /// maximized viewport restores the others first. When only the primary
    /// remains it expands to fill the container.
    pub fn close_viewport(&mut self, id: &str) -> bool {
        if id == PRIMARY_VIEWPORT_ID {
            warn!("primary viewport cannot be closed");
            return false;
        }
        if !self.viewports.contains_key(id) {
            warn!(viewport = id, "close requested for unknown viewport");
            return false;
        }

        if self.maximized.as_deref() == Some(id) {
            self.restore_maximized();
        }
        self.hidden_by_maximize.retain(|(hidden, _)| hidden != id);
        self.viewports.shift_remove(id);
        info!(viewport = id, "viewport closed");

        self.auto_expand_primary();
        true
    }

    fn auto_expand_primary(&mut self) {
        if self.viewports.len() == 1 {
            if let Some(primary) = self.viewports.get_mut(PRIMARY_VIEWPORT_ID) {
                primary.layout = LayoutMode::FillParent;
                primary.visible = true;
                debug!("primary viewport expanded to fill layout");
            }
        }
    }

    /// Maximizes one viewport, hiding every other non-primary viewport, or
    /// restores the previous layout when the viewport is already maximized.
    /// The primary viewport stays visible throughout. Only one viewport can
    /// be maximized at a time; maximizing a second restores the first before
    /// taking effect.
    pub fn toggle_maximize(&mut self, id: &str) -> bool {
        if !self.viewports.contains_key(id) {
            warn!(viewport = id, "maximize requested for unknown viewport");
            return false;
        }

        if self.maximized.as_deref() == Some(id) {
            self.restore_maximized();
            return true;
        }

        if self.maximized.is_some() {
            self.restore_maximized();
        }

        self.hidden_by_maximize = self
            .viewports
            .iter()
            .filter(|(other, _)| other.as_str() != id && other.as_str() != PRIMARY_VIEWPORT_ID)
            .map(|(other, viewport)| (other.clone(), viewport.visible))
            .collect();
        for (other, viewport) in &mut self.viewports {
            if other == PRIMARY_VIEWPORT_ID {
                continue;
            }
            viewport.visible = other == id;
        }
        self.maximized = Some(id.to_owned());
        info!(viewport = id, "viewport maximized");
        true
    }

    fn restore_maximized(&mut self) {
        for (id, was_visible) in std::mem::take(&mut self.hidden_by_maximize) {
            if let Some(viewport) = self.viewports.get_mut(&id) {
                viewport.visible = was_visible;
            }
        }
        if let Some(id) = self.maximized.take() {
            info!(viewport = %id, "viewport restored from maximize");
        }
    }

    /// Hides every viewport except the primary.
    pub fn hide_all_secondary(&mut self) {
        for (id, viewport) in &mut self.viewports {
            if id != PRIMARY_VIEWPORT_ID {
                viewport.visible = false;
            }
        }
    }

    /// Shows every viewport except the primary.
    pub fn show_all_secondary(&mut self) {
        for (id, viewport) in &mut self.viewports {
            if id != PRIMARY_VIEWPORT_ID {
                viewport.visible = true;
            }
        }
    }

    /// Removes every viewport except the primary and expands it.
    pub fn delete_all_secondary(&mut self) {
        self.restore_maximized();
        self.viewports.retain(|id, _| id == PRIMARY_VIEWPORT_ID);
        self.auto_expand_primary();
        info!("all secondary viewports removed");
    }

    fn other_ids(&self, source: &str) -> SmallVec<[String; 8]> {
        self.viewports
            .keys()
            .filter(|id| id.as_str() != source)
            .cloned()
            .collect()
    }

    fn redraw_batch(&mut self, ids: &[String]) {
        let refs: SmallVec<[&str; 8]> = ids.iter().map(String::as_str).collect();
        self.redraw.request_redraw_batch(&refs);
    }

    /// Propagates a completed zoom or pan gesture from `source`.
    ///
    /// Pan synchronization recenters each target on the source center while
    /// preserving the target's own span. Zoom synchronization copies the
    /// source limits exactly. When both policies apply, the exact copy runs
    /// last and wins.
    pub fn sync_after_interaction(&mut self, source: &str) {
        let Some(src) = self.viewports.get(source) else {
            warn!(viewport = source, "sync requested for unknown viewport");
            return;
        };
        let (src_x, src_y) = (src.x_limits, src.y_limits);

        let mut touched: SmallVec<[String; 8]> = SmallVec::new();
        touched.push(source.to_owned());

        if self.policies.sync_pan || self.policies.sync_zoom {
            for id in self.other_ids(source) {
                let Some(target) = self.viewports.get_mut(&id) else {
                    continue;
                };
                if self.policies.sync_pan {
                    Self::recenter_on(target, src_x, src_y);
                }
                if self.policies.sync_zoom {
                    target.copy_limits(src_x, src_y);
                }
                touched.push(id);
            }
        }

        self.redraw_batch(&touched);
    }

    fn recenter_on(target: &mut Viewport, src_x: AxisLimits, src_y: AxisLimits) {
        match target.x_limits.recenter(src_x.center()) {
            Ok(limits) => target.x_limits = limits,
            Err(err) => warn!(viewport = target.id(), %err, "pan sync skipped on x"),
        }
        match target.y_limits.recenter(src_y.center()) {
            Ok(limits) => target.y_limits = limits,
            Err(err) => warn!(viewport = target.id(), %err, "pan sync skipped on y"),
        }
        target.x_scroll.invalidate();
        target.y_scroll.invalidate();
    }

    /// Applies a button zoom step on one axis of `source`, then propagates.
    pub fn button_zoom(&mut self, source: &str, axis: Axis, zoom_in: bool) {
        let factor = if zoom_in {
            self.policies.zoom_steps.button_in
        } else {
            self.policies.zoom_steps.button_out
        };
        let Some(viewport) = self.viewports.get_mut(source) else {
            warn!(viewport = source, "zoom requested for unknown viewport");
            return;
        };
        viewport.zoom(axis, factor);
        self.sync_after_interaction(source);
    }

    /// Applies a pan step on one axis of `source`, then propagates.
    pub fn pan_step(&mut self, source: &str, axis: Axis, fraction: f64) {
        let Some(viewport) = self.viewports.get_mut(source) else {
            warn!(viewport = source, "pan requested for unknown viewport");
            return;
        };
        viewport.pan(axis, fraction);
        self.sync_after_interaction(source);
    }

    /// Applies an anchored wheel zoom on `source`, restricted to the axes the
    /// wheel policy allows, then mirrors the resulting limits exactly when
    /// wheel synchronization is on. Mirroring always copies both axes; the
    /// axis restriction shapes only the source gesture.
    pub fn wheel_zoom(&mut self, source: &str, zoom_in: bool, anchor_x: f64, anchor_y: f64) {
        let factor = if zoom_in {
            self.policies.zoom_steps.wheel_in
        } else {
            self.policies.zoom_steps.wheel_out
        };
        let wheel_axis = self.policies.wheel_axis;
        let Some(viewport) = self.viewports.get_mut(source) else {
            warn!(viewport = source, "wheel zoom requested for unknown viewport");
            return;
        };

        match wheel_axis {
            WheelAxisMode::Both => {
                viewport.zoom_around(Axis::X, factor, anchor_x);
                viewport.zoom_around(Axis::Y, factor, anchor_y);
            }
            WheelAxisMode::XOnly => viewport.zoom_around(Axis::X, factor, anchor_x),
            WheelAxisMode::YOnly => viewport.zoom_around(Axis::Y, factor, anchor_y),
            WheelAxisMode::None => {}
        }

        let (src_x, src_y) = (viewport.x_limits, viewport.y_limits);
        let mut touched: SmallVec<[String; 8]> = SmallVec::new();
        touched.push(source.to_owned());

        if self.policies.sync_wheel {
            for id in self.other_ids(source) {
                if let Some(target) = self.viewports.get_mut(&id) {
                    target.copy_limits(src_x, src_y);
                    touched.push(id);
                }
            }
        }
        self.redraw_batch(&touched);
    }

    /// Propagates an in-progress drag from `source`.
    ///
    /// Left drags pan, so targets follow the recenter rule and keep their
    /// own spans; that path is governed by the pan policy. Right and middle
    /// drags rescale, so targets copy the source limits exactly; that path
    /// is governed by the drag policy. All affected viewports repaint in a
    /// single batch.
    pub fn drag_update(&mut self, source: &str, button: MouseButton) {
        let mirror = match button {
            MouseButton::Left => self.policies.sync_pan,
            MouseButton::Right | MouseButton::Middle => self.policies.sync_drag,
        };
        if !mirror {
            self.redraw_batch(&[source.to_owned()]);
            return;
        }
        let Some(src) = self.viewports.get(source) else {
            warn!(viewport = source, "drag update for unknown viewport");
            return;
        };
        let (src_x, src_y) = (src.x_limits, src.y_limits);

        let mut touched: SmallVec<[String; 8]> = SmallVec::new();
        touched.push(source.to_owned());

        for id in self.other_ids(source) {
            let Some(target) = self.viewports.get_mut(&id) else {
                continue;
            };
            match button {
                MouseButton::Left => Self::recenter_on(target, src_x, src_y),
                MouseButton::Right | MouseButton::Middle => target.copy_limits(src_x, src_y),
            }
            touched.push(id);
        }
        self.redraw_batch(&touched);
    }

    /// Snaps `x` to the nearest loaded sample position when the viewport is
    /// in magnet mode.
    fn snapped_x(viewport: &Viewport, x: f64) -> f64 {
        if viewport.crosshair.mode != CrosshairMode::Magnet {
            return x;
        }
        let nav = viewport.nav_x();
        if nav.is_empty() {
            return x;
        }

        // Loaded positions are ascending, so only the two neighbours of the
        // partition point can be nearest.
        let split = nav.partition_point(|&v| v < x);
        let mut candidates: SmallVec<[(OrderedFloat<f64>, f64); 2]> = SmallVec::new();
        if split > 0 {
            let v = nav[split - 1];
            candidates.push((OrderedFloat((x - v).abs()), v));
        }
        if split < nav.len() {
            let v = nav[split];
            candidates.push((OrderedFloat((x - v).abs()), v));
        }
        candidates
            .into_iter()
            .min_by_key(|item| item.0)
            .map_or(x, |(_, v)| v)
    }

    /// Moves the crosshair on `source` and mirrors the position to the other
    /// viewports when crosshair synchronization is on. Mirroring happens only
    /// between visible crosshairs on visible viewports.
    pub fn crosshair_moved(&mut self, source: &str, x: f64, y: f64) {
        let Some(viewport) = self.viewports.get_mut(source) else {
            warn!(viewport = source, "crosshair move for unknown viewport");
            return;
        };
        let snapped = Self::snapped_x(viewport, x);
        viewport.set_crosshair_position(snapped, y);
        let source_visible = viewport.crosshair.visible && viewport.visible;

        let mut touched: SmallVec<[String; 8]> = SmallVec::new();
        touched.push(source.to_owned());

        if self.policies.sync_crosshair && source_visible {
            for id in self.other_ids(source) {
                let Some(target) = self.viewports.get_mut(&id) else {
                    continue;
                };
                if !target.visible || !target.crosshair.visible {
                    continue;
                }
                let target_x = Self::snapped_x(target, snapped);
                target.set_crosshair_position(target_x, y);
                touched.push(id);
            }
        }
        self.redraw_batch(&touched);
    }

    /// Shows or hides the crosshair on every viewport.
    pub fn set_crosshair_visible_all(&mut self, visible: bool) {
        let ids: Vec<String> = self.viewports.keys().cloned().collect();
        for viewport in self.viewports.values_mut() {
            viewport.set_crosshair_visible(visible);
        }
        self.redraw_batch(&ids);
    }

    pub fn set_crosshair_mode_all(&mut self, mode: CrosshairMode) {
        for viewport in self.viewports.values_mut() {
            viewport.set_crosshair_mode(mode);
        }
    }

    /// Resets `source` to its data bounds; with reset synchronization on,
    /// every other viewport resets to its own bounds as well.
    pub fn reset_viewport(&mut self, source: &str) {
        let Some(viewport) = self.viewports.get_mut(source) else {
            warn!(viewport = source, "reset requested for unknown viewport");
            return;
        };
        viewport.reset_all();

        let mut touched: SmallVec<[String; 8]> = SmallVec::new();
        touched.push(source.to_owned());

        if self.policies.sync_reset {
            for id in self.other_ids(source) {
                if let Some(target) = self.viewports.get_mut(&id) {
                    target.reset_all();
                    touched.push(id);
                }
            }
        }
        self.redraw_batch(&touched);
    }

    /// Resets every viewport to its own data bounds.
    pub fn reset_all_viewports(&mut self) {
        let ids: Vec<String> = self.viewports.keys().cloned().collect();
        for viewport in self.viewports.values_mut() {
            viewport.reset_all();
        }
        self.redraw_batch(&ids);
    }

    /// Resets one axis on every viewport.
    pub fn reset_axis_all(&mut self, axis: Axis) {
        let ids: Vec<String> = self.viewports.keys().cloned().collect();
        for viewport in self.viewports.values_mut() {
            viewport.reset_axis(axis);
        }
        self.redraw_batch(&ids);
    }

    /// Applies the same centered zoom to one axis of every viewport.
    pub fn zoom_all(&mut self, axis: Axis, factor: f64) {
        let ids: Vec<String> = self.viewports.keys().cloned().collect();
        for viewport in self.viewports.values_mut() {
            viewport.zoom(axis, factor);
        }
        self.redraw_batch(&ids);
    }

    /// Applies the same fractional pan to one axis of every viewport.
    pub fn pan_all(&mut self, axis: Axis, fraction: f64) {
        let ids: Vec<String> = self.viewports.keys().cloned().collect();
        for viewport in self.viewports.values_mut() {
            viewport.pan(axis, fraction);
        }
        self.redraw_batch(&ids);
    }

    /// Copies the exact limits of `source` onto every other viewport.
    pub fn copy_limits_to_all(&mut self, source: &str) {
        let Some(src) = self.viewports.get(source) else {
            warn!(viewport = source, "copy limits from unknown viewport");
            return;
        };
        let (src_x, src_y) = (src.x_limits, src.y_limits);

        let mut touched: SmallVec<[String; 8]> = SmallVec::new();
        touched.push(source.to_owned());
        for id in self.other_ids(source) {
            if let Some(target) = self.viewports.get_mut(&id) {
                target.copy_limits(src_x, src_y);
                touched.push(id);
            }
        }
        self.redraw_batch(&touched);
    }

    /// Applies a horizontal scrollbar move on `source` and mirrors it per the
    /// scrollbar sync policy. Each mirrored viewport clamps the thumb to its
    /// own track and autoscales its Y axis to the exposed window.
    pub fn scroll_x(&mut self, source: &str, new_index: usize) {
        self.scroll_axis(source, new_index, Axis::X);
    }

    /// Vertical counterpart of [`ViewportSet::scroll_x`].
    pub fn scroll_y(&mut self, source: &str, new_index: usize) {
        self.scroll_axis(source, new_index, Axis::Y);
    }

    fn scroll_axis(&mut self, source: &str, new_index: usize, axis: Axis) {
        let Some(viewport) = self.viewports.get_mut(source) else {
            warn!(viewport = source, "scroll for unknown viewport");
            return;
        };

        let mirror = match (axis, self.policies.scrollbar_sync) {
            (_, ScrollbarSyncMode::Both) => true,
            (Axis::X, ScrollbarSyncMode::X) => true,
            (Axis::Y, ScrollbarSyncMode::Y) => true,
            _ => false,
        };

        let mut touched: SmallVec<[String; 8]> = SmallVec::new();
        if viewport.apply_scroll(axis, new_index) {
            touched.push(source.to_owned());
        }

        if mirror {
            for id in self.other_ids(source) {
                let Some(target) = self.viewports.get_mut(&id) else {
                    continue;
                };
                if target.apply_scroll(axis, new_index) {
                    touched.push(id);
                }
            }
        }
        self.redraw_batch(&touched);
    }

    /// Loads one filtered dataset into every viewport as its base line
    /// series, selects the render strategy, configures scrollbars, and
    /// announces the result through the status sink.
    ///
    /// Strategy selection runs on every load and is never carried over from
    /// a previous dataset.
    pub fn load_shared(&mut self, result: &FilterResult) {
        let strategy = select_render_strategy(result.retained_count, &self.thresholds);
        let ids: Vec<String> = self.viewports.keys().cloned().collect();

        for viewport in self.viewports.values_mut() {
            let series = match LineSeries::new(result.x.clone(), result.y.clone(), None, None) {
                Ok(series) => series,
                Err(err) => {
                    warn!(viewport = viewport.id(), %err, "shared load skipped");
                    continue;
                }
            };
            viewport.series.set_line(0, series);
            viewport.set_strategy(strategy);

            match result.view_range {
                Some(range) => viewport.set_limits(Axis::X, range.min, range.max),
                None => viewport.reset_axis(Axis::X),
            }
            viewport.reset_axis(Axis::Y);
            viewport.configure_navigation(result.x.clone(), result.y.clone(), result.view_range);
        }

        self.status.notify(&result.description);
        info!(
            points = result.retained_count,
            ?strategy,
            "shared dataset loaded into all viewports"
        );
        self.redraw_batch(&ids);
    }

    /// Builds the viewport layout described by `config` and loads each
    /// viewport's series through `loader`, in ascending series id order.
    /// A series that fails to load is skipped with a warning; the rest of the
    /// document still applies.
    pub fn apply_config<L: SeriesLoader>(&mut self, config: &PlotConfiguration, loader: &mut L) {
        for plot in &config.plots {
            if plot.plot_id != PRIMARY_VIEWPORT_ID && !self.contains(&plot.plot_id) {
                self.add_viewport(&plot.plot_id);
            }

            let Some(viewport) = self.viewports.get_mut(&plot.plot_id) else {
                continue;
            };
            if let Some(height) = plot.height {
                viewport.layout = LayoutMode::FixedHeight(height);
            }

            let mut definitions: Vec<_> = plot.data.iter().collect();
            definitions.sort_by_key(|def| def.data_id);

            for definition in definitions {
                let loaded = match loader.load(definition) {
                    Ok(loaded) => loaded,
                    Err(err) => {
                        warn!(
                            plot = %plot.plot_id,
                            series = definition.data_id,
                            name = %definition.name,
                            %err,
                            "series load failed, skipping"
                        );
                        continue;
                    }
                };
                Self::apply_loaded(viewport, definition.data_id, &definition.color, loaded);
            }

            let point_count = viewport.series.max_point_count();
            viewport.set_strategy(select_render_strategy(point_count, &self.thresholds));
            viewport.reset_all();

            self.status
                .notify(&format!("{} loaded", plot.plot_name));
        }

        let ids: Vec<String> = self.viewports.keys().cloned().collect();
        self.redraw_batch(&ids);
    }

    fn apply_loaded(
        viewport: &mut Viewport,
        data_id: usize,
        color: &Option<String>,
        loaded: LoadedSeries,
    ) {
        match loaded {
            LoadedSeries::Ohlc(bars) => viewport.series.set_ohlc(bars),
            LoadedSeries::Volume(bars) => viewport.series.set_volume(bars),
            LoadedSeries::Histogram(bars) => viewport.series.set_histogram(bars),
            LoadedSeries::Line(mut series) => {
                if series.color.is_none() {
                    if let Some(hex) = color {
                        match Color::from_hex(hex) {
                            Ok(parsed) => series.color = Some(parsed),
                            Err(err) => {
                                warn!(viewport = viewport.id(), %err, "series color ignored");
                            }
                        }
                    }
                }
                viewport.series.set_line(data_id, series);
            }
        }
    }

    /// Removes every series from one viewport and repaints it.
    pub fn clear_viewport_data(&mut self, id: &str) -> bool {
        let Some(viewport) = self.viewports.get_mut(id) else {
            warn!(viewport = id, "clear requested for unknown viewport");
            return false;
        };
        viewport.series.clear_all();
        viewport.x_scroll.invalidate();
        viewport.y_scroll.invalidate();
        self.redraw_batch(&[id.to_owned()]);
        true
    }

    /// Removes every series from every viewport.
    pub fn clear_all_data(&mut self) {
        let ids: Vec<String> = self.viewports.keys().cloned().collect();
        for viewport in self.viewports.values_mut() {
            viewport.series.clear_all();
            viewport.x_scroll.invalidate();
            viewport.y_scroll.invalidate();
        }
        info!("all viewport data cleared");
        self.redraw_batch(&ids);
    }

    /// Forwards a host lifecycle transition to the status sink.
    pub fn lifecycle(&mut self, command: LifecycleCommand) {
        info!(?command, "lifecycle transition");
        self.status.notify(command.message());
    }
}
