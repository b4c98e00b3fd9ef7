use serde::{Deserialize, Serialize};

/// Which scrollbar movements are mirrored across viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollbarSyncMode {
    X,
    Y,
    Both,
    None,
}

/// Axes a wheel gesture is allowed to zoom on the source viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelAxisMode {
    Both,
    XOnly,
    YOnly,
    None,
}

/// Per-gesture zoom factors.
///
/// Button zoom is coarser than wheel zoom. Factors below 1 narrow the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomStepConfig {
    pub button_in: f64,
    pub button_out: f64,
    pub wheel_in: f64,
    pub wheel_out: f64,
}

impl Default for ZoomStepConfig {
    fn default() -> Self {
        Self {
            button_in: 0.8,
            button_out: 1.25,
            wheel_in: 0.85,
            wheel_out: 1.15,
        }
    }
}

/// Master switches for cross-viewport synchronization.
///
/// Each flag gates one interaction family independently. Defaults leave the
/// gesture families off; a coordinated layout opts in per flag. Crosshair
/// mirroring defaults on, since it is otherwise governed only by crosshair
/// visibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyncPolicies {
    pub sync_zoom: bool,
    pub sync_pan: bool,
    pub sync_wheel: bool,
    pub sync_drag: bool,
    pub sync_reset: bool,
    pub sync_crosshair: bool,
    pub scrollbar_sync: ScrollbarSyncMode,
    pub wheel_axis: WheelAxisMode,
    pub zoom_steps: ZoomStepConfig,
}

impl Default for SyncPolicies {
    fn default() -> Self {
        Self {
            sync_zoom: false,
            sync_pan: false,
            sync_wheel: false,
            sync_drag: false,
            sync_reset: false,
            sync_crosshair: true,
            scrollbar_sync: ScrollbarSyncMode::None,
            wheel_axis: WheelAxisMode::Both,
            zoom_steps: ZoomStepConfig::default(),
        }
    }
}

impl SyncPolicies {
    /// Enables every synchronization family, mirroring both scrollbars.
    #[must_use]
    pub fn all_on() -> Self {
        Self {
            sync_zoom: true,
            sync_pan: true,
            sync_wheel: true,
            sync_drag: true,
            sync_reset: true,
            sync_crosshair: true,
            scrollbar_sync: ScrollbarSyncMode::Both,
            wheel_axis: WheelAxisMode::Both,
            zoom_steps: ZoomStepConfig::default(),
        }
    }
}
