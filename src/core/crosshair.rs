use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrosshairMode {
    /// Crosshair snaps to the nearest data sample on the X axis.
    Magnet,
    /// Crosshair follows the raw data-space coordinate without snapping.
    Normal,
    /// Crosshair remains hidden regardless of pointer movement.
    Hidden,
}

/// Per-viewport crosshair marker in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crosshair {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
    pub mode: CrosshairMode,
}

impl Default for Crosshair {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            visible: false,
            mode: CrosshairMode::Normal,
        }
    }
}

impl Crosshair {
    pub fn set_position(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.x = x;
            self.y = y;
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible && self.mode != CrosshairMode::Hidden;
    }

    pub fn set_mode(&mut self, mode: CrosshairMode) {
        self.mode = mode;
        if mode == CrosshairMode::Hidden {
            self.visible = false;
        }
    }
}
