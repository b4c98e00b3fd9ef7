use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Axis selector used by zoom/pan/reset operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// One axis interval of a viewport's data-to-view transform.
///
/// Invariant: `min < max` and both bounds are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    min: f64,
    max: f64,
}

impl AxisLimits {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(PlotError::InvalidLimits { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds limits from data bounds, widening degenerate flat ranges.
    pub fn from_bounds(min: f64, max: f64) -> PlotResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PlotError::InvalidLimits { min, max });
        }
        if min == max {
            return Self::new(min - 0.5, max + 0.5);
        }
        Self::new(min, max)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Rescales the interval around its current center.
    ///
    /// `factor < 1.0` zooms in, `factor > 1.0` zooms out. Used for
    /// button-driven zoom where no cursor anchor exists.
    pub fn zoom(self, factor: f64) -> PlotResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(PlotError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        let center = self.center();
        let half = self.span() * factor / 2.0;
        Self::new(center - half, center + half)
    }

    /// Rescales the interval keeping `anchor` at the same relative position.
    ///
    /// The distance on each side of the anchor is multiplied by `factor`, so
    /// the anchor stays fixed on screen. This is the wheel-zoom path; button
    /// zoom goes through [`AxisLimits::zoom`] instead.
    pub fn zoom_around(self, factor: f64, anchor: f64) -> PlotResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(PlotError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor.is_finite() {
            return Err(PlotError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        let below = (anchor - self.min) * factor;
        let above = (self.max - anchor) * factor;
        Self::new(anchor - below, anchor + above)
    }

    /// Shifts both bounds by `fraction` of the current span; fraction is signed.
    pub fn pan(self, fraction: f64) -> PlotResult<Self> {
        if !fraction.is_finite() {
            return Err(PlotError::InvalidData(
                "pan fraction must be finite".to_owned(),
            ));
        }
        let distance = self.span() * fraction;
        Self::new(self.min + distance, self.max + distance)
    }

    /// Moves the interval so its center lands on `center`, preserving the span.
    pub fn recenter(self, center: f64) -> PlotResult<Self> {
        if !center.is_finite() {
            return Err(PlotError::InvalidData(
                "center must be finite".to_owned(),
            ));
        }
        let half = self.span() / 2.0;
        Self::new(center - half, center + half)
    }
}

impl Default for AxisLimits {
    /// Placeholder unit interval used before any data is loaded.
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}
