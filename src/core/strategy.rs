use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Rendering mode chosen per viewport after every full data load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderStrategy {
    /// Every sample is drawn. Chosen for datasets up to the high-fidelity
    /// threshold.
    HighFidelity,
    /// Samples are decimated against the current view before drawing.
    LevelOfDetail,
}

/// Dataset-size thresholds driving [`select_render_strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyThresholds {
    /// Largest dataset still rendered sample-for-sample.
    pub high_fidelity_max: usize,
    /// Largest dataset the level-of-detail path is rated for. Bigger inputs
    /// still use level-of-detail, with a warning.
    pub lod_max: usize,
}

impl Default for StrategyThresholds {
    fn default() -> Self {
        Self {
            high_fidelity_max: 50_000,
            lod_max: 10_000_000,
        }
    }
}

/// Picks the rendering mode for a dataset of `point_count` samples.
///
/// Total over all inputs. The decision is recomputed on every load and never
/// cached, so growing a dataset past a threshold switches mode on the next
/// load.
#[must_use]
pub fn select_render_strategy(
    point_count: usize,
    thresholds: &StrategyThresholds,
) -> RenderStrategy {
    if point_count <= thresholds.high_fidelity_max {
        debug!(point_count, "selected high-fidelity rendering");
        return RenderStrategy::HighFidelity;
    }

    if point_count > thresholds.lod_max {
        warn!(
            point_count,
            lod_max = thresholds.lod_max,
            "dataset exceeds level-of-detail rating, rendering anyway"
        );
    } else {
        debug!(point_count, "selected level-of-detail rendering");
    }
    RenderStrategy::LevelOfDetail
}
