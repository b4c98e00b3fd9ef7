//! Draw planning for line series.
//!
//! High-fidelity plans carry every sample. Level-of-detail plans decimate
//! against the current X window: the visible span is cut into pixel-sized
//! buckets and each bucket contributes its min and max sample, which
//! preserves the visual envelope of the line.

use tracing::debug;

use crate::core::{AxisLimits, RenderStrategy};

/// Points handed to the backend for one line series, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlan {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub decimated: bool,
}

impl LinePlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Builds the draw plan for one line series under the given strategy.
///
/// Recomputed on every redraw for level-of-detail viewports, since the plan
/// depends on the current X limits. `bucket_count` is typically the viewport
/// width in pixels.
#[must_use]
pub fn plan_line(
    xs: &[f64],
    ys: &[f64],
    strategy: RenderStrategy,
    x_limits: AxisLimits,
    bucket_count: usize,
) -> LinePlan {
    if xs.is_empty() || xs.len() != ys.len() {
        return LinePlan {
            xs: Vec::new(),
            ys: Vec::new(),
            decimated: false,
        };
    }

    match strategy {
        RenderStrategy::HighFidelity => LinePlan {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            decimated: false,
        },
        RenderStrategy::LevelOfDetail => decimate_min_max(xs, ys, x_limits, bucket_count.max(1)),
    }
}

/// Index range of samples whose X falls inside the limits, padded by one
/// sample on each side so lines enter and leave the view cleanly.
fn visible_span(xs: &[f64], x_limits: AxisLimits) -> (usize, usize) {
    let start = xs.partition_point(|&x| x < x_limits.min());
    let end = xs.partition_point(|&x| x <= x_limits.max());
    (start.saturating_sub(1), (end + 1).min(xs.len()))
}

fn bucket_extremes(xs: &[f64], ys: &[f64], lo: usize, hi: usize) -> Option<(usize, usize)> {
    if lo >= hi {
        return None;
    }
    let mut min_i = lo;
    let mut max_i = lo;
    for i in lo..hi {
        if ys[i] < ys[min_i] {
            min_i = i;
        }
        if ys[i] > ys[max_i] {
            max_i = i;
        }
    }
    Some((min_i, max_i))
}

fn decimate_min_max(xs: &[f64], ys: &[f64], x_limits: AxisLimits, buckets: usize) -> LinePlan {
    let (start, end) = visible_span(xs, x_limits);
    let visible = end - start;

    // Two retained samples per bucket; below that the full slice is cheaper.
    if visible <= buckets * 2 {
        return LinePlan {
            xs: xs[start..end].to_vec(),
            ys: ys[start..end].to_vec(),
            decimated: false,
        };
    }

    let per_bucket = visible.div_ceil(buckets);

    #[cfg(feature = "parallel-decimation")]
    let extremes: Vec<(usize, usize)> = {
        use rayon::prelude::*;
        (0..buckets)
            .into_par_iter()
            .filter_map(|b| {
                let lo = start + b * per_bucket;
                let hi = (lo + per_bucket).min(end);
                bucket_extremes(xs, ys, lo, hi)
            })
            .collect()
    };

    #[cfg(not(feature = "parallel-decimation"))]
    let extremes: Vec<(usize, usize)> = (0..buckets)
        .filter_map(|b| {
            let lo = start + b * per_bucket;
            let hi = (lo + per_bucket).min(end);
            bucket_extremes(xs, ys, lo, hi)
        })
        .collect();

    let mut out_x = Vec::with_capacity(extremes.len() * 2);
    let mut out_y = Vec::with_capacity(extremes.len() * 2);
    for (min_i, max_i) in extremes {
        // Keep X order within the bucket so the polyline stays monotone.
        let (first, second) = if min_i <= max_i {
            (min_i, max_i)
        } else {
            (max_i, min_i)
        };
        out_x.push(xs[first]);
        out_y.push(ys[first]);
        if second != first {
            out_x.push(xs[second]);
            out_y.push(ys[second]);
        }
    }

    debug!(
        visible,
        retained = out_x.len(),
        "decimated line for level-of-detail draw"
    );
    LinePlan {
        xs: out_x,
        ys: out_y,
        decimated: true,
    }
}
