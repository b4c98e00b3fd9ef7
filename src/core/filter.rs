//! Range filter: pure view-window selection over a full dataset.
//!
//! Every policy returns the complete input arrays and only constrains the
//! initially visible window through `view_range`. Data is never truncated by
//! filtering; panning can always reach the rest of the dataset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Selection policy applied when loading a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    All,
    FitToScreen,
    LastN,
    FirstN,
    IndexRange,
    DateRange,
    DateBefore,
    DateAfter,
}

/// X-axis sub-interval constraining the initially visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRange {
    pub min: f64,
    pub max: f64,
}

/// Result of applying a filter policy.
///
/// `x`/`y` always hold the complete input arrays except for the degenerate
/// empty/invalid-parameter case, which yields empty arrays and no view range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterResult {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub original_count: usize,
    pub retained_count: usize,
    pub mode: FilterMode,
    pub description: String,
    pub view_range: Option<ViewRange>,
}

impl FilterResult {
    fn empty(mode: FilterMode, original_count: usize, description: &str) -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            original_count,
            retained_count: 0,
            mode,
            description: description.to_owned(),
            view_range: None,
        }
    }
}

/// Inserts thousands separators for status/description strings.
#[must_use]
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Returns the full dataset with no view constraint.
#[must_use]
pub fn all_data(x: &[f64], y: &[f64]) -> FilterResult {
    if x.len() != y.len() {
        warn!(x_len = x.len(), y_len = y.len(), "all_data: length mismatch");
        return FilterResult::empty(FilterMode::All, x.len(), "No data");
    }

    info!(count = x.len(), "all_data: returning full dataset");
    FilterResult {
        x: x.to_vec(),
        y: y.to_vec(),
        original_count: x.len(),
        retained_count: x.len(),
        mode: FilterMode::All,
        description: format!("All data ({} points)", format_count(x.len())),
        view_range: None,
    }
}

/// Constrains the initial view to the most recent `width_px * points_per_pixel`
/// samples; behaves like [`all_data`] when the dataset already fits.
#[must_use]
pub fn fit_to_screen_data(
    x: &[f64],
    y: &[f64],
    width_px: usize,
    points_per_pixel: usize,
) -> FilterResult {
    if x.is_empty() || x.len() != y.len() {
        return FilterResult::empty(FilterMode::FitToScreen, x.len(), "No data");
    }

    let max_visible = width_px * points_per_pixel;
    if max_visible == 0 {
        return FilterResult::empty(FilterMode::FitToScreen, x.len(), "No data");
    }

    if x.len() <= max_visible {
        info!(
            count = x.len(),
            max_visible, "fit_to_screen_data: dataset already fits"
        );
        return all_data(x, y);
    }

    // Expose the most recent window; the latest samples are usually the
    // interesting ones.
    let view_start = x.len() - max_visible;
    let view_range = ViewRange {
        min: x[view_start],
        max: x[x.len() - 1],
    };

    info!(
        count = x.len(),
        visible = max_visible,
        "fit_to_screen_data: viewing most recent window"
    );
    FilterResult {
        x: x.to_vec(),
        y: y.to_vec(),
        original_count: x.len(),
        retained_count: x.len(),
        mode: FilterMode::FitToScreen,
        description: format!(
            "Fit to screen (viewing last {} of {} points)",
            format_count(max_visible),
            format_count(x.len())
        ),
        view_range: Some(view_range),
    }
}

/// Constrains the initial view to the last `n` samples.
#[must_use]
pub fn last_n_data(x: &[f64], y: &[f64], n: usize) -> FilterResult {
    if x.is_empty() || n == 0 || x.len() != y.len() {
        return FilterResult::empty(FilterMode::LastN, x.len(), "No data");
    }

    let count = n.min(x.len());
    let start = x.len() - count;
    let view_range = ViewRange {
        min: x[start],
        max: x[x.len() - 1],
    };

    info!(count = x.len(), visible = count, "last_n_data");
    FilterResult {
        x: x.to_vec(),
        y: y.to_vec(),
        original_count: x.len(),
        retained_count: x.len(),
        mode: FilterMode::LastN,
        description: format!(
            "Last {} points (of {} total)",
            format_count(count),
            format_count(x.len())
        ),
        view_range: Some(view_range),
    }
}

/// Constrains the initial view to the first `n` samples.
#[must_use]
pub fn first_n_data(x: &[f64], y: &[f64], n: usize) -> FilterResult {
    if x.is_empty() || n == 0 || x.len() != y.len() {
        return FilterResult::empty(FilterMode::FirstN, x.len(), "No data");
    }

    let count = n.min(x.len());
    let view_range = ViewRange {
        min: x[0],
        max: x[count - 1],
    };

    info!(count = x.len(), visible = count, "first_n_data");
    FilterResult {
        x: x.to_vec(),
        y: y.to_vec(),
        original_count: x.len(),
        retained_count: x.len(),
        mode: FilterMode::FirstN,
        description: format!(
            "First {} points (of {} total)",
            format_count(count),
            format_count(x.len())
        ),
        view_range: Some(view_range),
    }
}

/// Constrains the initial view to the inclusive sample index range
/// `[start, end]`, clamping both ends to the dataset.
#[must_use]
pub fn index_range_data(x: &[f64], y: &[f64], start: usize, end: usize) -> FilterResult {
    if x.is_empty() || end < start || x.len() != y.len() {
        return FilterResult::empty(FilterMode::IndexRange, x.len(), "Invalid range");
    }

    let start = start.min(x.len() - 1);
    let end = end.min(x.len() - 1);
    let count = end - start + 1;
    let view_range = ViewRange {
        min: x[start],
        max: x[end],
    };

    info!(count = x.len(), start, end, "index_range_data");
    FilterResult {
        x: x.to_vec(),
        y: y.to_vec(),
        original_count: x.len(),
        retained_count: x.len(),
        mode: FilterMode::IndexRange,
        description: format!(
            "Range [{start}..{end}] ({} points of {} total)",
            format_count(count),
            format_count(x.len())
        ),
        view_range: Some(view_range),
    }
}

/// Date-interval filtering is not implemented yet; degrades to [`all_data`].
///
/// TODO: map the X axis onto `DateTime` ordinals and compute a real window.
#[must_use]
pub fn date_range_data(
    x: &[f64],
    y: &[f64],
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> FilterResult {
    warn!(
        %start_date,
        %end_date,
        "date_range_data: not implemented, falling back to all_data"
    );
    all_data(x, y)
}

/// Date-cutoff filtering is not implemented yet; degrades to [`all_data`].
#[must_use]
pub fn date_before_data(x: &[f64], y: &[f64], before_date: DateTime<Utc>) -> FilterResult {
    warn!(
        %before_date,
        "date_before_data: not implemented, falling back to all_data"
    );
    all_data(x, y)
}

/// Date-cutoff filtering is not implemented yet; degrades to [`all_data`].
#[must_use]
pub fn date_after_data(x: &[f64], y: &[f64], after_date: DateTime<Utc>) -> FilterResult {
    warn!(
        %after_date,
        "date_after_data: not implemented, falling back to all_data"
    );
    all_data(x, y)
}
