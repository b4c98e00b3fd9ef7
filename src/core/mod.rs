pub mod axis;
pub mod color;
pub mod crosshair;
pub mod filter;
pub mod scrollbar;
pub mod series;
pub mod strategy;

pub use axis::{Axis, AxisLimits};
pub use color::Color;
pub use crosshair::{Crosshair, CrosshairMode};
pub use filter::{
    all_data, date_after_data, date_before_data, date_range_data, first_n_data,
    fit_to_screen_data, format_count, index_range_data, last_n_data, FilterMode, FilterResult,
    ViewRange,
};
pub use scrollbar::ScrollbarMapper;
pub use series::{LineSeries, OhlcBar, SeriesStore, VolumeBar};
pub use strategy::{RenderStrategy, StrategyThresholds, select_render_strategy};
