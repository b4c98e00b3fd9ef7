use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid axis limits: min={min}, max={max}")]
    InvalidLimits { min: f64, max: f64 },

    #[error("mismatched series lengths: x={x_len}, y={y_len}")]
    MismatchedSeries { x_len: usize, y_len: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
