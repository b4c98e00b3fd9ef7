use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Color;
use crate::error::{PlotError, PlotResult};

fn decimal_to_f64(value: Decimal, field_name: &str) -> PlotResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| PlotError::InvalidData(format!("{field_name} cannot be represented as f64")))
}

#[must_use]
fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Canonical OHLC sample used by candlestick series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcBar {
    /// Builds a validated OHLC bar from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(time: f64, open: f64, high: f64, low: f64, close: f64) -> PlotResult<Self> {
        if !time.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(PlotError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(PlotError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(PlotError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
        })
    }

    /// Converts strongly-typed temporal/decimal input into a validated OHLC bar.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> PlotResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// One bar of a volume or histogram series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBar {
    pub position: f64,
    pub value: f64,
    pub fill: Option<Color>,
}

impl VolumeBar {
    pub fn new(position: f64, value: f64, fill: Option<Color>) -> PlotResult<Self> {
        if !position.is_finite() || !value.is_finite() {
            return Err(PlotError::InvalidData(
                "bar position/value must be finite".to_owned(),
            ));
        }
        if let Some(color) = fill {
            color.validate()?;
        }
        Ok(Self {
            position,
            value,
            fill,
        })
    }
}

/// One line series: parallel x/y arrays plus optional styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub color: Option<Color>,
    pub name: Option<String>,
}

impl LineSeries {
    pub fn new(
        xs: Vec<f64>,
        ys: Vec<f64>,
        color: Option<Color>,
        name: Option<String>,
    ) -> PlotResult<Self> {
        if xs.len() != ys.len() {
            return Err(PlotError::MismatchedSeries {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if let Some(color) = color {
            color.validate()?;
        }
        Ok(Self {
            xs,
            ys,
            color,
            name,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Per-viewport collection of typed data series.
///
/// OHLC, volume, and histogram series hold at most one live instance each;
/// replacing one removes the previous instance first. Line series are keyed
/// by an integer index with a bijective name side table, so removal by name
/// removes the index entry and vice versa.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    ohlc: Option<Vec<OhlcBar>>,
    volume: Option<Vec<VolumeBar>>,
    histogram: Option<Vec<VolumeBar>>,
    lines: IndexMap<usize, LineSeries>,
    line_names: IndexMap<String, usize>,
    next_line_index: usize,
}

impl SeriesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ohlc(&mut self, bars: Vec<OhlcBar>) {
        if self.ohlc.is_some() {
            debug!(count = bars.len(), "replacing existing ohlc series");
        }
        self.ohlc = Some(bars);
    }

    pub fn set_volume(&mut self, bars: Vec<VolumeBar>) {
        if self.volume.is_some() {
            debug!(count = bars.len(), "replacing existing volume series");
        }
        self.volume = Some(bars);
    }

    pub fn set_histogram(&mut self, bars: Vec<VolumeBar>) {
        if self.histogram.is_some() {
            debug!(count = bars.len(), "replacing existing histogram series");
        }
        self.histogram = Some(bars);
    }

    /// Inserts or replaces the line series at `index`.
    ///
    /// A previous series at the same index is removed first; the name table
    /// is updated to keep the name↔index mapping bijective.
    pub fn set_line(&mut self, index: usize, series: LineSeries) {
        if let Some(old) = self.lines.shift_remove(&index) {
            if let Some(old_name) = old.name {
                self.line_names.shift_remove(&old_name);
            }
        }
        if let Some(name) = series.name.clone() {
            self.line_names.insert(name, index);
        }
        self.lines.insert(index, series);
        self.next_line_index = self.next_line_index.max(index + 1);
    }

    /// Adds a named line series, reusing the existing index when the name is
    /// already registered and auto-assigning a fresh index otherwise.
    pub fn add_line(&mut self, name: &str, series: LineSeries) -> usize {
        let index = match self.line_names.get(name) {
            Some(existing) => *existing,
            None => {
                let fresh = self.next_line_index;
                self.next_line_index += 1;
                fresh
            }
        };
        let mut series = series;
        series.name = Some(name.to_owned());
        self.set_line(index, series);
        index
    }

    pub fn remove_line(&mut self, index: usize) -> bool {
        match self.lines.shift_remove(&index) {
            Some(series) => {
                if let Some(name) = series.name {
                    self.line_names.shift_remove(&name);
                }
                true
            }
            None => false,
        }
    }

    pub fn remove_line_by_name(&mut self, name: &str) -> bool {
        match self.line_names.get(name).copied() {
            Some(index) => self.remove_line(index),
            None => false,
        }
    }

    pub fn clear_lines(&mut self) {
        self.lines.clear();
        self.line_names.clear();
    }

    /// Removes every series of every kind.
    pub fn clear_all(&mut self) {
        self.ohlc = None;
        self.volume = None;
        self.histogram = None;
        self.clear_lines();
    }

    #[must_use]
    pub fn ohlc(&self) -> Option<&[OhlcBar]> {
        self.ohlc.as_deref()
    }

    #[must_use]
    pub fn volume(&self) -> Option<&[VolumeBar]> {
        self.volume.as_deref()
    }

    #[must_use]
    pub fn histogram(&self) -> Option<&[VolumeBar]> {
        self.histogram.as_deref()
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&LineSeries> {
        self.lines.get(&index)
    }

    #[must_use]
    pub fn line_by_name(&self, name: &str) -> Option<&LineSeries> {
        self.line_names
            .get(name)
            .and_then(|index| self.lines.get(index))
    }

    #[must_use]
    pub fn line_index(&self, name: &str) -> Option<usize> {
        self.line_names.get(name).copied()
    }

    pub fn lines(&self) -> impl Iterator<Item = (usize, &LineSeries)> {
        self.lines.iter().map(|(index, series)| (*index, series))
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ohlc.is_none()
            && self.volume.is_none()
            && self.histogram.is_none()
            && self.lines.is_empty()
    }

    /// Largest sample count across all live series.
    ///
    /// Render strategy selection keys off this after every full data load.
    #[must_use]
    pub fn max_point_count(&self) -> usize {
        let mut count = 0;
        if let Some(bars) = &self.ohlc {
            count = count.max(bars.len());
        }
        if let Some(bars) = &self.volume {
            count = count.max(bars.len());
        }
        if let Some(bars) = &self.histogram {
            count = count.max(bars.len());
        }
        for series in self.lines.values() {
            count = count.max(series.len());
        }
        count
    }

    /// X-domain bounds across every live series, or `None` when empty.
    #[must_use]
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        let mut fold = |value: f64| {
            if value.is_finite() {
                bounds = Some(match bounds {
                    Some((min, max)) => (min.min(value), max.max(value)),
                    None => (value, value),
                });
            }
        };

        if let Some(bars) = &self.ohlc {
            for bar in bars {
                fold(bar.time);
            }
        }
        for bars in [&self.volume, &self.histogram].into_iter().flatten() {
            for bar in bars {
                fold(bar.position);
            }
        }
        for series in self.lines.values() {
            for &x in &series.xs {
                fold(x);
            }
        }
        bounds
    }

    /// Y-domain bounds across every live series, or `None` when empty.
    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        let mut fold = |value: f64| {
            if value.is_finite() {
                bounds = Some(match bounds {
                    Some((min, max)) => (min.min(value), max.max(value)),
                    None => (value, value),
                });
            }
        };

        if let Some(bars) = &self.ohlc {
            for bar in bars {
                fold(bar.low);
                fold(bar.high);
            }
        }
        for bars in [&self.volume, &self.histogram].into_iter().flatten() {
            if !bars.is_empty() {
                // Bars extend from the baseline.
                fold(0.0);
            }
            for bar in bars {
                fold(bar.value);
            }
        }
        for series in self.lines.values() {
            for &y in &series.ys {
                fold(y);
            }
        }
        bounds
    }
}
