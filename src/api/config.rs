//! Declarative multi-viewport configuration.
//!
//! A configuration document names the viewports to create and the series each
//! one loads. Series sources are abstract; the host supplies a
//! [`SeriesLoader`] that turns a [`DataDefinition`] into concrete samples.

use serde::{Deserialize, Serialize};

use crate::core::{LineSeries, OhlcBar, VolumeBar};
use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Ohlc,
    Volume,
    Line,
    Histogram,
}

/// One series a viewport should load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataDefinition {
    pub data_id: usize,
    pub kind: SeriesKind,
    pub name: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One viewport in the configured layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotDefinition {
    pub plot_id: String,
    pub plot_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default)]
    pub data: Vec<DataDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotConfiguration {
    pub plots: Vec<PlotDefinition>,
}

impl PlotConfiguration {
    pub fn from_json(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| PlotError::InvalidData(format!("configuration parse failed: {err}")))
    }

    pub fn to_json(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| PlotError::InvalidData(format!("configuration encode failed: {err}")))
    }
}

/// Concrete samples produced for one data definition.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedSeries {
    Ohlc(Vec<OhlcBar>),
    Volume(Vec<VolumeBar>),
    Histogram(Vec<VolumeBar>),
    Line(LineSeries),
}

/// Host-side resolver from a data definition to samples.
///
/// A failed load aborts only that series; configuration apply continues with
/// the rest of the document.
pub trait SeriesLoader {
    fn load(&mut self, definition: &DataDefinition) -> PlotResult<LoadedSeries>;
}
