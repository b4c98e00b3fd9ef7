//! plotsync: multi-viewport plot synchronization and adaptive rendering engine.
//!
//! This crate provides the coordinate, series, and synchronization state that
//! sits between a desktop charting shell and its rendering backend: linked
//! viewports with coherent pan/zoom/crosshair state, policy-driven event
//! mirroring, and data-size-aware render strategy selection.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{SyncPolicies, ViewportSet};
pub use error::{PlotError, PlotResult};
