//! Public engine surface: viewports, synchronization policies, and the
//! coordinator that ties them together.

pub mod config;
pub mod coordinator;
pub mod lifecycle;
pub mod policies;
pub mod status;
pub mod viewport;

pub use config::{DataDefinition, LoadedSeries, PlotConfiguration, PlotDefinition, SeriesKind, SeriesLoader};
pub use coordinator::{
    MouseButton, ViewportSet, DEFAULT_WIDTH_PX, POINTS_PER_PIXEL, PRIMARY_HEIGHT,
    PRIMARY_VIEWPORT_ID, SECONDARY_HEIGHT,
};
pub use lifecycle::LifecycleCommand;
pub use policies::{ScrollbarSyncMode, SyncPolicies, WheelAxisMode, ZoomStepConfig};
pub use status::{MemoryStatus, NullStatus, StatusSink};
pub use viewport::{LayoutMode, Viewport};
