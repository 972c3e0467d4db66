//! Grid Continuum projection engine.
//! Projects one flat record collection into gallery, list, kanban, grid or
//! supergrid arrangements by reassigning axes to visual planes.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod projection;
pub mod state;

pub use config::{BucketOrder, EngineConfig};
pub use controller::GridContinuum;
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
};
pub use model::axis::{AxisKind, AxisMapping, Layout, Mode, ParseError, Plane};
pub use model::projection::{CellSize, DataProjection, PartitionError, Position, ProjectionCell};
pub use model::record::{Record, RecordId};
pub use projection::extract::{extract, extract_at, UNKNOWN_KEY};
pub use projection::grouping::{group_by, group_by_at, Bucket, Grouping};
pub use projection::project;
pub use state::mapping_store::AxisMappingStore;
pub use state::mode_machine::{HandlerId, ModeTransitionEvent};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
