//! Projection pipeline: extraction, grouping, per-mode builders, dispatch.
//!
//! # Responsibility
//! - Route a record slice to the builder for the requested mode.
//! - Keep every builder a pure function of `(records, mappings, config)`.
//!
//! # Invariants
//! - Every mode yields a partition of its input (see
//!   `DataProjection::check_partition`).
//! - Missing mappings degrade to a coarser layout; nothing here fails.
//! - Empty input yields zero cells in every mode.

pub mod extract;
pub mod grouping;

mod gallery;
mod grid;
mod kanban;
mod list;
mod supergrid;

use crate::config::EngineConfig;
use crate::model::axis::{AxisMapping, Mode};
use crate::model::projection::{DataProjection, Position, ProjectionCell};
use crate::model::record::Record;
use crate::state::mapping_store::AxisMappingStore;
use chrono::NaiveDate;
use grouping::Grouping;
use log::{debug, error};

/// Inputs shared by every builder for one projection pass.
pub(crate) struct BuildContext<'s> {
    pub mappings: &'s AxisMappingStore,
    pub config: &'s EngineConfig,
    /// Fallback date, resolved once so every record sees the same value.
    pub today: NaiveDate,
}

impl BuildContext<'_> {
    /// Groups on `mapping` and applies the configured bucket order.
    pub fn group<'a>(&self, records: &'a [Record], mapping: &AxisMapping) -> Grouping<'a> {
        let mut grouping = Grouping::build(records, mapping, self.today);
        grouping.sort(self.config.bucket_order);
        grouping
    }
}

/// Builds the projection for `mode`.
///
/// Deterministic for fixed `(mode, mappings, config, records)` when the
/// config pins `reference_date`.
pub fn project<'a>(
    mode: Mode,
    records: &'a [Record],
    mappings: &AxisMappingStore,
    config: &EngineConfig,
) -> DataProjection<'a> {
    let context = BuildContext {
        mappings,
        config,
        today: config.resolve_reference_date(),
    };

    let projection = match mode {
        Mode::Gallery => gallery::build(records),
        Mode::List => list::build(records, &context),
        Mode::Kanban => kanban::build(records, &context),
        Mode::Grid => grid::build(records, &context),
        Mode::SuperGrid => supergrid::build(records, &context),
    };

    debug!(
        "event=projection_built module=projection mode={} layout={} axis_count={} cells={} \
         records={}",
        projection.mode,
        projection.layout,
        projection.axis_count,
        projection.cells.len(),
        records.len()
    );
    if cfg!(debug_assertions) {
        if let Err(err) = projection.check_partition(records) {
            error!(
                "event=partition_violation module=projection mode={} error={}",
                mode, err
            );
        }
    }

    projection
}

/// Single cell holding every record; empty input yields no cell.
fn catch_all<'a>(id: &str, records: &'a [Record]) -> Vec<ProjectionCell<'a>> {
    if records.is_empty() {
        return Vec::new();
    }
    vec![ProjectionCell::new(
        id,
        records.iter().collect(),
        Position::default(),
    )]
}

fn log_fallback(mode: Mode, reason: &str) {
    debug!("event=projection_fallback module=projection mode={mode} reason={reason}");
}
