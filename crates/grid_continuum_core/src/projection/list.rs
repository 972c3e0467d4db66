//! One-axis vertical projection on the y plane.

use crate::model::axis::{Layout, Mode, Plane};
use crate::model::projection::{DataProjection, Position, ProjectionCell};
use crate::model::record::Record;
use crate::projection::{catch_all, log_fallback, BuildContext};

/// One row per y bucket, stacked at a fixed row pitch.
///
/// Without a y mapping this is a single catch-all cell that still reports
/// the vertical layout.
pub(crate) fn build<'a>(records: &'a [Record], context: &BuildContext<'_>) -> DataProjection<'a> {
    let mut projection = DataProjection::new(Mode::List, Layout::VerticalHierarchy);
    let Some(mapping) = context.mappings.get(Plane::Y) else {
        log_fallback(Mode::List, "missing_y_mapping");
        projection.cells = catch_all("list", records);
        return projection;
    };

    let grouping = context.group(records, mapping);
    projection.axis_count = 1;
    projection.mappings = vec![mapping.clone()];
    projection.rows = Some(grouping.keys());

    let row_height = context.config.row_height;
    projection.cells = grouping
        .into_buckets()
        .into_iter()
        .enumerate()
        .map(|(index, bucket)| {
            let mut cell = ProjectionCell::new(
                format!("row:{index}"),
                bucket.records,
                Position::new(0.0, index as f64 * row_height),
            );
            cell.row_key = Some(bucket.key.clone());
            cell.path = vec![bucket.key];
            cell
        })
        .collect();
    projection
}
