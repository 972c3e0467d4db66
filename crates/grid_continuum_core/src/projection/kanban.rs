//! One-facet column projection on the x plane.

use crate::model::axis::{Layout, Mode, Plane};
use crate::model::projection::{DataProjection, Position, ProjectionCell};
use crate::model::record::Record;
use crate::projection::{catch_all, log_fallback, BuildContext};

/// Header and key of the single column used without an x mapping.
pub(crate) const DEFAULT_COLUMN: &str = "default";

/// One column per x bucket, laid out left to right.
pub(crate) fn build<'a>(records: &'a [Record], context: &BuildContext<'_>) -> DataProjection<'a> {
    let mut projection = DataProjection::new(Mode::Kanban, Layout::HorizontalColumns);
    let Some(mapping) = context.mappings.get(Plane::X) else {
        log_fallback(Mode::Kanban, "missing_x_mapping");
        projection.columns = Some(vec![DEFAULT_COLUMN.to_string()]);
        projection.cells = catch_all("column:default", records);
        for cell in &mut projection.cells {
            cell.column_key = Some(DEFAULT_COLUMN.to_string());
        }
        return projection;
    };

    let grouping = context.group(records, mapping);
    projection.axis_count = 1;
    projection.mappings = vec![mapping.clone()];
    projection.columns = Some(grouping.keys());

    let column_width = context.config.column_width;
    projection.cells = grouping
        .into_buckets()
        .into_iter()
        .enumerate()
        .map(|(index, bucket)| {
            let mut cell = ProjectionCell::new(
                format!("column:{index}"),
                bucket.records,
                Position::new(index as f64 * column_width, 0.0),
            );
            cell.column_key = Some(bucket.key.clone());
            cell.path = vec![bucket.key];
            cell
        })
        .collect();
    projection
}
