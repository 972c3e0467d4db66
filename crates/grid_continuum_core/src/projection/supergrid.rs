//! N-axis projection with nested headers.

use crate::model::axis::{Layout, Mode};
use crate::model::projection::DataProjection;
use crate::model::record::Record;
use crate::projection::grid::build_matrix;
use crate::projection::BuildContext;

/// Grid's cross product extended with every non x/y mapping.
///
/// `layers` lists the buckets of the first extra axis (color before size);
/// each cell's `depth` indexes into it. Without x or y the Grid fallback
/// cell is kept, but `layers` is still reported.
pub(crate) fn build<'a>(records: &'a [Record], context: &BuildContext<'_>) -> DataProjection<'a> {
    let extra = context.mappings.extra_mappings();
    let mut projection = build_matrix(
        Mode::SuperGrid,
        Layout::NestedHeaders,
        records,
        &extra,
        context,
    );

    if projection.layers.is_none() {
        if let Some(layer_mapping) = extra.first() {
            projection.layers = Some(context.group(records, layer_mapping).keys());
        }
    }
    projection.mappings = context.mappings.mappings();
    projection.axis_count = projection.mappings.len();
    projection
}
