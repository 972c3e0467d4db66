//! Two-axis matrix projection and the shared sparse cross product.
//!
//! # Invariants
//! - Only non-empty intersections become cells.
//! - Header keys list every bucket of each axis, independent of which
//!   intersections produced cells.

use crate::model::axis::{AxisMapping, Layout, Mode, Plane};
use crate::model::projection::{CellSize, DataProjection, Position, ProjectionCell};
use crate::model::record::Record;
use crate::projection::grouping::Grouping;
use crate::projection::{catch_all, log_fallback, BuildContext};
use std::collections::BTreeMap;

/// Sparse N-dimensional cross product of several groupings.
pub(crate) struct CrossProduct<'a> {
    /// One grouping per consulted axis, in axis order.
    pub axes: Vec<Grouping<'a>>,
    /// (bucket index per axis, records) in row-major path order.
    pub cells: Vec<(Vec<usize>, Vec<&'a Record>)>,
}

/// Assigns each record to the cell addressed by its bucket path.
///
/// Single pass over `records`; key functions are total, so every record
/// gets exactly one path.
pub(crate) fn cross_product<'a>(
    records: &'a [Record],
    mappings: &[AxisMapping],
    context: &BuildContext<'_>,
) -> CrossProduct<'a> {
    let axes: Vec<Grouping<'a>> = mappings
        .iter()
        .map(|mapping| context.group(records, mapping))
        .collect();

    let mut sparse: BTreeMap<Vec<usize>, Vec<&'a Record>> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        let path = axes.iter().map(|axis| axis.bucket_of(index)).collect();
        sparse.entry(path).or_default().push(record);
    }

    CrossProduct {
        axes,
        cells: sparse.into_iter().collect(),
    }
}

/// Turns cross-product cells into positioned matrix cells.
///
/// Axis 0 is rows, axis 1 is columns, axis 2 (when present) is the layer.
/// Layers stack on their (row, column) anchor rather than shifting it.
pub(crate) fn matrix_cells<'a>(
    cross: CrossProduct<'a>,
    context: &BuildContext<'_>,
) -> Vec<ProjectionCell<'a>> {
    let CrossProduct { axes, cells } = cross;
    let (cell_width, cell_height) = (context.config.cell_width, context.config.cell_height);

    cells
        .into_iter()
        .map(|(path, records)| {
            let keys: Vec<String> = path
                .iter()
                .zip(&axes)
                .map(|(&bucket, axis)| axis.buckets()[bucket].key.clone())
                .collect();
            let id = path
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(":");
            let (row, column) = (path[0], path[1]);

            let mut cell = ProjectionCell::new(
                format!("cell:{id}"),
                records,
                Position::new(column as f64 * cell_width, row as f64 * cell_height),
            );
            cell.size = Some(CellSize {
                width: cell_width,
                height: cell_height,
            });
            cell.row_key = Some(keys[0].clone());
            cell.column_key = Some(keys[1].clone());
            if let (Some(&layer), Some(key)) = (path.get(2), keys.get(2)) {
                cell.depth = Some(layer);
                cell.layer_key = Some(key.clone());
            }
            cell.path = keys;
            cell
        })
        .collect()
}

/// Rows from y, columns from x; falls back to one cell if either is missing.
pub(crate) fn build<'a>(records: &'a [Record], context: &BuildContext<'_>) -> DataProjection<'a> {
    build_matrix(Mode::Grid, Layout::Matrix, records, &[], context)
}

/// Shared by Grid and SuperGrid: cross product over `[y, x, extra...]`.
pub(crate) fn build_matrix<'a>(
    mode: Mode,
    layout: Layout,
    records: &'a [Record],
    extra: &[AxisMapping],
    context: &BuildContext<'_>,
) -> DataProjection<'a> {
    let mut projection = DataProjection::new(mode, layout);
    let y = context.mappings.get(Plane::Y);
    let x = context.mappings.get(Plane::X);

    let (Some(y), Some(x)) = (y, x) else {
        log_fallback(mode, "missing_x_or_y_mapping");
        projection.mappings = [x, y].into_iter().flatten().cloned().collect();
        projection.axis_count = projection.mappings.len();
        projection.cells = catch_all(mode.as_str(), records);
        return projection;
    };

    let mut axes = vec![y.clone(), x.clone()];
    axes.extend(extra.iter().cloned());
    let cross = cross_product(records, &axes, context);

    projection.axis_count = 2;
    projection.mappings = vec![x.clone(), y.clone()];
    projection.rows = Some(cross.axes[0].keys());
    projection.columns = Some(cross.axes[1].keys());
    if let Some(layer_axis) = cross.axes.get(2) {
        projection.layers = Some(layer_axis.keys());
    }
    projection.cells = matrix_cells(cross, context);
    projection
}
