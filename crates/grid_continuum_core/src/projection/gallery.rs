//! Zero-axis freeform projection.

use crate::model::axis::{Layout, Mode};
use crate::model::projection::DataProjection;
use crate::model::record::Record;
use crate::projection::catch_all;

pub(crate) const GALLERY_CELL_ID: &str = "gallery";

/// One catch-all cell in masonry layout; mappings are ignored.
pub(crate) fn build(records: &[Record]) -> DataProjection<'_> {
    let mut projection = DataProjection::new(Mode::Gallery, Layout::Masonry);
    projection.cells = catch_all(GALLERY_CELL_ID, records);
    projection
}
