//! Axis mapping store.
//!
//! # Invariants
//! - At most one mapping per plane; a later set replaces the earlier one.
//! - Setting or clearing one plane never touches another plane.
//! - No validation against the current mode: builders ignore planes they
//!   do not consult.

use crate::model::axis::{AxisKind, AxisMapping, Plane};
use log::debug;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisMappingStore {
    entries: BTreeMap<Plane, AxisMapping>,
}

impl AxisMappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `axis`/`facet` to `plane`, returning the replaced mapping.
    pub fn set(
        &mut self,
        plane: Plane,
        axis: AxisKind,
        facet: impl Into<String>,
    ) -> Option<AxisMapping> {
        let mapping = AxisMapping::new(plane, axis, facet);
        debug!(
            "event=axis_mapping_set module=state plane={} axis={} facet={}",
            plane, axis, mapping.facet
        );
        self.entries.insert(plane, mapping)
    }

    /// Removes the mapping for `plane`, returning it when present.
    pub fn clear(&mut self, plane: Plane) -> Option<AxisMapping> {
        let removed = self.entries.remove(&plane);
        if removed.is_some() {
            debug!("event=axis_mapping_cleared module=state plane={plane}");
        }
        removed
    }

    pub fn get(&self, plane: Plane) -> Option<&AxisMapping> {
        self.entries.get(&plane)
    }

    /// Active mappings in plane order (x, y, color, size).
    pub fn mappings(&self) -> Vec<AxisMapping> {
        self.entries.values().cloned().collect()
    }

    /// Mappings on planes other than x and y, in plane order.
    pub fn extra_mappings(&self) -> Vec<AxisMapping> {
        self.entries
            .values()
            .filter(|mapping| !matches!(mapping.plane, Plane::X | Plane::Y))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
