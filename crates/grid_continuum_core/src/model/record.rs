//! Record domain model.
//!
//! # Responsibility
//! - Define the read-only record shape every projection consumes.
//! - Expose the LATCH attributes the value extractor reads.
//!
//! # Invariants
//! - `id` is stable and unique within one record set.
//! - The engine never mutates a record; it only borrows and forwards it.
//! - Every LATCH attribute is optional; absence is steady-state, not an error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one record across projections.
pub type RecordId = Uuid;

/// Externally-owned entity projected into cells.
///
/// The query/storage layer owns these; projections only hold borrows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identity used by the partition check.
    pub id: RecordId,
    /// Display name. Source of the alphabet axis.
    pub name: String,
    /// ISO-8601 date or timestamp text. Source of the time axis.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Category axis, `folder` facet.
    #[serde(default)]
    pub folder: Option<String>,
    /// Category axis, `status` facet.
    #[serde(default)]
    pub status: Option<String>,
    /// Hierarchy axis, `priority` facet. Higher is more important.
    #[serde(default)]
    pub priority: Option<f64>,
    /// Location axis.
    #[serde(default)]
    pub location_name: Option<String>,
}

impl Record {
    /// Creates a record with a generated stable ID and no LATCH attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a record with a caller-provided stable ID.
    ///
    /// Used when identity already exists in the upstream store.
    pub fn with_id(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: None,
            folder: None,
            status: None,
            priority: None,
            location_name: None,
        }
    }

    pub fn created_at(mut self, value: impl Into<String>) -> Self {
        self.created_at = Some(value.into());
        self
    }

    pub fn folder(mut self, value: impl Into<String>) -> Self {
        self.folder = Some(value.into());
        self
    }

    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn priority(mut self, value: f64) -> Self {
        self.priority = Some(value);
        self
    }

    pub fn location(mut self, value: impl Into<String>) -> Self {
        self.location_name = Some(value.into());
        self
    }
}
