//! Engine configuration.
//!
//! # Responsibility
//! - Hold layout pitch, bucket ordering policy and the fallback reference date.
//! - Deserialize from any serde format with per-field defaults.
//!
//! # Invariants
//! - Configuration never makes a projection fail; bad pitches are clamped
//!   back to defaults by `validated()`.

use crate::model::axis::ParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_ROW_HEIGHT: f64 = 120.0;
pub const DEFAULT_COLUMN_WIDTH: f64 = 280.0;
pub const DEFAULT_CELL_WIDTH: f64 = 220.0;
pub const DEFAULT_CELL_HEIGHT: f64 = 160.0;

/// Order in which buckets (and therefore rows/columns/layers) are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketOrder {
    /// Order of first occurrence in the input.
    FirstSeen,
    /// Byte-wise key order.
    Lexical,
    /// Domain order per axis: chronological, calendar, priority tiers.
    Natural,
}

impl Default for BucketOrder {
    fn default() -> Self {
        Self::FirstSeen
    }
}

impl FromStr for BucketOrder {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first_seen" | "first-seen" | "insertion" => Ok(Self::FirstSeen),
            "lexical" | "alphabetical" => Ok(Self::Lexical),
            "natural" | "domain" => Ok(Self::Natural),
            _ => Err(ParseError::UnknownBucketOrder(value.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Vertical pitch between list rows.
    pub row_height: f64,
    /// Horizontal pitch between kanban columns.
    pub column_width: f64,
    /// Grid cell width; also the horizontal pitch of grid columns.
    pub cell_width: f64,
    /// Grid cell height.
    pub cell_height: f64,
    pub bucket_order: BucketOrder,
    /// Date used for time-axis fallbacks. `None` means today.
    pub reference_date: Option<NaiveDate>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            column_width: DEFAULT_COLUMN_WIDTH,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            bucket_order: BucketOrder::default(),
            reference_date: None,
        }
    }
}

impl EngineConfig {
    /// Returns a copy with every non-finite or non-positive pitch reset.
    pub fn validated(mut self) -> Self {
        self.row_height = sanitize_pitch(self.row_height, DEFAULT_ROW_HEIGHT);
        self.column_width = sanitize_pitch(self.column_width, DEFAULT_COLUMN_WIDTH);
        self.cell_width = sanitize_pitch(self.cell_width, DEFAULT_CELL_WIDTH);
        self.cell_height = sanitize_pitch(self.cell_height, DEFAULT_CELL_HEIGHT);
        self
    }

    pub fn with_bucket_order(mut self, order: BucketOrder) -> Self {
        self.bucket_order = order;
        self
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Resolves the fallback date for one projection pass.
    pub fn resolve_reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

fn sanitize_pitch(value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default
    }
}
