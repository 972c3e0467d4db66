//! Projection output model.
//!
//! # Responsibility
//! - Define the uniform cell/header shape every builder emits.
//! - Verify the partition property of a finished projection.
//!
//! # Invariants
//! - Cells borrow records from the caller's slice; nothing is copied.
//! - A finished projection is a partition of its input: every record id
//!   appears in exactly one cell, and no emitted cell is empty.

use crate::model::axis::{AxisMapping, Layout, Mode};
use crate::model::record::{Record, RecordId};
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Top-left anchor of a cell in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

/// One bucket of records placed in the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionCell<'a> {
    /// Unique within one projection.
    pub id: String,
    pub records: Vec<&'a Record>,
    /// SuperGrid layer cells of one (row, column) address share this anchor;
    /// `depth` tells them apart.
    pub position: Position,
    pub size: Option<CellSize>,
    pub row_key: Option<String>,
    pub column_key: Option<String>,
    /// First extra (non x/y) axis key. SuperGrid only.
    pub layer_key: Option<String>,
    /// Index of `layer_key` within the projection's `layers`.
    pub depth: Option<usize>,
    /// Key per consulted axis, in axis order. Empty for catch-all cells.
    pub path: Vec<String>,
}

impl<'a> ProjectionCell<'a> {
    pub(crate) fn new(id: impl Into<String>, records: Vec<&'a Record>, position: Position) -> Self {
        Self {
            id: id.into(),
            records,
            position,
            size: None,
            row_key: None,
            column_key: None,
            layer_key: None,
            depth: None,
            path: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the ids of this cell's records in cell order.
    pub fn record_ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|record| record.id).collect()
    }
}

/// Result of projecting one record collection under one mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataProjection<'a> {
    pub mode: Mode,
    pub axis_count: usize,
    /// Mappings the builder consulted.
    pub mappings: Vec<AxisMapping>,
    pub layout: Layout,
    pub cells: Vec<ProjectionCell<'a>>,
    pub rows: Option<Vec<String>>,
    pub columns: Option<Vec<String>>,
    pub layers: Option<Vec<String>>,
}

impl<'a> DataProjection<'a> {
    pub(crate) fn new(mode: Mode, layout: Layout) -> Self {
        Self {
            mode,
            axis_count: 0,
            mappings: Vec::new(),
            layout,
            cells: Vec::new(),
            rows: None,
            columns: None,
            layers: None,
        }
    }

    /// Total number of records across all cells.
    pub fn record_count(&self) -> usize {
        self.cells.iter().map(ProjectionCell::len).sum()
    }

    pub fn cell(&self, id: &str) -> Option<&ProjectionCell<'a>> {
        self.cells.iter().find(|cell| cell.id == id)
    }

    /// Finds the cell addressed by a (row, column) key pair.
    ///
    /// Unambiguous for Grid only. SuperGrid splits an address into one cell
    /// per layer; use `cells_at` there.
    pub fn cell_at(&self, row_key: &str, column_key: &str) -> Option<&ProjectionCell<'a>> {
        self.cells.iter().find(|cell| {
            cell.row_key.as_deref() == Some(row_key)
                && cell.column_key.as_deref() == Some(column_key)
        })
    }

    /// Every cell at a (row, column) address, in layer order.
    pub fn cells_at(&self, row_key: &str, column_key: &str) -> Vec<&ProjectionCell<'a>> {
        self.cells
            .iter()
            .filter(|cell| {
                cell.row_key.as_deref() == Some(row_key)
                    && cell.column_key.as_deref() == Some(column_key)
            })
            .collect()
    }

    /// Verifies that the cells partition `records`.
    ///
    /// # Errors
    /// - `EmptyCell` when any emitted cell has no records.
    /// - `CountMismatch` when cell sizes do not sum to the input length.
    /// - `DuplicateRecord` when an id appears in more than one slot.
    /// - `MissingRecord` when an input id is not covered by any cell.
    pub fn check_partition(&self, records: &[Record]) -> Result<(), PartitionError> {
        if let Some(cell) = self.cells.iter().find(|cell| cell.is_empty()) {
            return Err(PartitionError::EmptyCell(cell.id.clone()));
        }

        let actual = self.record_count();
        if actual != records.len() {
            return Err(PartitionError::CountMismatch {
                expected: records.len(),
                actual,
            });
        }

        let mut seen = HashSet::with_capacity(actual);
        for cell in &self.cells {
            for record in &cell.records {
                if !seen.insert(record.id) {
                    return Err(PartitionError::DuplicateRecord(record.id));
                }
            }
        }

        match records.iter().find(|record| !seen.contains(&record.id)) {
            Some(record) => Err(PartitionError::MissingRecord(record.id)),
            None => Ok(()),
        }
    }
}

/// Violation of the projection partition property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    CountMismatch { expected: usize, actual: usize },
    DuplicateRecord(RecordId),
    MissingRecord(RecordId),
    EmptyCell(String),
}

impl Display for PartitionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CountMismatch { expected, actual } => write!(
                f,
                "cells hold {actual} record(s) but input has {expected}"
            ),
            Self::DuplicateRecord(id) => write!(f, "record {id} appears in more than one cell"),
            Self::MissingRecord(id) => write!(f, "record {id} is not covered by any cell"),
            Self::EmptyCell(id) => write!(f, "cell `{id}` was emitted without records"),
        }
    }
}

impl Error for PartitionError {}
