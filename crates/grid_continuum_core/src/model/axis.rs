//! Axis, plane and mode vocabulary.
//!
//! # Responsibility
//! - Name the closed sets of planes, LATCH axes, modes and layouts.
//! - Parse wire/UI strings into those sets at the boundary.
//!
//! # Invariants
//! - Every enum is closed; adding a variant is a compile-time checked change.
//! - `as_str()` and `FromStr` round-trip for every variant.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Visual dimension an axis can be assigned to.
///
/// Variant order is the iteration order of the mapping store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plane {
    X,
    Y,
    Color,
    Size,
}

impl Plane {
    pub const ALL: [Plane; 4] = [Plane::X, Plane::Y, Plane::Color, Plane::Size];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Color => "color",
            Self::Size => "size",
        }
    }
}

/// LATCH category a record can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    Location,
    Alphabet,
    Time,
    Category,
    Hierarchy,
}

impl AxisKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Alphabet => "alphabet",
            Self::Time => "time",
            Self::Category => "category",
            Self::Hierarchy => "hierarchy",
        }
    }
}

/// One plane -> (axis, facet) assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisMapping {
    pub plane: Plane,
    pub axis: AxisKind,
    /// Concrete attribute within the axis, e.g. `month` for `time`.
    pub facet: String,
}

impl AxisMapping {
    pub fn new(plane: Plane, axis: AxisKind, facet: impl Into<String>) -> Self {
        Self {
            plane,
            axis,
            facet: facet.into(),
        }
    }
}

/// Projection mode, ordered by axis complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Gallery,
    List,
    Kanban,
    Grid,
    #[serde(rename = "supergrid")]
    SuperGrid,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Gallery,
        Mode::List,
        Mode::Kanban,
        Mode::Grid,
        Mode::SuperGrid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gallery => "gallery",
            Self::List => "list",
            Self::Kanban => "kanban",
            Self::Grid => "grid",
            Self::SuperGrid => "supergrid",
        }
    }

    /// Number of axes the mode consults. `None` means unbounded (N axes).
    pub fn axis_complexity(self) -> Option<usize> {
        match self {
            Self::Gallery => Some(0),
            Self::List | Self::Kanban => Some(1),
            Self::Grid => Some(2),
            Self::SuperGrid => None,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Gallery
    }
}

/// Arrangement hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    Masonry,
    VerticalHierarchy,
    HorizontalColumns,
    Matrix,
    NestedHeaders,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Masonry => "masonry",
            Self::VerticalHierarchy => "vertical-hierarchy",
            Self::HorizontalColumns => "horizontal-columns",
            Self::Matrix => "matrix",
            Self::NestedHeaders => "nested-headers",
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),+) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display_as_str!(Plane, AxisKind, Mode, Layout);

/// Boundary error for unrecognized vocabulary strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownPlane(String),
    UnknownAxis(String),
    UnknownMode(String),
    UnknownBucketOrder(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPlane(value) => {
                write!(f, "unknown plane `{value}`; expected x|y|color|size")
            }
            Self::UnknownAxis(value) => write!(
                f,
                "unknown axis `{value}`; expected location|alphabet|time|category|hierarchy"
            ),
            Self::UnknownMode(value) => write!(
                f,
                "unknown mode `{value}`; expected gallery|list|kanban|grid|supergrid"
            ),
            Self::UnknownBucketOrder(value) => write!(
                f,
                "unknown bucket order `{value}`; expected first_seen|lexical|natural"
            ),
        }
    }
}

impl Error for ParseError {}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

impl FromStr for Plane {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "color" | "colour" => Ok(Self::Color),
            "size" => Ok(Self::Size),
            _ => Err(ParseError::UnknownPlane(value.trim().to_string())),
        }
    }
}

impl FromStr for AxisKind {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "location" => Ok(Self::Location),
            "alphabet" => Ok(Self::Alphabet),
            "time" => Ok(Self::Time),
            "category" => Ok(Self::Category),
            "hierarchy" => Ok(Self::Hierarchy),
            _ => Err(ParseError::UnknownAxis(value.trim().to_string())),
        }
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "gallery" => Ok(Self::Gallery),
            "list" => Ok(Self::List),
            "kanban" => Ok(Self::Kanban),
            "grid" => Ok(Self::Grid),
            "supergrid" | "super_grid" | "super-grid" => Ok(Self::SuperGrid),
            _ => Err(ParseError::UnknownMode(value.trim().to_string())),
        }
    }
}
