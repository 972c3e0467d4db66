//! Projection controller: the engine's public entry point.
//!
//! # Responsibility
//! - Own the axis mapping store, the mode machine and the engine config.
//! - Produce projections for caller-owned record slices.
//!
//! # Invariants
//! - State is read fresh on every `get_projection`; nothing is cached.
//! - Mode changes never reset or reinterpret axis mappings.
//! - Handlers cannot re-enter `set_mode`: dispatch holds the unique borrow.

use crate::config::EngineConfig;
use crate::model::axis::{AxisKind, AxisMapping, Mode, Plane};
use crate::model::projection::DataProjection;
use crate::model::record::Record;
use crate::projection::project;
use crate::state::mapping_store::AxisMappingStore;
use crate::state::mode_machine::{HandlerId, ModeMachine, ModeTransitionEvent};

/// Session-scoped projection engine.
///
/// ```
/// use grid_continuum_core::{AxisKind, GridContinuum, Mode, Plane, Record};
///
/// let records = vec![
///     Record::new("a").status("Open"),
///     Record::new("b").status("Done"),
/// ];
/// let mut engine = GridContinuum::new();
/// engine.set_axis_mapping(Plane::X, AxisKind::Category, "status");
/// engine.set_mode(Mode::Kanban);
///
/// let projection = engine.get_projection(&records);
/// assert_eq!(projection.cells.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct GridContinuum {
    mappings: AxisMappingStore,
    modes: ModeMachine,
    config: EngineConfig,
}

impl GridContinuum {
    /// Creates a controller in `gallery` mode with default config.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config: config.validated(),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config.validated();
    }

    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    /// Switches mode, notifying handlers only when the mode changes.
    ///
    /// Returns the emitted event; `None` means `next` was already current.
    pub fn set_mode(&mut self, next: Mode) -> Option<ModeTransitionEvent> {
        self.modes.transition(next, &self.mappings)
    }

    /// Assigns an axis/facet to a plane, returning the replaced mapping.
    pub fn set_axis_mapping(
        &mut self,
        plane: Plane,
        axis: AxisKind,
        facet: impl Into<String>,
    ) -> Option<AxisMapping> {
        self.mappings.set(plane, axis, facet)
    }

    pub fn get_axis_mapping(&self, plane: Plane) -> Option<&AxisMapping> {
        self.mappings.get(plane)
    }

    pub fn clear_axis_mapping(&mut self, plane: Plane) -> Option<AxisMapping> {
        self.mappings.clear(plane)
    }

    /// Active mappings in plane order.
    pub fn axis_mappings(&self) -> Vec<AxisMapping> {
        self.mappings.mappings()
    }

    /// Registers a transition listener; keep the id to unregister later.
    pub fn on_mode_transition<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(&ModeTransitionEvent) + Send + 'static,
    {
        self.modes.add_handler(Box::new(handler))
    }

    pub fn remove_mode_transition_handler(&mut self, id: HandlerId) -> bool {
        self.modes.remove_handler(id)
    }

    /// Projects `records` under the current mode and mappings.
    pub fn get_projection<'a>(&self, records: &'a [Record]) -> DataProjection<'a> {
        self.project_as(self.modes.current(), records)
    }

    /// Projects under `mode` without changing the current mode.
    ///
    /// Lets a UI preview a transition target before committing to it.
    pub fn project_as<'a>(&self, mode: Mode, records: &'a [Record]) -> DataProjection<'a> {
        project(mode, records, &self.mappings, &self.config)
    }
}
