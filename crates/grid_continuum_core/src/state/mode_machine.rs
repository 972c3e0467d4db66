//! Projection mode state machine.
//!
//! # Responsibility
//! - Hold the current mode (initially `gallery`).
//! - Emit one `ModeTransitionEvent` per actual mode change.
//!
//! # Invariants
//! - Any mode may transition to any other mode directly.
//! - Setting the current mode again is a no-op and emits nothing.
//! - Handlers run synchronously in registration order.
//! - Events carry the mapping set as it stood before the transition.

use crate::model::axis::{AxisMapping, Mode};
use crate::state::mapping_store::AxisMappingStore;
use log::{debug, info};
use serde::Serialize;
use std::fmt::{Debug, Formatter};

/// Immutable record of one mode change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeTransitionEvent {
    pub from_mode: Mode,
    pub to_mode: Mode,
    pub preserved_mappings: Vec<AxisMapping>,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
}

/// Token returned by handler registration; used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

pub type TransitionHandler = Box<dyn FnMut(&ModeTransitionEvent) + Send>;

#[derive(Default)]
pub struct ModeMachine {
    current: Mode,
    handlers: Vec<(HandlerId, TransitionHandler)>,
    next_handler_id: u64,
}

impl Debug for ModeMachine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeMachine")
            .field("current", &self.current)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl ModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    /// Moves to `next`, notifying handlers when the mode actually changes.
    ///
    /// Returns the emitted event, or `None` for a same-mode no-op.
    pub fn transition(
        &mut self,
        next: Mode,
        mappings: &AxisMappingStore,
    ) -> Option<ModeTransitionEvent> {
        if next == self.current {
            debug!("event=mode_noop module=state mode={next}");
            return None;
        }

        let event = ModeTransitionEvent {
            from_mode: self.current,
            to_mode: next,
            preserved_mappings: mappings.mappings(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        };
        self.current = next;

        info!(
            "event=mode_transition module=state from={} to={} mappings={} handlers={}",
            event.from_mode,
            event.to_mode,
            event.preserved_mappings.len(),
            self.handlers.len()
        );
        for (_, handler) in &mut self.handlers {
            handler(&event);
        }
        Some(event)
    }

    pub fn add_handler(&mut self, handler: TransitionHandler) -> HandlerId {
        let id = HandlerId(self.next_handler_id);
        self.next_handler_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Unregisters a handler. Returns `false` for unknown or removed ids.
    pub fn remove_handler(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
