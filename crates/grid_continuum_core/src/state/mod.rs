//! Session-scoped view state owned by the controller.
//!
//! # Responsibility
//! - Hold plane -> axis assignments and the current projection mode.
//!
//! # Invariants
//! - State is mutated only through the controller's setters.
//! - No internal synchronization; callers serialize mutations.

pub mod mapping_store;
pub mod mode_machine;
