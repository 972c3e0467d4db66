//! Domain model for the projection engine.
//!
//! # Responsibility
//! - Define the record shape consumed by every projection mode.
//! - Define the closed axis/plane/mode vocabulary and projection output.
//!
//! # Invariants
//! - Records are read-only inputs identified by a stable `RecordId`.
//! - Projections borrow records; they never own or mutate them.

pub mod axis;
pub mod projection;
pub mod record;
