//! Domain model for the sticky-note grid.
//!
//! # Responsibility
//! - Define the canonical `Note` card state shared by layout and persistence.
//! - Model opacity animation as host-driven tick stepping.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - A note runs at most one fade at a time.

pub mod fade;
pub mod note;
