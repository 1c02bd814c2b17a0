//! Headless core for a sticky-note grid widget.
//! This crate is the single source of truth for note layout and lifecycle
//! invariants; rendering and event plumbing live in the host.

pub mod config;
pub mod events;
pub mod grid;
pub mod logging;
pub mod model;
pub mod persist;

pub use config::{GridConfig, NoteColors};
pub use events::GridEvent;
pub use grid::{NoteGrid, Row};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::fade::{Fade, FadeTick, OPACITY_STEP, TICK_INTERVAL};
pub use model::note::{Note, NoteId};
pub use persist::{
    load_grid, read_notes, save_grid, write_notes, PersistError, PersistResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
