//! Tick-driven opacity animation.
//!
//! The core owns no timer. The host schedules a repeating callback at
//! [`TICK_INTERVAL`] and pumps [`crate::NoteGrid::tick`]; each tick moves
//! opacity by [`OPACITY_STEP`] toward the terminal bound and the fade
//! self-terminates once the bound is reached.

use std::time::Duration;

/// Suggested host timer period between animation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Opacity change applied by one animation tick.
pub const OPACITY_STEP: f32 = 0.1;

/// Direction of an in-flight opacity fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    /// Opacity climbs toward 1.0 (note being born).
    In,
    /// Opacity falls toward 0.0 (note pending removal).
    Out,
}

/// Outcome of advancing one note's fade by a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeTick {
    /// No fade is active.
    Idle,
    /// The fade advanced and needs further ticks.
    Running,
    /// Fade-in just reached full opacity and stopped.
    FadedIn,
    /// Fade-out just reached zero opacity; the note must be detached.
    FadedOut,
}

impl FadeTick {
    /// Whether the host should keep its animation timer scheduled.
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}
