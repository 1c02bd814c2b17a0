//! Host-facing grid notifications.
//!
//! The original widget raised GTK signals; here the grid keeps an explicit
//! observer list and dispatches synchronously on the single logical UI
//! thread, with zero dependency on any rendering toolkit.

/// Notification raised by [`crate::NoteGrid`] toward its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// A note was appended; the host should enable prev/next navigation.
    NoteAdded,
    /// The grid became empty; the host should disable navigation and the
    /// remove-mode toggle.
    NoNotes,
}

pub(crate) type Observer = Box<dyn FnMut(GridEvent)>;
