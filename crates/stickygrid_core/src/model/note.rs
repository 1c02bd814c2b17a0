//! Note card model.
//!
//! # Responsibility
//! - Hold one note's text, edit state and opacity animation progress.
//! - Provide lifecycle helpers for the display/edit mode switch.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `draft` is `Some` exactly while `editing` is true.
//! - `opacity` stays within `[0.0, 1.0]`.

use crate::model::fade::{Fade, FadeTick, OPACITY_STEP};
use uuid::Uuid;

/// Stable identifier for a note card.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A single sticky-note card.
///
/// The card is headless: the editable text surface of the original widget is
/// modeled as the `draft` buffer, which the host mirrors into whatever input
/// surface it renders. Committing moves the draft back into `text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    /// Stable identity, assigned at creation.
    pub id: NoteId,
    /// Display text. May contain simple inline markup; rendered as-is,
    /// never validated here.
    pub text: String,
    /// Whether the edit surface is open.
    pub editing: bool,
    /// Pending edit buffer, open while `editing`.
    pub draft: Option<String>,
    /// Animation progress in `[0.0, 1.0]`.
    pub opacity: f32,
    /// Active fade, if any.
    pub fade: Option<Fade>,
    dirty: bool,
}

impl Note {
    /// Creates an empty note in display mode.
    ///
    /// When `animated`, opacity starts at 0 with a fade-in running; the host
    /// must pump ticks until the fade completes. Otherwise the note appears
    /// at full opacity immediately.
    pub fn new(animated: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: String::new(),
            editing: false,
            draft: None,
            opacity: if animated { 0.0 } else { 1.0 },
            fade: animated.then_some(Fade::In),
            dirty: true,
        }
    }

    /// Replaces the display text and requests a redraw.
    ///
    /// Any string is accepted, including empty text and inline markup;
    /// malformed markup is the renderer's concern.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// Opens the edit surface pre-populated with the current text.
    pub fn begin_edit(&mut self) {
        self.draft = Some(self.text.clone());
        self.editing = true;
        self.dirty = true;
    }

    /// Replaces the open edit buffer. No-op while not editing.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.editing {
            self.draft = Some(text.into());
        }
    }

    /// Commits the open edit buffer back into `text` and closes the surface.
    ///
    /// No-op in display mode. Committing empty text is allowed; an empty
    /// note is valid and persists as an empty string.
    pub fn commit_edit(&mut self) {
        if let Some(draft) = self.draft.take() {
            self.set_text(draft);
        }
        self.editing = false;
    }

    /// Starts fading out from the current opacity.
    ///
    /// A fade-in still in progress is superseded; no two fades run on the
    /// same note at once.
    pub fn begin_fade_out(&mut self) {
        self.fade = Some(Fade::Out);
        self.dirty = true;
    }

    /// Advances the active fade by one tick.
    ///
    /// Opacity is clamped at the terminal bound and the fade self-cancels
    /// there. `FadedOut` means the owner must detach this note.
    pub fn tick_fade(&mut self) -> FadeTick {
        match self.fade {
            None => FadeTick::Idle,
            Some(Fade::In) => {
                self.opacity = (self.opacity + OPACITY_STEP).min(1.0);
                self.dirty = true;
                if self.opacity >= 1.0 {
                    self.fade = None;
                    FadeTick::FadedIn
                } else {
                    FadeTick::Running
                }
            }
            Some(Fade::Out) => {
                self.opacity = (self.opacity - OPACITY_STEP).max(0.0);
                self.dirty = true;
                if self.opacity <= 0.0 {
                    self.fade = None;
                    FadeTick::FadedOut
                } else {
                    FadeTick::Running
                }
            }
        }
    }

    /// Whether a fade is currently in flight.
    pub fn is_animating(&self) -> bool {
        self.fade.is_some()
    }

    /// Returns and clears the redraw request flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
