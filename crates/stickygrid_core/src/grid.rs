//! Note grid layout and lifecycle.
//!
//! # Responsibility
//! - Own the ordered note sequence and pack it into fixed-capacity rows.
//! - Drive the note lifecycle: add, edit, remove-mode, fade-out, reflow.
//! - Notify the host when the grid gains its first note or becomes empty.
//!
//! # Invariants
//! - Flat sequence order equals left-to-right, top-to-bottom row order, and
//!   equals persistence order.
//! - Every note belongs to exactly one row; only the last row may be
//!   partially filled.
//! - At most one note is editing at any time.
//! - A note is detached only after its fade-out reaches zero opacity, and
//!   reflow runs only after detachment.

use crate::config::GridConfig;
use crate::events::{GridEvent, Observer};
use crate::model::fade::FadeTick;
use crate::model::note::{Note, NoteId};
use log::debug;

/// One fixed-capacity horizontal grouping of notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    capacity: usize,
    ids: Vec<NoteId>,
}

impl Row {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ids: Vec::with_capacity(capacity),
        }
    }

    fn has_space(&self) -> bool {
        self.ids.len() < self.capacity
    }

    /// Note identities in display order within this row.
    pub fn note_ids(&self) -> &[NoteId] {
        &self.ids
    }

    /// Number of notes currently placed in this row.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the row holds no notes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Maximum number of notes this row can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Ordered collection of sticky notes packed into rows.
///
/// All mutation happens on one logical thread in response to discrete host
/// events; animation is advanced by the host calling [`NoteGrid::tick`] on
/// a repeating timer.
pub struct NoteGrid {
    config: GridConfig,
    row_capacity: usize,
    notes: Vec<Note>,
    rows: Vec<Row>,
    removing: bool,
    observers: Vec<Observer>,
}

impl NoteGrid {
    /// Creates an empty grid; row capacity is computed once from `config`.
    pub fn new(config: GridConfig) -> Self {
        let row_capacity = config.row_capacity();
        Self {
            config,
            row_capacity,
            notes: Vec::new(),
            rows: Vec::new(),
            removing: false,
            observers: Vec::new(),
        }
    }

    /// Registers a host observer for [`GridEvent`] notifications.
    ///
    /// Observers are invoked synchronously, in registration order.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(GridEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// The configuration this grid was constructed with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Notes in flat (display and persistence) order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Current row packing.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of notes in the grid.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the grid holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Whether remove-mode is active.
    pub fn is_removing(&self) -> bool {
        self.removing
    }

    /// Looks up one note by identity.
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Flat index of the note currently editing, if any.
    pub fn editing_index(&self) -> Option<usize> {
        self.notes.iter().position(|note| note.editing)
    }

    /// Appends a new empty note and fires `NoteAdded`.
    ///
    /// The note lands in the last row when it has spare capacity, else a
    /// new row is opened. It starts in display mode with its edit surface
    /// closed; when `animated`, it fades in over subsequent ticks.
    pub fn add_note(&mut self, animated: bool) -> NoteId {
        let note = Note::new(animated);
        let id = note.id;

        match self.rows.last_mut() {
            Some(row) if row.has_space() => row.ids.push(id),
            _ => {
                let mut row = Row::new(self.row_capacity);
                row.ids.push(id);
                self.rows.push(row);
            }
        }
        self.notes.push(note);

        debug!(
            "event=note_added module=grid animated={} total={}",
            animated,
            self.notes.len()
        );
        self.emit(GridEvent::NoteAdded);
        id
    }

    /// Toggles remove-mode.
    ///
    /// Entering remove-mode closes every open edit surface, committing its
    /// text first; clicking a note then removes it instead of editing it.
    /// Disabling restores click-to-edit.
    pub fn set_remove_mode(&mut self, enabled: bool) {
        self.removing = enabled;
        if enabled {
            self.commit_open_editors();
        }
        debug!("event=remove_mode module=grid enabled={enabled}");
    }

    /// Handles a click on a note card.
    ///
    /// In remove-mode the note starts fading out; otherwise every other
    /// open editor is committed and this note enters edit mode. Unknown
    /// identities are ignored.
    pub fn click_note(&mut self, id: NoteId) {
        let Some(index) = self.notes.iter().position(|note| note.id == id) else {
            return;
        };
        if self.removing {
            self.start_remove(index);
        } else {
            self.enter_edit(index);
        }
    }

    /// Moves the edit focus by `delta` within the flat sequence.
    ///
    /// With an open editor, its text is committed and the note at
    /// `index + delta` enters edit mode. With no editor open, or when the
    /// target index is out of bounds, the first note is edited instead.
    /// No-op on an empty grid.
    pub fn select_note(&mut self, delta: i32) {
        if self.notes.is_empty() {
            return;
        }
        let target = self
            .editing_index()
            .and_then(|index| {
                let target = index as i64 + i64::from(delta);
                (0..self.notes.len() as i64)
                    .contains(&target)
                    .then_some(target as usize)
            })
            .unwrap_or(0);
        self.enter_edit(target);
    }

    /// Replaces the open edit buffer. No-op when nothing is editing.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(index) = self.editing_index() {
            self.notes[index].set_draft(text);
        }
    }

    /// Commits the open edit buffer, if any, back into its note.
    pub fn commit_edit(&mut self) {
        if let Some(index) = self.editing_index() {
            self.notes[index].commit_edit();
        }
    }

    /// Replaces the text of the note at a flat index. No-op out of bounds.
    pub fn set_note_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(note) = self.notes.get_mut(index) {
            note.set_text(text);
        }
    }

    /// Starts fade-out removal of the note at a flat index.
    ///
    /// Detachment and reflow happen from [`NoteGrid::tick`] once opacity
    /// reaches zero. No-op out of bounds.
    pub fn remove_note(&mut self, index: usize) {
        if index < self.notes.len() {
            self.start_remove(index);
        }
    }

    /// Advances all fades by one tick.
    ///
    /// Notes whose fade-out completed are detached, then the grid reflows
    /// once; reflow never runs before detachment. Returns `true` while any
    /// animation still needs further ticks, so the host knows to keep its
    /// timer scheduled.
    pub fn tick(&mut self) -> bool {
        let mut animating = false;
        let mut detached = false;

        let mut index = 0;
        while index < self.notes.len() {
            match self.notes[index].tick_fade() {
                FadeTick::FadedOut => {
                    let note = self.notes.remove(index);
                    detached = true;
                    debug!(
                        "event=note_detached module=grid id={} remaining={}",
                        note.id,
                        self.notes.len()
                    );
                }
                FadeTick::Running => {
                    animating = true;
                    index += 1;
                }
                FadeTick::Idle | FadeTick::FadedIn => index += 1,
            }
        }

        if detached {
            self.reflow();
        }
        animating
    }

    /// Rebuilds row packing from the flat sequence.
    ///
    /// Packing is contiguous: every row except possibly the last is filled
    /// to capacity and flat order is preserved. When the grid is empty this
    /// clears remove-mode and fires `NoNotes`.
    pub fn reflow(&mut self) {
        self.rows.clear();
        for chunk in self.notes.chunks(self.row_capacity) {
            let mut row = Row::new(self.row_capacity);
            row.ids.extend(chunk.iter().map(|note| note.id));
            self.rows.push(row);
        }

        if self.notes.is_empty() {
            self.removing = false;
            debug!("event=no_notes module=grid");
            self.emit(GridEvent::NoNotes);
        }
    }

    /// Replaces the grid contents with one non-animated note per entry.
    ///
    /// Entries keep their order; `NoteAdded` fires per note. An empty input
    /// leaves an empty grid and fires `NoNotes`. The caller is responsible
    /// for handing over a fully decoded list (loads are all-or-nothing).
    pub fn load(&mut self, texts: Vec<String>) {
        self.notes.clear();
        self.rows.clear();

        let count = texts.len();
        for text in texts {
            self.add_note(false);
            if let Some(note) = self.notes.last_mut() {
                note.set_text(text);
            }
        }
        debug!("event=grid_loaded module=grid count={count}");

        if self.notes.is_empty() {
            self.reflow();
        }
    }

    /// Returns every note's text in flat order.
    ///
    /// Any open edit surface is committed first, so the text being typed at
    /// save time is captured (the original achieved this as a side effect
    /// of entering remove-mode before writing the file).
    pub fn serialize(&mut self) -> Vec<String> {
        self.commit_open_editors();
        self.notes.iter().map(|note| note.text.clone()).collect()
    }

    fn enter_edit(&mut self, index: usize) {
        for (other, note) in self.notes.iter_mut().enumerate() {
            if other != index {
                note.commit_edit();
            }
        }
        self.notes[index].begin_edit();
    }

    fn start_remove(&mut self, index: usize) {
        let note = &mut self.notes[index];
        debug!("event=note_removal_started module=grid id={}", note.id);
        note.commit_edit();
        note.begin_fade_out();
    }

    fn commit_open_editors(&mut self) {
        for note in &mut self.notes {
            note.commit_edit();
        }
    }

    fn emit(&mut self, event: GridEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NoteGrid;
    use crate::config::GridConfig;

    fn grid_with_capacity(capacity: u32) -> NoteGrid {
        NoteGrid::new(GridConfig {
            screen_width: capacity * 100,
            note_width: 80,
            spacing: 20,
            ..GridConfig::default()
        })
    }

    #[test]
    fn rows_fill_before_a_new_one_opens() {
        let mut grid = grid_with_capacity(2);
        for _ in 0..5 {
            grid.add_note(false);
        }
        let lens: Vec<usize> = grid.rows().iter().map(|row| row.len()).collect();
        assert_eq!(lens, vec![2, 2, 1]);
    }

    #[test]
    fn row_order_matches_flat_order() {
        let mut grid = grid_with_capacity(3);
        let ids: Vec<_> = (0..7).map(|_| grid.add_note(false)).collect();
        let row_order: Vec<_> = grid
            .rows()
            .iter()
            .flat_map(|row| row.note_ids().iter().copied())
            .collect();
        assert_eq!(row_order, ids);
    }

    #[test]
    fn clicking_unknown_id_is_ignored() {
        let mut grid = grid_with_capacity(2);
        grid.add_note(false);
        grid.click_note(uuid::Uuid::new_v4());
        assert_eq!(grid.editing_index(), None);
    }

    #[test]
    fn entering_edit_commits_the_previous_editor() {
        let mut grid = grid_with_capacity(3);
        let first = grid.add_note(false);
        let second = grid.add_note(false);

        grid.click_note(first);
        grid.set_draft("typed into first");
        grid.click_note(second);

        assert_eq!(grid.editing_index(), Some(1));
        assert_eq!(grid.notes()[0].text, "typed into first");
        assert!(!grid.notes()[0].editing);
    }

    #[test]
    fn remove_out_of_bounds_is_noop() {
        let mut grid = grid_with_capacity(2);
        grid.add_note(false);
        grid.remove_note(5);
        assert_eq!(grid.len(), 1);
        assert!(!grid.notes()[0].is_animating());
    }
}
