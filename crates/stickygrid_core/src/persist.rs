//! Whole-file persistence of the note list.
//!
//! # Responsibility
//! - Read and write the persisted state: a JSON array of note text strings
//!   in flat grid order.
//! - Keep loads all-or-nothing; malformed data never partially applies.
//!
//! # Invariants
//! - The file is replaced as a whole on save; no incremental updates and no
//!   schema versioning.
//! - `read_notes` either yields the complete decoded list or a fatal error.

use crate::grid::NoteGrid;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence-layer failure surfaced to the host.
///
/// The core defines no recovery; the host decides user-facing behavior.
#[derive(Debug)]
pub enum PersistError {
    /// Underlying file I/O failed.
    Io(std::io::Error),
    /// Persisted data is not a JSON array of strings.
    Malformed(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "note file I/O failed: {err}"),
            Self::Malformed(err) => {
                write!(f, "persisted notes are not an array of strings: {err}")
            }
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

/// Reads the complete ordered note text list from `path`.
///
/// # Errors
/// - `Io` when the file cannot be read.
/// - `Malformed` when the contents are not a JSON array of strings.
pub fn read_notes(path: impl AsRef<Path>) -> PersistResult<Vec<String>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let texts: Vec<String> = serde_json::from_str(&raw).inspect_err(|err| {
        warn!(
            "event=load_failed module=persist path={} error={err}",
            path.display()
        );
    })?;
    debug!(
        "event=notes_read module=persist path={} count={}",
        path.display(),
        texts.len()
    );
    Ok(texts)
}

/// Writes the ordered note text list to `path`, replacing the whole file.
pub fn write_notes(path: impl AsRef<Path>, texts: &[String]) -> PersistResult<()> {
    let path = path.as_ref();
    let raw = serde_json::to_string(texts)?;
    fs::write(path, raw)?;
    debug!(
        "event=notes_written module=persist path={} count={}",
        path.display(),
        texts.len()
    );
    Ok(())
}

/// Loads a file into the grid.
///
/// All-or-nothing: the grid is untouched unless the whole file decodes.
pub fn load_grid(grid: &mut NoteGrid, path: impl AsRef<Path>) -> PersistResult<()> {
    let texts = read_notes(path)?;
    grid.load(texts);
    Ok(())
}

/// Saves the grid to a file.
///
/// Serialization commits any open edit surface first, so in-progress text
/// is captured.
pub fn save_grid(grid: &mut NoteGrid, path: impl AsRef<Path>) -> PersistResult<()> {
    let texts = grid.serialize();
    write_notes(path, &texts)
}

#[cfg(test)]
mod tests {
    use super::{read_notes, write_notes, PersistError};

    #[test]
    fn write_then_read_preserves_order_and_empty_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let texts = vec!["a".to_string(), String::new(), "<b>bold</b>".to_string()];
        write_notes(&path, &texts).unwrap();
        assert_eq!(read_notes(&path).unwrap(), texts);
    }

    #[test]
    fn non_array_payload_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let err = read_notes(&path).unwrap_err();
        assert!(matches!(err, PersistError::Malformed(_)));
    }

    #[test]
    fn array_of_non_strings_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = read_notes(&path).unwrap_err();
        assert!(matches!(err, PersistError::Malformed(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_notes(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PersistError::Io(_)));
    }
}
