use std::cell::RefCell;
use std::rc::Rc;
use stickygrid_core::{
    load_grid, read_notes, save_grid, write_notes, GridConfig, GridEvent, NoteGrid, PersistError,
};

fn test_grid() -> NoteGrid {
    NoteGrid::new(GridConfig {
        screen_width: 300,
        note_width: 80,
        spacing: 20,
        ..GridConfig::default()
    })
}

fn roundtrip(texts: Vec<String>) -> Vec<String> {
    let mut grid = test_grid();
    grid.load(texts);
    let first = grid.serialize();

    let mut restored = test_grid();
    restored.load(first.clone());
    let second = restored.serialize();

    assert_eq!(first, second);
    second
}

#[test]
fn serialize_load_serialize_is_idempotent() {
    let texts = vec![
        "plain".to_string(),
        String::new(),
        "with <b>markup</b> &amp; entities".to_string(),
        "multi\nline".to_string(),
    ];
    assert_eq!(roundtrip(texts.clone()), texts);
}

#[test]
fn empty_sequence_roundtrips() {
    assert_eq!(roundtrip(Vec::new()), Vec::<String>::new());
}

#[test]
fn markup_passes_through_verbatim() {
    let texts = vec!["<i>never parsed</i>".to_string(), "<broken".to_string()];
    assert_eq!(roundtrip(texts.clone()), texts);
}

#[test]
fn save_and_load_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("annotate.json");

    let mut grid = test_grid();
    grid.load(vec!["a".to_string(), String::new(), "c".to_string()]);
    save_grid(&mut grid, &path).unwrap();

    let mut restored = test_grid();
    load_grid(&mut restored, &path).unwrap();
    assert_eq!(restored.serialize(), vec!["a", "", "c"]);
}

#[test]
fn save_captures_the_edit_in_progress() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("annotate.json");

    let mut grid = test_grid();
    let id = grid.add_note(false);
    grid.click_note(id);
    grid.set_draft("draft at save time");
    save_grid(&mut grid, &path).unwrap();

    assert_eq!(read_notes(&path).unwrap(), vec!["draft at save time"]);
}

#[test]
fn persisted_file_is_a_json_array_of_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("annotate.json");

    write_notes(&path, &["x".to_string(), String::new()]).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!(["x", ""]));
}

#[test]
fn malformed_file_fails_without_touching_the_grid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("annotate.json");
    std::fs::write(&path, "[\"ok\", 42]").unwrap();

    let mut grid = test_grid();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    grid.subscribe(move |event| sink.borrow_mut().push(event));
    grid.load(vec!["kept".to_string()]);

    let err = load_grid(&mut grid, &path).unwrap_err();
    assert!(matches!(err, PersistError::Malformed(_)));

    // The failed load is all-or-nothing: previous state survives.
    assert_eq!(grid.serialize(), vec!["kept"]);
    assert!(!events.borrow().contains(&GridEvent::NoNotes));
}
