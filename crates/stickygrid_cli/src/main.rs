//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable host to verify `stickygrid_core` linkage.
//! - Round-trip a notes file through the grid for quick local sanity checks.

use log::info;
use std::process::ExitCode;
use stickygrid_core::{
    default_log_level, init_logging, load_grid, save_grid, GridConfig, NoteGrid,
};

fn main() -> ExitCode {
    if let Some(log_dir) = std::env::var_os("STICKYGRID_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
            eprintln!("stickygrid: logging disabled: {err}");
        }
    }

    println!("stickygrid_core version={}", stickygrid_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    let mut grid = NoteGrid::new(GridConfig::default());
    if let Err(err) = load_grid(&mut grid, &path) {
        eprintln!("stickygrid: cannot load `{path}`: {err}");
        return ExitCode::FAILURE;
    }
    info!("event=file_loaded module=cli path={path} notes={}", grid.len());

    for (row_index, row) in grid.rows().iter().enumerate() {
        println!("row {row_index}: {}/{} notes", row.len(), row.capacity());
    }
    for note in grid.notes() {
        println!("  [{}] {:?}", note.id, note.text);
    }

    if let Err(err) = save_grid(&mut grid, &path) {
        eprintln!("stickygrid: cannot save `{path}`: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
