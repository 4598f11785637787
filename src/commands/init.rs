use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::store::{BOARD_FILE, Database};

#[derive(Debug)]
pub enum InitOutcome {
    Created(PathBuf),
    AlreadyInitialized(PathBuf),
}

/// Create a board at `board_dir` unless one is already there.
pub fn run(board_dir: &Path) -> Result<InitOutcome> {
    if board_dir.join(BOARD_FILE).exists() {
        return Ok(InitOutcome::AlreadyInitialized(board_dir.to_path_buf()));
    }

    Database::init(board_dir)
        .with_context(|| format!("Failed to initialize board in {}", board_dir.display()))?;
    Ok(InitOutcome::Created(board_dir.to_path_buf()))
}
