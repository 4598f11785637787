use std::env;
use std::path::PathBuf;

use tracing::{debug, info};

/// Points every command at a specific board directory instead of searching
/// upward from the current directory.
pub const BOARD_DIR_VAR: &str = "THOUGHTS_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub board_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            board_dir: try_load(&lookup, BOARD_DIR_VAR).map(PathBuf::from),
        }
    }
}

fn try_load(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(value) => {
            info!("{key} set, using {value}");
            Some(value)
        }
        None => {
            debug!("{key} not set, using default");
            None
        }
    }
}
