use serde::Serialize;
use tracing::warn;

use crate::error::BoardError;
use crate::store::ThoughtStore;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ResetSummary {
    pub deleted: usize,
}

/// Delete every thought on the board. Only ever invoked explicitly.
pub fn run(store: &impl ThoughtStore) -> Result<ResetSummary, BoardError> {
    let deleted = store.delete_all()?;
    warn!(deleted, "deleted all thoughts");
    Ok(ResetSummary { deleted })
}
