use strsim::levenshtein;
use tracing::info;

use crate::error::BoardError;
use crate::models::Thought;
use crate::store::ThoughtStore;

/// Add one heart to a thought and return it as stored afterwards.
pub fn run(thought_id: &str, store: &impl ThoughtStore) -> Result<Thought, BoardError> {
    let liked = store
        .increment_hearts(thought_id)?
        .ok_or_else(|| BoardError::NotFound {
            id: thought_id.to_string(),
        })?;

    info!(id = %liked.id, hearts = liked.hearts, "liked thought");
    Ok(liked)
}

/// IDs are short random strings, so two edits is already a different thought.
const MAX_TYPO_DISTANCE: usize = 2;

/// The stored thought ID a mistyped `thought_id` most likely meant.
///
/// Only used to enrich the not-found message; a store failure here just
/// means no suggestion.
pub fn suggest(thought_id: &str, store: &impl ThoughtStore) -> Option<String> {
    store
        .ids()
        .ok()?
        .into_iter()
        .map(|id| {
            let distance = levenshtein(thought_id, &id);
            (id, distance)
        })
        .filter(|(_, distance)| *distance <= MAX_TYPO_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(id, _)| id)
}
