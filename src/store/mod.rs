mod file;

pub use file::{BOARD_FILE, Database, LOCK_FILE, atomic_write};

use crate::error::StoreError;
use crate::models::{NewThought, Sort, Thought};

/// Parameters for a filtered, sorted, paginated find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOptions {
    /// Exact-match theme filter. `None` matches every thought.
    pub theme: Option<String>,
    pub sort: Sort,
    pub skip: usize,
    pub limit: usize,
}

/// Persistence primitives the board is built on.
///
/// Implementations must make `increment_hearts` atomic: concurrent callers
/// on the same ID never lose an increment.
pub trait ThoughtStore {
    /// Persist a new thought, assigning its ID and `createdAt`.
    fn insert(&self, thought: NewThought) -> Result<Thought, StoreError>;

    /// Number of thoughts in the whole collection, ignoring any filter.
    fn count(&self) -> Result<usize, StoreError>;

    fn find(&self, options: &FindOptions) -> Result<Vec<Thought>, StoreError>;

    /// Add one heart and return the updated thought, or `None` for an unknown ID.
    fn increment_hearts(&self, id: &str) -> Result<Option<Thought>, StoreError>;

    /// Every stored ID, in insertion order.
    fn ids(&self) -> Result<Vec<String>, StoreError>;

    /// Remove every thought, returning how many were removed.
    fn delete_all(&self) -> Result<usize, StoreError>;
}
