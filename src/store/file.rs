use std::cmp::Reverse;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{FindOptions, ThoughtStore};
use crate::error::StoreError;
use crate::id::generate_id;
use crate::models::{Direction, NewThought, Sort, SortField, Thought};

pub const BOARD_FILE: &str = "thoughts.toml";
pub const LOCK_FILE: &str = "board.lock";

/// Atomically write content to a file using a temporary file + rename.
///
/// Callers must hold the board's exclusive lock; the temporary path is fixed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), StoreError> {
    let temp = path.with_extension("toml.tmp");
    let mut file = File::create(&temp).map_err(|e| StoreError::io(&temp, e))?;
    file.write_all(content)
        .map_err(|e| StoreError::io(&temp, e))?;
    file.sync_all().map_err(|e| StoreError::io(&temp, e))?;
    fs::rename(&temp, path).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Collection {
    #[serde(default)]
    thoughts: Vec<Thought>,
}

/// Held for the duration of one store call. Dropping it releases the lock.
struct BoardLock {
    file: File,
}

impl Drop for BoardLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// File-backed board: one TOML collection in insertion order, guarded by an
/// OS lock on a sibling lock file.
///
/// Every call reloads from disk under the lock, so several processes (or
/// several `Database` handles in one process) can share a board.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open an existing board directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if !path.is_dir() {
            return Err(StoreError::Missing(path));
        }

        Ok(Self { path })
    }

    /// Create the board directory and an empty collection if they don't exist yet.
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        fs::create_dir_all(&path).map_err(|e| StoreError::io(&path, e))?;

        let db = Self { path };
        let _lock = db.lock_exclusive()?;
        if !db.board_file().exists() {
            db.save(&Collection::default())?;
            info!(path = %db.path.display(), "initialized board");
        }
        Ok(db)
    }

    /// The board directory.
    pub fn base_path(&self) -> &Path {
        &self.path
    }

    fn board_file(&self) -> PathBuf {
        self.path.join(BOARD_FILE)
    }

    fn open_lock_file(&self) -> Result<File, StoreError> {
        let path = self.path.join(LOCK_FILE);
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| StoreError::io(&path, e))
    }

    fn lock_shared(&self) -> Result<BoardLock, StoreError> {
        let file = self.open_lock_file()?;
        FileExt::lock_shared(&file).map_err(StoreError::Lock)?;
        Ok(BoardLock { file })
    }

    fn lock_exclusive(&self) -> Result<BoardLock, StoreError> {
        let file = self.open_lock_file()?;
        FileExt::lock_exclusive(&file).map_err(StoreError::Lock)?;
        Ok(BoardLock { file })
    }

    fn load(&self) -> Result<Collection, StoreError> {
        let path = self.board_file();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Collection::default()),
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        toml::from_str(&content).map_err(|source| StoreError::Parse { path, source })
    }

    fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        let content = toml::to_string(collection)?;
        atomic_write(&self.board_file(), content.as_bytes())
    }
}

/// Sort in place. Ties keep insertion order, except that a later insert
/// counts as newer when `createdAt` ties under a descending sort.
fn sort_thoughts(thoughts: &mut [Thought], sort: Sort) {
    match (sort.field, sort.direction) {
        (SortField::CreatedAt, Direction::Ascending) => thoughts.sort_by_key(|t| t.created_at),
        (SortField::CreatedAt, Direction::Descending) => {
            thoughts.reverse();
            thoughts.sort_by_key(|t| Reverse(t.created_at));
        }
        (SortField::Hearts, Direction::Ascending) => thoughts.sort_by_key(|t| t.hearts),
        (SortField::Hearts, Direction::Descending) => thoughts.sort_by_key(|t| Reverse(t.hearts)),
    }
}

impl ThoughtStore for Database {
    fn insert(&self, thought: NewThought) -> Result<Thought, StoreError> {
        let _lock = self.lock_exclusive()?;
        let mut collection = self.load()?;

        let mut id = generate_id();
        while collection.thoughts.iter().any(|t| t.id == id) {
            id = generate_id();
        }

        let thought = thought.into_thought(id, Timestamp::now().as_millisecond());
        collection.thoughts.push(thought.clone());
        self.save(&collection)?;

        info!(id = %thought.id, posted_by = %thought.posted_by, "thought created");
        Ok(thought)
    }

    fn count(&self) -> Result<usize, StoreError> {
        let _lock = self.lock_shared()?;
        Ok(self.load()?.thoughts.len())
    }

    fn find(&self, options: &FindOptions) -> Result<Vec<Thought>, StoreError> {
        let collection = {
            let _lock = self.lock_shared()?;
            self.load()?
        };

        let mut thoughts: Vec<Thought> = collection
            .thoughts
            .into_iter()
            .filter(|t| options.theme.as_deref().is_none_or(|theme| t.theme == theme))
            .collect();
        sort_thoughts(&mut thoughts, options.sort);

        debug!(
            matched = thoughts.len(),
            skip = options.skip,
            limit = options.limit,
            "find"
        );
        Ok(thoughts
            .into_iter()
            .skip(options.skip)
            .take(options.limit)
            .collect())
    }

    fn increment_hearts(&self, id: &str) -> Result<Option<Thought>, StoreError> {
        let _lock = self.lock_exclusive()?;
        let mut collection = self.load()?;

        let Some(thought) = collection.thoughts.iter_mut().find(|t| t.id == id) else {
            debug!(id, "increment on unknown thought");
            return Ok(None);
        };
        thought.hearts = thought.hearts.saturating_add(1);
        let updated = thought.clone();

        self.save(&collection)?;
        debug!(id, hearts = updated.hearts, "hearts incremented");
        Ok(Some(updated))
    }

    fn ids(&self) -> Result<Vec<String>, StoreError> {
        let _lock = self.lock_shared()?;
        Ok(self.load()?.thoughts.into_iter().map(|t| t.id).collect())
    }

    fn delete_all(&self) -> Result<usize, StoreError> {
        let _lock = self.lock_exclusive()?;
        let removed = self.load()?.thoughts.len();
        self.save(&Collection::default())?;

        info!(removed, "board reset");
        Ok(removed)
    }
}
