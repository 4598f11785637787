use tracing::{info, warn};

use super::list::{self, ListRequest, Listing};
use crate::error::BoardError;
use crate::models::{NewThought, Order, split_author_tag};
use crate::store::ThoughtStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    /// Raw message text, possibly ending in a `~author` tag.
    pub message: String,
    pub theme: Option<String>,
    pub page: i64,
    pub order: Order,
}

impl PostRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            theme: None,
            page: 1,
            order: Order::default(),
        }
    }
}

/// Build the thought a raw message describes, without touching the store.
pub fn prepare(message: &str, theme: Option<&str>) -> Result<NewThought, BoardError> {
    let tagged = split_author_tag(message);

    let mut thought = NewThought::new(tagged.body).theme(theme.unwrap_or_default());
    if let Some(author) = tagged.author {
        thought = thought.posted_by(author);
    }

    thought.validate().map_err(|reason| BoardError::Validation {
        message: message.to_string(),
        reason,
    })?;
    Ok(thought)
}

/// Save a thought, then return a fresh listing page.
///
/// The listing uses the request's page and order but no theme filter, so the
/// caller always sees the whole board after posting. Every check runs before
/// the insert; a failure after it is reported as `Refresh`, since the thought
/// is already saved.
pub fn run(request: &PostRequest, store: &impl ThoughtStore) -> Result<Listing, BoardError> {
    let prepared = list::page_offset(request.page)
        .and_then(|_| prepare(&request.message, request.theme.as_deref()));
    let thought = prepared.inspect_err(|err| {
        warn!(%err, "rejected thought");
    })?;

    let created = store
        .insert(thought)
        .map_err(|source| BoardError::Creation {
            message: request.message.clone(),
            source,
        })?;
    info!(id = %created.id, "posted thought");

    let refresh = ListRequest {
        page: request.page,
        order: request.order,
        theme: None,
    };
    list::run(&refresh, store).map_err(|err| match err {
        BoardError::Store(source) => BoardError::Refresh {
            id: created.id,
            source,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorBody, StoreError, ValidationError};
    use crate::models::{ANONYMOUS, Thought};
    use crate::store::{Database, FindOptions};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn board() -> (TempDir, Database) {
        let dir = TempDir::new().unwrap();
        let db = Database::init(dir.path().join(".thoughts")).unwrap();
        (dir, db)
    }

    #[rstest]
    fn plain_message_is_anonymous(board: (TempDir, Database)) {
        let (_dir, db) = board;
        let listing = run(&PostRequest::new("hello world"), &db).unwrap();

        let created = &listing.thoughts[0];
        assert_eq!(created.message, "hello world");
        assert_eq!(created.posted_by, ANONYMOUS);
        assert_eq!(created.hearts, 0);
        assert_eq!(created.theme, "");
    }

    #[rstest]
    fn tagged_message_sets_author(board: (TempDir, Database)) {
        let (_dir, db) = board;
        let listing = run(&PostRequest::new("hi there ~Bob"), &db).unwrap();

        let created = &listing.thoughts[0];
        assert_eq!(created.message, "hi there ");
        assert_eq!(created.posted_by, "Bob");
    }

    #[rstest]
    #[case::short("hey")]
    #[case::long_body(&"x".repeat(141))]
    // The tag is stripped before the length check.
    #[case::short_after_strip("hey ~somebody with a long name")]
    fn invalid_message_writes_nothing(board: (TempDir, Database), #[case] message: &str) {
        let (_dir, db) = board;
        let err = run(&PostRequest::new(message), &db).unwrap_err();

        match err {
            BoardError::Validation { message: original, .. } => assert_eq!(original, message),
            other => panic!("expected a validation error, got {other:?}"),
        }
        assert_eq!(db.count().unwrap(), 0);
    }

    #[rstest]
    fn long_message_reports_its_length() {
        let err = prepare(&"x".repeat(150), None).unwrap_err();
        assert!(matches!(
            err,
            BoardError::Validation {
                reason: ValidationError::MessageTooLong { len: 150 },
                ..
            }
        ));
    }

    // A theme on the post is stored, but the refreshed page ignores it.
    #[rstest]
    fn refresh_ignores_theme_filter(board: (TempDir, Database)) {
        let (_dir, db) = board;
        run(&PostRequest::new("untagged thought"), &db).unwrap();

        let request = PostRequest {
            theme: Some("music".to_string()),
            ..PostRequest::new("themed thought")
        };
        let listing = run(&request, &db).unwrap();

        assert_eq!(listing.thoughts.len(), 2);
        assert_eq!(listing.thoughts[0].theme, "music");
        assert_eq!(listing.total_pages, 1);
    }

    #[rstest]
    fn refresh_uses_requested_page_and_order(board: (TempDir, Database)) {
        let (_dir, db) = board;
        for i in 0..20 {
            run(&PostRequest::new(format!("thought {i:02}")), &db).unwrap();
        }

        let request = PostRequest {
            page: 2,
            order: Order::Oldest,
            ..PostRequest::new("the newest one")
        };
        let listing = run(&request, &db).unwrap();

        assert_eq!(listing.total_pages, 2);
        assert_eq!(listing.thoughts.len(), 1);
        assert_eq!(listing.thoughts[0].message, "the newest one");
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-1)]
    #[case::offset_overflows(i64::MAX)]
    fn invalid_page_writes_nothing(board: (TempDir, Database), #[case] page: i64) {
        let (_dir, db) = board;
        let request = PostRequest {
            page,
            ..PostRequest::new("hello world")
        };

        let err = run(&request, &db).unwrap_err();
        assert!(matches!(err, BoardError::InvalidPage(p) if p == page));
        assert_eq!(db.count().unwrap(), 0);
    }

    /// Saves normally but cannot read the board back.
    struct UnreadableBoard(Database);

    impl ThoughtStore for UnreadableBoard {
        fn insert(&self, thought: NewThought) -> Result<Thought, StoreError> {
            self.0.insert(thought)
        }

        fn count(&self) -> Result<usize, StoreError> {
            self.0.count()
        }

        fn find(&self, _options: &FindOptions) -> Result<Vec<Thought>, StoreError> {
            Err(StoreError::Missing(self.0.base_path().to_path_buf()))
        }

        fn increment_hearts(&self, id: &str) -> Result<Option<Thought>, StoreError> {
            self.0.increment_hearts(id)
        }

        fn ids(&self) -> Result<Vec<String>, StoreError> {
            self.0.ids()
        }

        fn delete_all(&self) -> Result<usize, StoreError> {
            self.0.delete_all()
        }
    }

    // The caller learns the thought was saved even though the listing failed.
    #[rstest]
    fn failed_refresh_reports_saved_id(board: (TempDir, Database)) {
        let (_dir, db) = board;
        let store = UnreadableBoard(db);

        let err = run(&PostRequest::new("hello world"), &store).unwrap_err();
        let saved = store.0.ids().unwrap();
        assert_eq!(saved.len(), 1);
        assert!(matches!(&err, BoardError::Refresh { id, .. } if *id == saved[0]));

        let body = ErrorBody::from(&err);
        assert_eq!(body.message.as_deref(), Some("Thought saved, but the board could not be reloaded"));
    }

    #[rstest]
    fn store_failure_becomes_creation_error(board: (TempDir, Database)) {
        let (_dir, db) = board;
        std::fs::remove_dir_all(db.base_path()).unwrap();

        let err = run(&PostRequest::new("hello world"), &db).unwrap_err();
        assert!(matches!(
            &err,
            BoardError::Creation { message, .. } if message == "hello world"
        ));
        assert!(!err.is_client_error());
    }

    #[rstest]
    fn created_thought_is_persisted(board: (TempDir, Database)) {
        let (_dir, db) = board;
        run(&PostRequest::new("good morning ~ALICE"), &db).unwrap();

        let options = FindOptions {
            theme: None,
            sort: Order::Newest.sort(),
            skip: 0,
            limit: 1,
        };
        let stored = db.find(&options).unwrap();
        assert_eq!(stored[0].posted_by, "ALICE");
        assert_eq!(stored[0].message, "good morning ");
    }
}
