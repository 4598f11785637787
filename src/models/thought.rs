use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_MESSAGE_LEN: usize = 5;
pub const MAX_MESSAGE_LEN: usize = 140;
pub const MAX_POSTED_BY_LEN: usize = 20;
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
    pub id: String,
    pub message: String,
    pub hearts: u64,
    /// Milliseconds since the Unix epoch, set once when the store persists the thought.
    pub created_at: i64,
    pub posted_by: String,
    pub theme: String,
}

impl Thought {
    pub fn created_at_timestamp(&self) -> Option<Timestamp> {
        Timestamp::from_millisecond(self.created_at).ok()
    }
}

/// A thought that has not been persisted yet. The store assigns `id`,
/// `hearts` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThought {
    message: String,
    posted_by: String,
    theme: String,
}

impl NewThought {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            posted_by: ANONYMOUS.to_string(),
            theme: String::new(),
        }
    }

    #[must_use]
    pub fn posted_by(mut self, posted_by: impl Into<String>) -> Self {
        self.posted_by = posted_by.into();
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check the length constraints on `message` and `postedBy`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_message(&self.message)?;

        let len = self.posted_by.chars().count();
        if len > MAX_POSTED_BY_LEN {
            return Err(ValidationError::PostedByTooLong { len });
        }
        Ok(())
    }

    pub fn into_thought(self, id: String, created_at: i64) -> Thought {
        Thought {
            id,
            message: self.message,
            hearts: 0,
            created_at,
            posted_by: self.posted_by,
            theme: self.theme,
        }
    }
}

pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    let len = message.chars().count();
    if len < MIN_MESSAGE_LEN {
        return Err(ValidationError::MessageTooShort { len });
    }
    if len > MAX_MESSAGE_LEN {
        return Err(ValidationError::MessageTooLong { len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_thought_defaults() {
        let thought = NewThought::new("hello world").into_thought("abc".to_string(), 42);
        assert_eq!(thought.posted_by, ANONYMOUS);
        assert_eq!(thought.theme, "");
        assert_eq!(thought.hearts, 0);
        assert_eq!(thought.created_at, 42);
    }

    #[rstest]
    #[case::four_chars("abcd", Err(ValidationError::MessageTooShort { len: 4 }))]
    #[case::five_chars("abcde", Ok(()))]
    #[case::max_len(&"x".repeat(140), Ok(()))]
    #[case::over_max(&"x".repeat(141), Err(ValidationError::MessageTooLong { len: 141 }))]
    #[case::empty("", Err(ValidationError::MessageTooShort { len: 0 }))]
    // Five characters even though it is ten bytes.
    #[case::multibyte("ééééé", Ok(()))]
    fn validate_message_bounds(#[case] message: &str, #[case] expected: Result<(), ValidationError>) {
        assert_eq!(validate_message(message), expected);
    }

    #[rstest]
    fn validate_rejects_long_author() {
        let new = NewThought::new("hello world").posted_by("x".repeat(21));
        assert_eq!(
            new.validate(),
            Err(ValidationError::PostedByTooLong { len: 21 })
        );
    }

    // The wire shape uses camelCase keys.
    #[rstest]
    fn serializes_with_camel_case_keys() {
        let thought = NewThought::new("hello world")
            .theme("music")
            .into_thought("abc".to_string(), 1_700_000_000_000);
        let value = serde_json::to_value(&thought).unwrap();

        assert_eq!(value["id"], "abc");
        assert_eq!(value["createdAt"], 1_700_000_000_000_i64);
        assert_eq!(value["postedBy"], "Anonymous");
        assert_eq!(value["theme"], "music");
        assert_eq!(value["hearts"], 0);
    }
}
