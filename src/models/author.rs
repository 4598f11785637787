use super::thought::MAX_POSTED_BY_LEN;

/// A raw message split at its author tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged<'a> {
    pub body: &'a str,
    pub author: Option<String>,
}

/// Split a raw message into its body and optional author tag.
///
/// The first `~` starts the tag, which runs to the end of the message. The
/// body is everything before that tilde. The author is the tag text after the
/// tilde, cut to its first 20 characters with casing preserved. A message
/// without a tilde, or with nothing after it, has no author.
///
/// ```
/// use happy_thoughts::models::split_author_tag;
///
/// let tagged = split_author_tag("hi there ~Bob");
/// assert_eq!(tagged.body, "hi there ");
/// assert_eq!(tagged.author.as_deref(), Some("Bob"));
/// ```
pub fn split_author_tag(raw: &str) -> Tagged<'_> {
    let Some(at) = raw.find('~') else {
        return Tagged {
            body: raw,
            author: None,
        };
    };

    let tag = &raw[at + '~'.len_utf8()..];
    let author: String = tag.chars().take(MAX_POSTED_BY_LEN).collect();

    Tagged {
        body: &raw[..at],
        author: (!author.is_empty()).then_some(author),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_tilde("hello world", "hello world", None)]
    #[case::simple("hi there ~Bob", "hi there ", Some("Bob"))]
    #[case::keeps_case("good morning ~ALICE", "good morning ", Some("ALICE"))]
    #[case::truncated(
        "long author ~abcdefghijklmnopqrstuvwxyz",
        "long author ",
        Some("abcdefghijklmnopqrst")
    )]
    // Only the first tilde splits; later tildes belong to the author.
    #[case::multiple_tildes("a~b~c", "a", Some("b~c"))]
    #[case::empty_tag("hello world~", "hello world", None)]
    #[case::leading_tilde("~Bob", "", Some("Bob"))]
    #[case::tag_with_newline("first line ~Bob\nsecond", "first line ", Some("Bob\nsecond"))]
    fn splits_at_first_tilde(
        #[case] raw: &str,
        #[case] body: &str,
        #[case] author: Option<&str>,
    ) {
        let tagged = split_author_tag(raw);
        assert_eq!(tagged.body, body);
        assert_eq!(tagged.author.as_deref(), author);
    }

    // Truncation counts characters, never splitting a multibyte one.
    #[rstest]
    fn truncates_by_characters() {
        let raw = format!("hello ~{}", "ö".repeat(30));
        let tagged = split_author_tag(&raw);
        assert_eq!(tagged.author.unwrap().chars().count(), MAX_POSTED_BY_LEN);
    }
}
