//! Path matching logic.
//!
//! # Responsibilities
//! - Match a request path exactly, or
//! - Match a fixed prefix followed by a single id token, capturing the id
//!
//! # Design Decisions
//! - Tagged enum instead of regex so matching stays O(path length)
//! - Id tokens are word characters and hyphens (`[A-Za-z0-9_-]+`),
//!   nonempty, with no further path segments
//! - Path matching is case-sensitive

/// A compiled path condition for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatcher {
    /// The whole path, verbatim.
    Exact(String),
    /// `<prefix><id>` where `<id>` is a nonempty word/hyphen token.
    /// The captured id is returned to the caller.
    IdSuffix { prefix: String },
}

impl PathMatcher {
    pub fn exact(path: impl Into<String>) -> Self {
        Self::Exact(path.into())
    }

    /// Prefix is expected to end with `/`, e.g. `/todo/`.
    pub fn id_suffix(prefix: impl Into<String>) -> Self {
        Self::IdSuffix {
            prefix: prefix.into(),
        }
    }

    /// Evaluate against a request path.
    ///
    /// Returns `None` on no match, `Some(None)` for an exact match, and
    /// `Some(Some(id))` when an id token was captured.
    pub fn match_path(&self, path: &str) -> Option<Option<String>> {
        match self {
            Self::Exact(expected) => (path == expected.as_str()).then_some(None),
            Self::IdSuffix { prefix } => {
                let rest = path.strip_prefix(prefix.as_str())?;
                if rest.is_empty() || !rest.chars().all(is_id_char) {
                    return None;
                }
                Some(Some(rest.to_string()))
            }
        }
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher() {
        let matcher = PathMatcher::exact("/demo");

        assert_eq!(matcher.match_path("/demo"), Some(None));
        assert_eq!(matcher.match_path("/demo/"), None);
        assert_eq!(matcher.match_path("/"), None);
        assert_eq!(matcher.match_path("/DEMO"), None); // Case sensitive
    }

    #[test]
    fn test_id_suffix_matcher() {
        let matcher = PathMatcher::id_suffix("/todo/");

        assert_eq!(
            matcher.match_path("/todo/abc-123"),
            Some(Some("abc-123".to_string()))
        );
        assert_eq!(matcher.match_path("/todo/1"), Some(Some("1".to_string())));
        assert_eq!(
            matcher.match_path("/todo/a_b"),
            Some(Some("a_b".to_string()))
        );
    }

    #[test]
    fn test_id_suffix_rejects_empty_and_nested_ids() {
        let matcher = PathMatcher::id_suffix("/todo/");

        assert_eq!(matcher.match_path("/todo/"), None); // Empty id
        assert_eq!(matcher.match_path("/todo"), None);
        assert_eq!(matcher.match_path("/todo/a/b"), None); // No extra segments
        assert_eq!(matcher.match_path("/todo/a b"), None);
        assert_eq!(matcher.match_path("/"), None);
    }
}
