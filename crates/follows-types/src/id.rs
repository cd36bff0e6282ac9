use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// Stable identifier of a user.
///
/// A `UserId` is assigned when a user is seeded and never changes. Ids show
/// up as URL path segments, so [`UserId::parse`] rejects values that could
/// not round-trip through a path. Values read from a snapshot are trusted
/// as-is and go through [`UserId::new`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a string without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse and validate an id supplied by a client.
    pub fn parse(id: &str) -> TypeResult<Self> {
        if id.is_empty() {
            return Err(TypeError::EmptyUserId);
        }
        if id.contains('/') {
            return Err(TypeError::InvalidUserId {
                id: id.to_string(),
                reason: "contains '/'".into(),
            });
        }
        if id.chars().any(char::is_whitespace) {
            return Err(TypeError::InvalidUserId {
                id: id.to_string(),
                reason: "contains whitespace".into(),
            });
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `IndexMap<UserId, _>` be queried with a plain `&str`.
impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for UserId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for UserId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_ids() {
        let id = UserId::parse("carl").unwrap();
        assert_eq!(id.as_str(), "carl");
        assert_eq!(id, "carl");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(UserId::parse(""), Err(TypeError::EmptyUserId));
    }

    #[test]
    fn parse_rejects_slash_and_whitespace() {
        assert!(matches!(
            UserId::parse("a/b"),
            Err(TypeError::InvalidUserId { .. })
        ));
        assert!(matches!(
            UserId::parse("a b"),
            Err(TypeError::InvalidUserId { .. })
        ));
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&UserId::new("jimmy")).unwrap();
        assert_eq!(json, "\"jimmy\"");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "jimmy");
    }

    #[test]
    fn display_and_debug() {
        let id = UserId::new("hugh");
        assert_eq!(format!("{id}"), "hugh");
        assert_eq!(format!("{id:?}"), "UserId(hugh)");
    }
}
