//! Group Code Value Object
//!
//! Short invite code shared out of band. Whoever knows it can join the
//! group, so it is drawn from a secure random source.

use derive_more::Display;
use platform::crypto::RandomSourceError;
use platform::invite_code::{self, DEFAULT_CODE_LENGTH};
use serde::{Deserialize, Serialize};

/// Width of the `groups.code` column. Longer input can never match.
pub const MAX_CODE_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupCode(String);

impl GroupCode {
    /// Fresh code for a new group. Uniqueness is enforced by the store.
    pub fn generate() -> Result<Self, RandomSourceError> {
        invite_code::generate(DEFAULT_CODE_LENGTH).map(Self)
    }

    /// Parse a code typed by a user. `None` for anything that could never
    /// have been generated.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (trimmed.len() <= MAX_CODE_LENGTH && invite_code::is_well_formed(trimmed))
            .then(|| Self(trimmed.to_string()))
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_shape() {
        let code = GroupCode::generate().unwrap();
        assert_eq!(code.as_str().len(), 5);
        assert_eq!(GroupCode::parse(code.as_str()), Some(code));
    }

    #[test]
    fn test_parse() {
        assert_eq!(GroupCode::parse(" aB3xZ ").unwrap().as_str(), "aB3xZ");
        assert_eq!(GroupCode::parse(""), None);
        assert_eq!(GroupCode::parse("ab-cd"), None);
    }

    #[test]
    fn test_parse_bounds_length_by_column_width() {
        let longest = "a".repeat(MAX_CODE_LENGTH);
        assert!(GroupCode::parse(&longest).is_some());
        assert_eq!(GroupCode::parse(&"a".repeat(MAX_CODE_LENGTH + 1)), None);
    }
}
