//! Group Name and Description Value Objects
//!
//! Both are free text shown to every member. Input is NFKC-normalized and
//! trimmed before the length limits are checked.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

pub const GROUP_NAME_MIN_LENGTH: usize = 3;

pub const GROUP_NAME_MAX_LENGTH: usize = 100;

pub const GROUP_DESCRIPTION_MAX_LENGTH: usize = 255;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupProfileError {
    #[error("Group name must be {min}-{max} characters (got {length})")]
    NameLength { length: usize, min: usize, max: usize },

    #[error("Group name must not contain control characters")]
    NameControlCharacter,

    #[error("Group description must be at most {max} characters (got {length})")]
    DescriptionTooLong { length: usize, max: usize },
}

fn normalize(raw: &str) -> String {
    raw.trim().nfkc().collect()
}

// ============================================================================
// Group Name
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupName(String);

impl GroupName {
    pub fn new(raw: &str) -> Result<Self, GroupProfileError> {
        let normalized = normalize(raw);

        let length = normalized.chars().count();
        if !(GROUP_NAME_MIN_LENGTH..=GROUP_NAME_MAX_LENGTH).contains(&length) {
            return Err(GroupProfileError::NameLength {
                length,
                min: GROUP_NAME_MIN_LENGTH,
                max: GROUP_NAME_MAX_LENGTH,
            });
        }
        if normalized.chars().any(char::is_control) {
            return Err(GroupProfileError::NameControlCharacter);
        }

        Ok(Self(normalized))
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Group Description
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupDescription(String);

impl GroupDescription {
    /// Empty descriptions are allowed.
    pub fn new(raw: &str) -> Result<Self, GroupProfileError> {
        let normalized = normalize(raw);

        let length = normalized.chars().count();
        if length > GROUP_DESCRIPTION_MAX_LENGTH {
            return Err(GroupProfileError::DescriptionTooLong {
                length,
                max: GROUP_DESCRIPTION_MAX_LENGTH,
            });
        }

        Ok(Self(normalized))
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
    fn test_group_name_bounds() {
        assert_eq!(GroupName::new("  Groceries ").unwrap().as_str(), "Groceries");
        assert!(GroupName::new("ab").is_err());
        assert!(GroupName::new(&"x".repeat(GROUP_NAME_MAX_LENGTH)).is_ok());
        assert!(matches!(
            GroupName::new(&"x".repeat(GROUP_NAME_MAX_LENGTH + 1)),
            Err(GroupProfileError::NameLength { length: 101, .. })
        ));
    }

    #[test]
    fn test_group_name_counts_chars_not_bytes() {
        // 3 chars, 9 bytes
        assert!(GroupName::new("買い物").is_ok());
    }

    #[test]
    fn test_group_name_rejects_control_characters() {
        assert_eq!(
            GroupName::new("Home\u{0007}list"),
            Err(GroupProfileError::NameControlCharacter)
        );
    }

    #[test]
    fn test_description_limit() {
        assert_eq!(GroupDescription::new("").unwrap().as_str(), "");
        assert!(GroupDescription::new(&"d".repeat(GROUP_DESCRIPTION_MAX_LENGTH)).is_ok());
        assert!(GroupDescription::new(&"d".repeat(GROUP_DESCRIPTION_MAX_LENGTH + 1)).is_err());
    }
}
