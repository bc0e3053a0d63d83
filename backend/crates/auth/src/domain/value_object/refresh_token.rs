//! Refresh Token Value Object
//!
//! An opaque 128-bit identifier. It carries no claims and is only ever used
//! as the lookup key of a session row.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct RefreshToken(Uuid);

impl RefreshToken {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a token presented by a client. Anything that is not a UUID
    /// cannot name a session.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let uuid = Uuid::new_v4();
        let token = RefreshToken::parse(&uuid.to_string()).unwrap();
        assert_eq!(token.as_uuid(), &uuid);
        assert_eq!(token.to_string(), uuid.to_string());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(RefreshToken::parse("").is_none());
        assert!(RefreshToken::parse("not-a-token").is_none());
    }
}
