use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a member inside one group. Every group has exactly one
/// `Owner`, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Owner,
    Member,
}

impl MemberRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            MemberRole::Owner => "owner",
            MemberRole::Member => "member",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "owner" => Some(MemberRole::Owner),
            "member" => Some(MemberRole::Member),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_owner(&self) -> bool {
        matches!(self, MemberRole::Owner)
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes() {
        for role in [MemberRole::Owner, MemberRole::Member] {
            assert_eq!(MemberRole::from_code(role.code()), Some(role));
        }
        assert_eq!(MemberRole::from_code("Owner"), None);
        assert_eq!(MemberRole::from_code("admin"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&MemberRole::Owner).unwrap(), "\"owner\"");
        assert!(MemberRole::Owner.is_owner());
        assert!(!MemberRole::Member.is_owner());
    }
}
