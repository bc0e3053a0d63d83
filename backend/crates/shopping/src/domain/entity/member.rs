//! Member Entity
//!
//! Binds a user to a group. `(user_id, group_id)` is unique.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    Gender, GroupId, MemberId, UserId, member_role::MemberRole,
};

#[derive(Debug, Clone)]
pub struct Member {
    pub member_id: MemberId,
    pub user_id: UserId,
    pub group_id: GroupId,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

impl Member {
    pub fn is_owner(&self) -> bool {
        self.role.is_owner()
    }
}

#[derive(Debug, Clone)]
pub struct NewMember {
    pub user_id: UserId,
    pub group_id: GroupId,
    pub role: MemberRole,
}

/// Roster entry: the member joined with its user's public profile.
#[derive(Debug, Clone)]
pub struct MemberProfile {
    pub member_id: MemberId,
    pub user_id: UserId,
    pub username: String,
    pub gender: Gender,
    pub role: MemberRole,
}
