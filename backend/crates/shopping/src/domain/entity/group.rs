//! Group Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    GroupId,
    group_code::GroupCode,
    group_profile::{GroupDescription, GroupName},
    member_role::MemberRole,
};

/// A shared shopping list
#[derive(Debug, Clone)]
pub struct Group {
    pub group_id: GroupId,
    pub name: GroupName,
    pub description: GroupDescription,
    /// Invite code, unique across groups
    pub code: GroupCode,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGroup {
    pub name: GroupName,
    pub description: GroupDescription,
    pub code: GroupCode,
}

/// A group as seen by one of its members.
#[derive(Debug, Clone)]
pub struct UserGroup {
    pub group_id: GroupId,
    pub name: GroupName,
    pub description: GroupDescription,
    pub code: GroupCode,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}
