//! Group Access Policy
//!
//! Every operation on an existing group resolves the group first and the
//! caller's membership second, so an unknown group is reported as
//! `GroupNotFound` even to outsiders.

use crate::domain::entity::{group::Group, member::Member};
use crate::domain::repository::{GroupRepository, MemberRepository};
use crate::domain::value_object::{GroupId, UserId};
use crate::error::{ShoppingError, ShoppingResult};

/// The caller's standing in a group
#[derive(Debug, Clone)]
pub struct Membership {
    pub group: Group,
    pub member: Member,
}

impl Membership {
    pub fn require_owner(&self) -> ShoppingResult<()> {
        if self.member.is_owner() {
            Ok(())
        } else {
            Err(ShoppingError::NotOwner)
        }
    }
}

/// Resolve `group_id` and the caller's member row in it.
pub async fn require_membership<G, M>(
    groups: &G,
    members: &M,
    group_id: GroupId,
    user_id: UserId,
) -> ShoppingResult<Membership>
where
    G: GroupRepository,
    M: MemberRepository,
{
    let group = groups
        .find_by_id(group_id)
        .await?
        .ok_or(ShoppingError::GroupNotFound)?;

    let member = members
        .find_by_user_and_group(user_id, group_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(%user_id, %group_id, "Caller is not a member");
            ShoppingError::MemberNotFound
        })?;

    Ok(Membership { group, member })
}
