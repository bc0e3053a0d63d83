//! Join Group Use Case
//!
//! Redeems an invite code for a `member` seat in the group that owns it.

use std::sync::Arc;

use crate::domain::entity::member::NewMember;
use crate::domain::repository::{GroupRepository, MemberRepository};
use crate::domain::value_object::{
    GroupId, UserId, group_code::GroupCode, member_role::MemberRole,
};
use crate::error::{ShoppingError, ShoppingResult};

pub struct JoinGroupUseCase<G, M>
where
    G: GroupRepository,
    M: MemberRepository,
{
    group_repo: Arc<G>,
    member_repo: Arc<M>,
}

impl<G, M> JoinGroupUseCase<G, M>
where
    G: GroupRepository,
    M: MemberRepository,
{
    pub fn new(group_repo: Arc<G>, member_repo: Arc<M>) -> Self {
        Self {
            group_repo,
            member_repo,
        }
    }

    pub async fn execute(&self, user_id: UserId, code: &str) -> ShoppingResult<GroupId> {
        let code = GroupCode::parse(code).ok_or(ShoppingError::InvalidCode)?;

        let group = self
            .group_repo
            .find_by_code(&code)
            .await?
            .ok_or(ShoppingError::InvalidCode)?;

        if self
            .member_repo
            .find_by_user_and_group(user_id, group.group_id)
            .await?
            .is_some()
        {
            return Err(ShoppingError::AlreadyMember);
        }

        // The unique (user_id, group_id) constraint backs up the check above
        let member_id = self
            .member_repo
            .create(&NewMember {
                user_id,
                group_id: group.group_id,
                role: MemberRole::Member,
            })
            .await?;

        tracing::info!(
            group_id = %group.group_id,
            %user_id,
            %member_id,
            "User joined group"
        );

        Ok(group.group_id)
    }
}
