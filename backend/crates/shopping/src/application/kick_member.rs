//! Kick Member Use Case

use std::sync::Arc;

use crate::application::policy::require_membership;
use crate::domain::repository::{GroupRepository, MemberRepository};
use crate::domain::value_object::{GroupId, MemberId, UserId};
use crate::error::{ShoppingError, ShoppingResult};

/// Removes another member from a group. Owner only.
pub struct KickMemberUseCase<G, M>
where
    G: GroupRepository,
    M: MemberRepository,
{
    group_repo: Arc<G>,
    member_repo: Arc<M>,
}

impl<G, M> KickMemberUseCase<G, M>
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

    /// Checks run in this order: group, caller membership, ownership,
    /// target, self-kick. Non-owners learn nothing about the target.
    pub async fn execute(
        &self,
        caller: UserId,
        group_id: GroupId,
        target: MemberId,
    ) -> ShoppingResult<()> {
        let membership =
            require_membership(&*self.group_repo, &*self.member_repo, group_id, caller).await?;
        membership.require_owner()?;

        let target = self
            .member_repo
            .find_by_id_and_group(target, group_id)
            .await?
            .ok_or(ShoppingError::MemberNotFound)?;

        if target.user_id == caller {
            return Err(ShoppingError::CannotKickYourself);
        }

        self.member_repo.delete(target.member_id).await?;

        tracing::info!(
            %group_id,
            owner_id = %caller,
            kicked_user_id = %target.user_id,
            "Member kicked"
        );

        Ok(())
    }
}
