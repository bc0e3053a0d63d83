//! Leave Group Use Case

use std::sync::Arc;

use crate::application::policy::require_membership;
use crate::domain::repository::{GroupRepository, MemberRepository};
use crate::domain::value_object::{GroupId, UserId};
use crate::error::{ShoppingError, ShoppingResult};

pub struct LeaveGroupUseCase<G, M>
where
    G: GroupRepository,
    M: MemberRepository,
{
    group_repo: Arc<G>,
    member_repo: Arc<M>,
}

impl<G, M> LeaveGroupUseCase<G, M>
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

    /// The owner can only get rid of a group by deleting it; there is no
    /// ownership transfer.
    pub async fn execute(&self, caller: UserId, group_id: GroupId) -> ShoppingResult<()> {
        let membership =
            require_membership(&*self.group_repo, &*self.member_repo, group_id, caller).await?;

        if membership.member.is_owner() {
            return Err(ShoppingError::OwnerCannotLeave);
        }

        self.member_repo.delete(membership.member.member_id).await?;

        tracing::info!(%group_id, user_id = %caller, "User left group");

        Ok(())
    }
}
