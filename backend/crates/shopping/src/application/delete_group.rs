//! Delete Group Use Case

use std::sync::Arc;

use crate::application::policy::require_membership;
use crate::domain::repository::{GroupRepository, MemberRepository};
use crate::domain::value_object::{GroupId, UserId};
use crate::error::ShoppingResult;

/// Deletes a group on behalf of its owner. Members and products are
/// removed with it.
pub struct DeleteGroupUseCase<G, M>
where
    G: GroupRepository,
    M: MemberRepository,
{
    group_repo: Arc<G>,
    member_repo: Arc<M>,
}

impl<G, M> DeleteGroupUseCase<G, M>
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

    pub async fn execute(&self, caller: UserId, group_id: GroupId) -> ShoppingResult<()> {
        let membership =
            require_membership(&*self.group_repo, &*self.member_repo, group_id, caller).await?;
        membership.require_owner()?;

        self.group_repo.delete(group_id).await?;

        tracing::info!(%group_id, owner_id = %caller, "Group deleted");

        Ok(())
    }
}
