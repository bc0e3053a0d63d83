//! Group Members Use Case

use std::sync::Arc;

use crate::application::policy::require_membership;
use crate::domain::entity::member::MemberProfile;
use crate::domain::repository::{GroupRepository, MemberRepository};
use crate::domain::value_object::{GroupId, UserId};
use crate::error::ShoppingResult;

/// Lists the roster of a group the caller belongs to
pub struct GroupMembersUseCase<G, M>
where
    G: GroupRepository,
    M: MemberRepository,
{
    group_repo: Arc<G>,
    member_repo: Arc<M>,
}

impl<G, M> GroupMembersUseCase<G, M>
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

    pub async fn execute(
        &self,
        caller: UserId,
        group_id: GroupId,
    ) -> ShoppingResult<Vec<MemberProfile>> {
        require_membership(&*self.group_repo, &*self.member_repo, group_id, caller).await?;

        self.member_repo.list_by_group(group_id).await
    }
}
