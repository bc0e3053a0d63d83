//! Group Products Use Case

use std::sync::Arc;

use crate::application::policy::require_membership;
use crate::domain::entity::product::GroupProduct;
use crate::domain::repository::{GroupRepository, MemberRepository, ProductRepository};
use crate::domain::value_object::{GroupId, UserId};
use crate::error::ShoppingResult;

/// The group's list, oldest product first
pub struct GroupProductsUseCase<G, M, P>
where
    G: GroupRepository,
    M: MemberRepository,
    P: ProductRepository,
{
    group_repo: Arc<G>,
    member_repo: Arc<M>,
    product_repo: Arc<P>,
}

impl<G, M, P> GroupProductsUseCase<G, M, P>
where
    G: GroupRepository,
    M: MemberRepository,
    P: ProductRepository,
{
    pub fn new(group_repo: Arc<G>, member_repo: Arc<M>, product_repo: Arc<P>) -> Self {
        Self {
            group_repo,
            member_repo,
            product_repo,
        }
    }

    pub async fn execute(
        &self,
        caller: UserId,
        group_id: GroupId,
    ) -> ShoppingResult<Vec<GroupProduct>> {
        require_membership(&*self.group_repo, &*self.member_repo, group_id, caller).await?;

        self.product_repo.list_by_group(group_id).await
    }
}
