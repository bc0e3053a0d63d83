//! Remove Product Use Case

use std::sync::Arc;

use crate::application::policy::require_membership;
use crate::domain::repository::{GroupRepository, MemberRepository, ProductRepository};
use crate::domain::value_object::{GroupId, ProductId, UserId};
use crate::error::{ShoppingError, ShoppingResult};

/// Any member may remove any product of the group.
pub struct RemoveProductUseCase<G, M, P>
where
    G: GroupRepository,
    M: MemberRepository,
    P: ProductRepository,
{
    group_repo: Arc<G>,
    member_repo: Arc<M>,
    product_repo: Arc<P>,
}

impl<G, M, P> RemoveProductUseCase<G, M, P>
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
        product_id: ProductId,
    ) -> ShoppingResult<()> {
        require_membership(&*self.group_repo, &*self.member_repo, group_id, caller).await?;

        // Scoped lookup: a product of another group is simply not found
        let product = self
            .product_repo
            .find_by_id_and_group(product_id, group_id)
            .await?
            .ok_or(ShoppingError::ProductNotFound)?;

        self.product_repo.delete(product.product_id).await?;

        tracing::info!(%group_id, %product_id, removed_by = %caller, "Product removed");

        Ok(())
    }
}
