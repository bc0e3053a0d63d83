//! Update Product Use Case

use std::sync::Arc;

use crate::application::policy::require_membership;
use crate::domain::repository::{GroupRepository, MemberRepository, ProductRepository};
use crate::domain::value_object::{
    GroupId, ProductId, UserId,
    amount::{Price, Quantity},
    product_status::ProductStatus,
};
use crate::error::{ShoppingError, ShoppingResult};

pub struct UpdateProductInput {
    pub group_id: GroupId,
    pub product_id: ProductId,
    pub price: Option<f64>,
    pub quantity: i32,
    pub status: ProductStatus,
}

/// Overwrites price, quantity and status of a product. Closing a product
/// records the caller as its buyer.
pub struct UpdateProductUseCase<G, M, P>
where
    G: GroupRepository,
    M: MemberRepository,
    P: ProductRepository,
{
    group_repo: Arc<G>,
    member_repo: Arc<M>,
    product_repo: Arc<P>,
}

impl<G, M, P> UpdateProductUseCase<G, M, P>
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

    pub async fn execute(&self, caller: UserId, input: UpdateProductInput) -> ShoppingResult<()> {
        let price = input.price.map(Price::new).transpose()?;
        let quantity = Quantity::new(input.quantity)?;

        require_membership(&*self.group_repo, &*self.member_repo, input.group_id, caller).await?;

        let mut product = self
            .product_repo
            .find_by_id_and_group(input.product_id, input.group_id)
            .await?
            .ok_or(ShoppingError::ProductNotFound)?;

        product.apply_update(caller, price, quantity, input.status);
        self.product_repo.update(&product).await?;

        tracing::info!(
            group_id = %input.group_id,
            product_id = %input.product_id,
            status = %product.status,
            updated_by = %caller,
            "Product updated"
        );

        Ok(())
    }
}
