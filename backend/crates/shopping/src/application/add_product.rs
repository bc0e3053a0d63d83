//! Add Product Use Case
//!
//! Puts a catalog item on a group's list as an open product without price.

use std::sync::Arc;

use crate::application::policy::require_membership;
use crate::domain::entity::product::NewProduct;
use crate::domain::repository::{
    CatalogRepository, GroupRepository, MemberRepository, ProductRepository,
};
use crate::domain::value_object::{GroupId, ProductId, ProductNameId, UserId, amount::Quantity};
use crate::error::{ShoppingError, ShoppingResult};

pub struct AddProductInput {
    pub group_id: GroupId,
    pub product_name_id: ProductNameId,
    pub quantity: i32,
}

pub struct AddProductUseCase<G, M, P, C>
where
    G: GroupRepository,
    M: MemberRepository,
    P: ProductRepository,
    C: CatalogRepository,
{
    group_repo: Arc<G>,
    member_repo: Arc<M>,
    product_repo: Arc<P>,
    catalog_repo: Arc<C>,
}

impl<G, M, P, C> AddProductUseCase<G, M, P, C>
where
    G: GroupRepository,
    M: MemberRepository,
    P: ProductRepository,
    C: CatalogRepository,
{
    pub fn new(
        group_repo: Arc<G>,
        member_repo: Arc<M>,
        product_repo: Arc<P>,
        catalog_repo: Arc<C>,
    ) -> Self {
        Self {
            group_repo,
            member_repo,
            product_repo,
            catalog_repo,
        }
    }

    pub async fn execute(&self, caller: UserId, input: AddProductInput) -> ShoppingResult<ProductId> {
        let quantity = Quantity::new(input.quantity)?;

        require_membership(&*self.group_repo, &*self.member_repo, input.group_id, caller).await?;

        let product_name = self
            .catalog_repo
            .find_product_name(input.product_name_id)
            .await?
            .ok_or(ShoppingError::ProductNotFound)?;

        let product_id = self
            .product_repo
            .create(&NewProduct {
                group_id: input.group_id,
                product_name_id: product_name.product_name_id,
                quantity,
                added_by: caller,
            })
            .await?;

        tracing::info!(
            group_id = %input.group_id,
            %product_id,
            product_name = %product_name.name,
            quantity = quantity.get(),
            added_by = %caller,
            "Product added"
        );

        Ok(product_id)
    }
}
