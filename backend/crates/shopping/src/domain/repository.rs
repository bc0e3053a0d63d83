//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Lookups return `Ok(None)` when nothing matches; the use cases turn that
//! into the matching NotFound error.

use crate::domain::entity::{
    catalog::{Category, ProductName},
    group::{Group, NewGroup, UserGroup},
    member::{Member, MemberProfile, NewMember},
    product::{GroupProduct, NewProduct, Product},
};
use crate::domain::value_object::{
    CategoryId, GroupId, MemberId, ProductId, ProductNameId, UserId, group_code::GroupCode,
};
use crate::error::ShoppingResult;

/// Group repository trait
#[trait_variant::make(GroupRepository: Send)]
pub trait LocalGroupRepository {
    /// Insert the group and its owner's member row in one transaction.
    async fn create_with_owner(&self, group: &NewGroup, owner: UserId) -> ShoppingResult<GroupId>;

    async fn find_by_id(&self, group_id: GroupId) -> ShoppingResult<Option<Group>>;

    async fn find_by_code(&self, code: &GroupCode) -> ShoppingResult<Option<Group>>;

    /// Members and products go with the group.
    async fn delete(&self, group_id: GroupId) -> ShoppingResult<()>;

    async fn list_for_user(&self, user_id: UserId) -> ShoppingResult<Vec<UserGroup>>;
}

/// Member repository trait
#[trait_variant::make(MemberRepository: Send)]
pub trait LocalMemberRepository {
    /// A second row for the same user and group fails with
    /// `ShoppingError::AlreadyMember`.
    async fn create(&self, member: &NewMember) -> ShoppingResult<MemberId>;

    async fn find_by_user_and_group(
        &self,
        user_id: UserId,
        group_id: GroupId,
    ) -> ShoppingResult<Option<Member>>;

    async fn find_by_id_and_group(
        &self,
        member_id: MemberId,
        group_id: GroupId,
    ) -> ShoppingResult<Option<Member>>;

    async fn delete(&self, member_id: MemberId) -> ShoppingResult<()>;

    async fn list_by_group(&self, group_id: GroupId) -> ShoppingResult<Vec<MemberProfile>>;
}

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    async fn create(&self, product: &NewProduct) -> ShoppingResult<ProductId>;

    async fn find_by_id_and_group(
        &self,
        product_id: ProductId,
        group_id: GroupId,
    ) -> ShoppingResult<Option<Product>>;

    /// Overwrite price, quantity, status and buyer.
    async fn update(&self, product: &Product) -> ShoppingResult<()>;

    async fn delete(&self, product_id: ProductId) -> ShoppingResult<()>;

    async fn list_by_group(&self, group_id: GroupId) -> ShoppingResult<Vec<GroupProduct>>;
}

/// Read access to the product catalog
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    async fn list_categories(&self) -> ShoppingResult<Vec<Category>>;

    async fn list_product_names(&self, category_id: CategoryId)
    -> ShoppingResult<Vec<ProductName>>;

    async fn find_product_name(
        &self,
        product_name_id: ProductNameId,
    ) -> ShoppingResult<Option<ProductName>>;
}
