//! HTTP Handlers
//!
//! Every handler sits behind the bearer gate and receives the caller as
//! [`CurrentUser`].

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::CurrentUser;

use crate::application::{
    AddProductInput, AddProductUseCase, CatalogUseCase, CreateGroupInput, CreateGroupUseCase,
    DeleteGroupUseCase, GroupMembersUseCase, GroupProductsUseCase, JoinGroupUseCase,
    KickMemberUseCase, LeaveGroupUseCase, RemoveProductUseCase, UpdateProductInput,
    UpdateProductUseCase, UserGroupsUseCase,
};
use crate::domain::entity::catalog::{Category, ProductName};
use crate::domain::repository::{
    CatalogRepository, GroupRepository, MemberRepository, ProductRepository,
};
use crate::domain::value_object::{CategoryId, GroupId, MemberId, ProductId};
use crate::error::ShoppingResult;
use crate::presentation::dto::{
    AddProductRequest, CreateGroupRequest, GroupIdResponse, GroupProductResponse,
    JoinGroupRequest, MemberResponse, MessageResponse, ProductIdResponse, UpdateProductRequest,
    UserGroupResponse,
};

/// Everything the shopping handlers need from storage
pub trait ShoppingStore:
    GroupRepository
    + MemberRepository
    + ProductRepository
    + CatalogRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> ShoppingStore for T where
    T: GroupRepository
        + MemberRepository
        + ProductRepository
        + CatalogRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}

/// Shared state for shopping handlers
#[derive(Clone)]
pub struct ShoppingAppState<R>
where
    R: ShoppingStore,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Groups
// ============================================================================

/// POST /api/groups
pub async fn create_group<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    current: CurrentUser,
    Json(req): Json<CreateGroupRequest>,
) -> ShoppingResult<(StatusCode, Json<GroupIdResponse>)> {
    let group_id = CreateGroupUseCase::new(state.repo.clone())
        .execute(CreateGroupInput {
            owner_id: current.user_id,
            name: req.name,
            description: req.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(GroupIdResponse { group_id })))
}

/// DELETE /api/groups/{group_id}
pub async fn delete_group<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    current: CurrentUser,
    Path(group_id): Path<GroupId>,
) -> ShoppingResult<Json<MessageResponse>> {
    DeleteGroupUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(current.user_id, group_id)
        .await?;

    Ok(Json(MessageResponse::success()))
}

/// POST /api/groups/join
pub async fn join_group<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    current: CurrentUser,
    Json(req): Json<JoinGroupRequest>,
) -> ShoppingResult<Json<GroupIdResponse>> {
    let group_id = JoinGroupUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(current.user_id, &req.code)
        .await?;

    Ok(Json(GroupIdResponse { group_id }))
}

/// DELETE /api/groups/{group_id}/leave
pub async fn leave_group<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    current: CurrentUser,
    Path(group_id): Path<GroupId>,
) -> ShoppingResult<Json<MessageResponse>> {
    LeaveGroupUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(current.user_id, group_id)
        .await?;

    Ok(Json(MessageResponse::success()))
}

/// GET /api/groups/{group_id}/members
pub async fn group_members<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    current: CurrentUser,
    Path(group_id): Path<GroupId>,
) -> ShoppingResult<Json<Vec<MemberResponse>>> {
    let members = GroupMembersUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(current.user_id, group_id)
        .await?;

    Ok(Json(members.into_iter().map(Into::into).collect()))
}

/// DELETE /api/groups/{group_id}/members/{member_id}
pub async fn kick_member<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    current: CurrentUser,
    Path((group_id, member_id)): Path<(GroupId, MemberId)>,
) -> ShoppingResult<Json<MessageResponse>> {
    KickMemberUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(current.user_id, group_id, member_id)
        .await?;

    Ok(Json(MessageResponse::success()))
}

/// GET /api/users/groups
pub async fn user_groups<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    current: CurrentUser,
) -> ShoppingResult<Json<Vec<UserGroupResponse>>> {
    let groups = UserGroupsUseCase::new(state.repo.clone())
        .execute(current.user_id)
        .await?;

    Ok(Json(groups.into_iter().map(Into::into).collect()))
}

// ============================================================================
// Group Products
// ============================================================================

/// POST /api/groups/{group_id}/products
pub async fn add_product<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    current: CurrentUser,
    Path(group_id): Path<GroupId>,
    Json(req): Json<AddProductRequest>,
) -> ShoppingResult<(StatusCode, Json<ProductIdResponse>)> {
    let use_case = AddProductUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
    );

    let product_id = use_case
        .execute(
            current.user_id,
            AddProductInput {
                group_id,
                product_name_id: req.product_name_id,
                quantity: req.quantity,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ProductIdResponse { product_id })))
}

/// GET /api/groups/{group_id}/products
pub async fn group_products<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    current: CurrentUser,
    Path(group_id): Path<GroupId>,
) -> ShoppingResult<Json<Vec<GroupProductResponse>>> {
    let products =
        GroupProductsUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone())
            .execute(current.user_id, group_id)
            .await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// PATCH /api/groups/{group_id}/products/{product_id}
pub async fn update_product<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    current: CurrentUser,
    Path((group_id, product_id)): Path<(GroupId, ProductId)>,
    Json(req): Json<UpdateProductRequest>,
) -> ShoppingResult<Json<MessageResponse>> {
    UpdateProductUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone())
        .execute(
            current.user_id,
            UpdateProductInput {
                group_id,
                product_id,
                price: req.price,
                quantity: req.quantity,
                status: req.status,
            },
        )
        .await?;

    Ok(Json(MessageResponse::success()))
}

/// DELETE /api/groups/{group_id}/products/{product_id}
pub async fn remove_product<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    current: CurrentUser,
    Path((group_id, product_id)): Path<(GroupId, ProductId)>,
) -> ShoppingResult<Json<MessageResponse>> {
    RemoveProductUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone())
        .execute(current.user_id, group_id, product_id)
        .await?;

    Ok(Json(MessageResponse::success()))
}

// ============================================================================
// Catalog
// ============================================================================

/// GET /api/products/categories
pub async fn categories<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
) -> ShoppingResult<Json<Vec<Category>>> {
    let categories = CatalogUseCase::new(state.repo.clone()).categories().await?;

    Ok(Json(categories))
}

/// GET /api/products/{category_id}
pub async fn product_names<R: ShoppingStore>(
    State(state): State<ShoppingAppState<R>>,
    Path(category_id): Path<CategoryId>,
) -> ShoppingResult<Json<Vec<ProductName>>> {
    let names = CatalogUseCase::new(state.repo.clone())
        .product_names(category_id)
        .await?;

    Ok(Json(names))
}
