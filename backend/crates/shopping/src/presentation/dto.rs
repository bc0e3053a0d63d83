//! Request and response bodies for the shopping endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{
    group::UserGroup, member::MemberProfile, product::GroupProduct,
};
use crate::domain::value_object::{
    Gender, GroupId, MemberId, ProductId, ProductNameId, UserId, member_role::MemberRole,
    product_status::ProductStatus,
};

// ============================================================================
// Groups
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct JoinGroupRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct GroupIdResponse {
    pub group_id: GroupId,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn success() -> Self {
        Self { message: "success" }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member_id: MemberId,
    pub user_id: UserId,
    pub username: String,
    pub gender: Gender,
    pub role: MemberRole,
}

impl From<MemberProfile> for MemberResponse {
    fn from(profile: MemberProfile) -> Self {
        Self {
            member_id: profile.member_id,
            user_id: profile.user_id,
            username: profile.username,
            gender: profile.gender,
            role: profile.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserGroupResponse {
    pub group_id: GroupId,
    pub name: String,
    pub description: String,
    pub code: String,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

impl From<UserGroup> for UserGroupResponse {
    fn from(group: UserGroup) -> Self {
        Self {
            group_id: group.group_id,
            name: group.name.to_string(),
            description: group.description.as_str().to_string(),
            code: group.code.to_string(),
            role: group.role,
            joined_at: group.joined_at,
        }
    }
}

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    pub product_name_id: ProductNameId,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub price: Option<f64>,
    pub quantity: i32,
    pub status: ProductStatus,
}

#[derive(Debug, Serialize)]
pub struct ProductIdResponse {
    pub product_id: ProductId,
}

#[derive(Debug, Serialize)]
pub struct GroupProductResponse {
    pub product_id: ProductId,
    pub product_name: String,
    pub category: String,
    pub price: Option<f64>,
    pub quantity: i32,
    pub status: ProductStatus,
    pub added_by: String,
    pub bought_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<GroupProduct> for GroupProductResponse {
    fn from(product: GroupProduct) -> Self {
        Self {
            product_id: product.product_id,
            product_name: product.product_name,
            category: product.category,
            price: product.price.map(|p| p.get()),
            quantity: product.quantity.get(),
            status: product.status,
            added_by: product.added_by,
            bought_by: product.bought_by,
            created_at: product.created_at,
        }
    }
}
