//! Value Object Module

pub mod amount;
pub mod group_code;
pub mod group_profile;
pub mod ids;
pub mod member_role;
pub mod product_status;

pub use auth::domain::value_object::gender::Gender;
pub use ids::{CategoryId, GroupId, MemberId, ProductId, ProductNameId};
pub use kernel::id::UserId;
