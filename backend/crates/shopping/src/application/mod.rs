//! Application Layer
//!
//! Use cases of the shopping context. Each one resolves the caller's
//! membership through [`policy`] before touching a group.

pub mod add_product;
pub mod catalog;
pub mod create_group;
pub mod delete_group;
pub mod group_members;
pub mod group_products;
pub mod join_group;
pub mod kick_member;
pub mod leave_group;
pub mod policy;
pub mod remove_product;
pub mod update_product;
pub mod user_groups;

// Re-exports
pub use add_product::{AddProductInput, AddProductUseCase};
pub use catalog::CatalogUseCase;
pub use create_group::{CreateGroupInput, CreateGroupUseCase};
pub use delete_group::DeleteGroupUseCase;
pub use group_members::GroupMembersUseCase;
pub use group_products::GroupProductsUseCase;
pub use join_group::JoinGroupUseCase;
pub use kick_member::KickMemberUseCase;
pub use leave_group::LeaveGroupUseCase;
pub use policy::Membership;
pub use remove_product::RemoveProductUseCase;
pub use update_product::{UpdateProductInput, UpdateProductUseCase};
pub use user_groups::UserGroupsUseCase;
