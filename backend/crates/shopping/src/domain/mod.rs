//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    catalog::{Category, ProductName},
    group::{Group, NewGroup, UserGroup},
    member::{Member, MemberProfile, NewMember},
    product::{GroupProduct, NewProduct, Product},
};
pub use repository::{CatalogRepository, GroupRepository, MemberRepository, ProductRepository};
