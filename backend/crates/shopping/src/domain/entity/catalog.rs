//! Catalog Entities
//!
//! Read-only reference data seeded by migrations.

use serde::Serialize;

use crate::domain::value_object::{CategoryId, ProductNameId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductName {
    pub product_name_id: ProductNameId,
    pub category_id: CategoryId,
    pub name: String,
}
