//! Product Catalog Use Case
//!
//! Read-only queries over categories and product names.

use std::sync::Arc;

use crate::domain::entity::catalog::{Category, ProductName};
use crate::domain::repository::CatalogRepository;
use crate::domain::value_object::{CategoryId, ProductNameId};
use crate::error::{ShoppingError, ShoppingResult};

pub struct CatalogUseCase<C>
where
    C: CatalogRepository,
{
    catalog_repo: Arc<C>,
}

impl<C> CatalogUseCase<C>
where
    C: CatalogRepository,
{
    pub fn new(catalog_repo: Arc<C>) -> Self {
        Self { catalog_repo }
    }

    pub async fn categories(&self) -> ShoppingResult<Vec<Category>> {
        self.catalog_repo.list_categories().await
    }

    /// An unknown category yields an empty list.
    pub async fn product_names(&self, category_id: CategoryId) -> ShoppingResult<Vec<ProductName>> {
        self.catalog_repo.list_product_names(category_id).await
    }

    pub async fn product_name(&self, product_name_id: ProductNameId) -> ShoppingResult<ProductName> {
        self.catalog_repo
            .find_product_name(product_name_id)
            .await?
            .ok_or(ShoppingError::ProductNotFound)
    }
}
