//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use sqlx::PgPool;

use crate::domain::entity::{
    catalog::{Category, ProductName},
    group::{Group, NewGroup, UserGroup},
    member::{Member, MemberProfile, NewMember},
    product::{GroupProduct, NewProduct, Product},
};
use crate::domain::repository::{
    CatalogRepository, GroupRepository, MemberRepository, ProductRepository,
};
use crate::domain::value_object::{
    CategoryId, Gender, GroupId, MemberId, ProductId, ProductNameId, UserId,
    amount::{Price, Quantity},
    group_code::GroupCode,
    group_profile::{GroupDescription, GroupName},
    member_role::MemberRole,
    product_status::ProductStatus,
};
use crate::error::{ShoppingError, ShoppingResult};

/// PostgreSQL-backed shopping repository
#[derive(Clone)]
pub struct PgShoppingRepository {
    pool: PgPool,
}

impl PgShoppingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Group Repository Implementation
// ============================================================================

impl GroupRepository for PgShoppingRepository {
    async fn create_with_owner(&self, group: &NewGroup, owner: UserId) -> ShoppingResult<GroupId> {
        let mut tx = self.pool.begin().await?;

        let group_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO groups (name, description, code)
            VALUES ($1, $2, $3)
            RETURNING group_id
            "#,
        )
        .bind(group.name.as_str())
        .bind(group.description.as_str())
        .bind(group.code.as_str())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO members (user_id, group_id, role)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(owner.get())
        .bind(group_id)
        .bind(MemberRole::Owner.code())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(GroupId::from_raw(group_id))
    }

    async fn find_by_id(&self, group_id: GroupId) -> ShoppingResult<Option<Group>> {
        let row = sqlx::query_as::<_, GroupRow>(
            r#"
            SELECT group_id, name, description, code, created_at
            FROM groups
            WHERE group_id = $1
            "#,
        )
        .bind(group_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GroupRow::into_group))
    }

    async fn find_by_code(&self, code: &GroupCode) -> ShoppingResult<Option<Group>> {
        let row = sqlx::query_as::<_, GroupRow>(
            r#"
            SELECT group_id, name, description, code, created_at
            FROM groups
            WHERE code = $1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GroupRow::into_group))
    }

    async fn delete(&self, group_id: GroupId) -> ShoppingResult<()> {
        sqlx::query("DELETE FROM groups WHERE group_id = $1")
            .bind(group_id.get())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: UserId) -> ShoppingResult<Vec<UserGroup>> {
        let rows = sqlx::query_as::<_, UserGroupRow>(
            r#"
            SELECT g.group_id, g.name, g.description, g.code, m.role, m.joined_at
            FROM members m
            JOIN groups g ON g.group_id = m.group_id
            WHERE m.user_id = $1
            ORDER BY m.joined_at, g.group_id
            "#,
        )
        .bind(user_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserGroupRow::into_user_group).collect()
    }
}

// ============================================================================
// Member Repository Implementation
// ============================================================================

impl MemberRepository for PgShoppingRepository {
    async fn create(&self, member: &NewMember) -> ShoppingResult<MemberId> {
        let member_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO members (user_id, group_id, role)
            VALUES ($1, $2, $3)
            RETURNING member_id
            "#,
        )
        .bind(member.user_id.get())
        .bind(member.group_id.get())
        .bind(member.role.code())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ShoppingError::AlreadyMember
            } else {
                ShoppingError::Database(e)
            }
        })?;

        Ok(MemberId::from_raw(member_id))
    }

    async fn find_by_user_and_group(
        &self,
        user_id: UserId,
        group_id: GroupId,
    ) -> ShoppingResult<Option<Member>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT member_id, user_id, group_id, role, joined_at
            FROM members
            WHERE user_id = $1 AND group_id = $2
            "#,
        )
        .bind(user_id.get())
        .bind(group_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(MemberRow::into_member).transpose()
    }

    async fn find_by_id_and_group(
        &self,
        member_id: MemberId,
        group_id: GroupId,
    ) -> ShoppingResult<Option<Member>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT member_id, user_id, group_id, role, joined_at
            FROM members
            WHERE member_id = $1 AND group_id = $2
            "#,
        )
        .bind(member_id.get())
        .bind(group_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(MemberRow::into_member).transpose()
    }

    async fn delete(&self, member_id: MemberId) -> ShoppingResult<()> {
        sqlx::query("DELETE FROM members WHERE member_id = $1")
            .bind(member_id.get())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_by_group(&self, group_id: GroupId) -> ShoppingResult<Vec<MemberProfile>> {
        let rows = sqlx::query_as::<_, MemberProfileRow>(
            r#"
            SELECT m.member_id, m.user_id, u.username, u.gender, m.role
            FROM members m
            JOIN users u ON u.user_id = m.user_id
            WHERE m.group_id = $1
            ORDER BY m.joined_at, m.member_id
            "#,
        )
        .bind(group_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(MemberProfileRow::into_profile)
            .collect()
    }
}

// ============================================================================
// Product Repository Implementation
// ============================================================================

impl ProductRepository for PgShoppingRepository {
    async fn create(&self, product: &NewProduct) -> ShoppingResult<ProductId> {
        let product_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (group_id, product_name_id, quantity, status, added_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING product_id
            "#,
        )
        .bind(product.group_id.get())
        .bind(product.product_name_id.get())
        .bind(product.quantity.get())
        .bind(ProductStatus::Open.code())
        .bind(product.added_by.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(ProductId::from_raw(product_id))
    }

    async fn find_by_id_and_group(
        &self,
        product_id: ProductId,
        group_id: GroupId,
    ) -> ShoppingResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT product_id, group_id, product_name_id, price, quantity, status,
                   added_by, bought_by, created_at
            FROM products
            WHERE product_id = $1 AND group_id = $2
            "#,
        )
        .bind(product_id.get())
        .bind(group_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProductRow::into_product).transpose()
    }

    async fn update(&self, product: &Product) -> ShoppingResult<()> {
        sqlx::query(
            r#"
            UPDATE products
            SET price = $2, quantity = $3, status = $4, bought_by = $5
            WHERE product_id = $1
            "#,
        )
        .bind(product.product_id.get())
        .bind(product.price.map(|p| p.get()))
        .bind(product.quantity.get())
        .bind(product.status.code())
        .bind(product.bought_by.map(|u| u.get()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, product_id: ProductId) -> ShoppingResult<()> {
        sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id.get())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_by_group(&self, group_id: GroupId) -> ShoppingResult<Vec<GroupProduct>> {
        let rows = sqlx::query_as::<_, GroupProductRow>(
            r#"
            SELECT p.product_id,
                   pn.name AS product_name,
                   c.name AS category_name,
                   p.price,
                   p.quantity,
                   p.status,
                   adder.username AS added_by,
                   buyer.username AS bought_by,
                   p.created_at
            FROM products p
            JOIN product_names pn ON pn.product_name_id = p.product_name_id
            JOIN categories c ON c.category_id = pn.category_id
            JOIN users adder ON adder.user_id = p.added_by
            LEFT JOIN users buyer ON buyer.user_id = p.bought_by
            WHERE p.group_id = $1
            ORDER BY p.created_at, p.product_id
            "#,
        )
        .bind(group_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(GroupProductRow::into_group_product)
            .collect()
    }
}

// ============================================================================
// Catalog Repository Implementation
// ============================================================================

impl CatalogRepository for PgShoppingRepository {
    async fn list_categories(&self) -> ShoppingResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT category_id, name FROM categories ORDER BY category_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    async fn list_product_names(
        &self,
        category_id: CategoryId,
    ) -> ShoppingResult<Vec<ProductName>> {
        let rows = sqlx::query_as::<_, ProductNameRow>(
            r#"
            SELECT product_name_id, category_id, name
            FROM product_names
            WHERE category_id = $1
            ORDER BY product_name_id
            "#,
        )
        .bind(category_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(ProductNameRow::into_product_name)
            .collect())
    }

    async fn find_product_name(
        &self,
        product_name_id: ProductNameId,
    ) -> ShoppingResult<Option<ProductName>> {
        let row = sqlx::query_as::<_, ProductNameRow>(
            r#"
            SELECT product_name_id, category_id, name
            FROM product_names
            WHERE product_name_id = $1
            "#,
        )
        .bind(product_name_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductNameRow::into_product_name))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

fn parse_role(code: &str) -> ShoppingResult<MemberRole> {
    MemberRole::from_code(code)
        .ok_or_else(|| ShoppingError::Internal(format!("Invalid member role: {code}")))
}

fn parse_status(code: &str) -> ShoppingResult<ProductStatus> {
    ProductStatus::from_code(code)
        .ok_or_else(|| ShoppingError::Internal(format!("Invalid product status: {code}")))
}

#[derive(sqlx::FromRow)]
struct GroupRow {
    group_id: i64,
    name: String,
    description: String,
    code: String,
    created_at: DateTime<Utc>,
}

impl GroupRow {
    fn into_group(self) -> Group {
        Group {
            group_id: GroupId::from_raw(self.group_id),
            name: GroupName::from_db(self.name),
            description: GroupDescription::from_db(self.description),
            code: GroupCode::from_db(self.code),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserGroupRow {
    group_id: i64,
    name: String,
    description: String,
    code: String,
    role: String,
    joined_at: DateTime<Utc>,
}

impl UserGroupRow {
    fn into_user_group(self) -> ShoppingResult<UserGroup> {
        Ok(UserGroup {
            group_id: GroupId::from_raw(self.group_id),
            name: GroupName::from_db(self.name),
            description: GroupDescription::from_db(self.description),
            code: GroupCode::from_db(self.code),
            role: parse_role(&self.role)?,
            joined_at: self.joined_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    member_id: i64,
    user_id: i64,
    group_id: i64,
    role: String,
    joined_at: DateTime<Utc>,
}

impl MemberRow {
    fn into_member(self) -> ShoppingResult<Member> {
        Ok(Member {
            member_id: MemberId::from_raw(self.member_id),
            user_id: UserId::from_raw(self.user_id),
            group_id: GroupId::from_raw(self.group_id),
            role: parse_role(&self.role)?,
            joined_at: self.joined_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct MemberProfileRow {
    member_id: i64,
    user_id: i64,
    username: String,
    gender: String,
    role: String,
}

impl MemberProfileRow {
    fn into_profile(self) -> ShoppingResult<MemberProfile> {
        let gender = Gender::from_code(&self.gender)
            .ok_or_else(|| ShoppingError::Internal(format!("Invalid gender: {}", self.gender)))?;

        Ok(MemberProfile {
            member_id: MemberId::from_raw(self.member_id),
            user_id: UserId::from_raw(self.user_id),
            username: self.username,
            gender,
            role: parse_role(&self.role)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: i64,
    group_id: i64,
    product_name_id: i64,
    price: Option<f64>,
    quantity: i32,
    status: String,
    added_by: i64,
    bought_by: Option<i64>,
    created_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> ShoppingResult<Product> {
        Ok(Product {
            product_id: ProductId::from_raw(self.product_id),
            group_id: GroupId::from_raw(self.group_id),
            product_name_id: ProductNameId::from_raw(self.product_name_id),
            price: self.price.map(Price::from_db),
            quantity: Quantity::from_db(self.quantity),
            status: parse_status(&self.status)?,
            added_by: UserId::from_raw(self.added_by),
            bought_by: self.bought_by.map(UserId::from_raw),
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct GroupProductRow {
    product_id: i64,
    product_name: String,
    category_name: String,
    price: Option<f64>,
    quantity: i32,
    status: String,
    added_by: String,
    bought_by: Option<String>,
    created_at: DateTime<Utc>,
}

impl GroupProductRow {
    fn into_group_product(self) -> ShoppingResult<GroupProduct> {
        Ok(GroupProduct {
            product_id: ProductId::from_raw(self.product_id),
            product_name: self.product_name,
            category: self.category_name,
            price: self.price.map(Price::from_db),
            quantity: Quantity::from_db(self.quantity),
            status: parse_status(&self.status)?,
            added_by: self.added_by,
            bought_by: self.bought_by,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    category_id: i64,
    name: String,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            category_id: CategoryId::from_raw(self.category_id),
            name: self.name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProductNameRow {
    product_name_id: i64,
    category_id: i64,
    name: String,
}

impl ProductNameRow {
    fn into_product_name(self) -> ProductName {
        ProductName {
            product_name_id: ProductNameId::from_raw(self.product_name_id),
            category_id: CategoryId::from_raw(self.category_id),
            name: self.name,
        }
    }
}
