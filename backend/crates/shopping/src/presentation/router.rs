//! Shopping Router

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;

use auth::require_bearer_auth;
use platform::token::TokenManager;

use crate::infra::postgres::PgShoppingRepository;
use crate::presentation::handlers::{self, ShoppingAppState, ShoppingStore};

/// Create the shopping router with PostgreSQL repository.
///
/// Serves `/groups/...`, `/users/groups` and `/products/...`; every route
/// requires a bearer access token.
pub fn shopping_router(repo: PgShoppingRepository, tokens: Arc<TokenManager>) -> Router {
    shopping_router_generic(repo, tokens)
}

/// Create a generic shopping router for any repository implementation
pub fn shopping_router_generic<R>(repo: R, tokens: Arc<TokenManager>) -> Router
where
    R: ShoppingStore,
{
    let state = ShoppingAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        // Groups
        .route("/groups", post(handlers::create_group::<R>))
        .route("/groups/join", post(handlers::join_group::<R>))
        .route("/groups/{group_id}", delete(handlers::delete_group::<R>))
        .route("/groups/{group_id}/leave", delete(handlers::leave_group::<R>))
        .route("/groups/{group_id}/members", get(handlers::group_members::<R>))
        .route(
            "/groups/{group_id}/members/{member_id}",
            delete(handlers::kick_member::<R>),
        )
        // Group products
        .route(
            "/groups/{group_id}/products",
            post(handlers::add_product::<R>).get(handlers::group_products::<R>),
        )
        .route(
            "/groups/{group_id}/products/{product_id}",
            patch(handlers::update_product::<R>).delete(handlers::remove_product::<R>),
        )
        // Users
        .route("/users/groups", get(handlers::user_groups::<R>))
        // Catalog
        .route("/products/categories", get(handlers::categories::<R>))
        .route("/products/{category_id}", get(handlers::product_names::<R>))
        .route_layer(middleware::from_fn_with_state(tokens, require_bearer_auth))
        .with_state(state)
}
