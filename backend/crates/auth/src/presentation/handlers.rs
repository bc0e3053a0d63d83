//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use platform::token::TokenManager;

use crate::application::config::AuthConfig;
use crate::application::{
    LogInInput, LogInUseCase, RefreshUseCase, SignUpInput, SignUpUseCase, WhoUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    CurrentUserResponse, LogInRequest, RefreshRequest, SignUpRequest, TokenResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenManager>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<(StatusCode, Json<TokenResponse>)>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let pair = use_case
        .execute(SignUpInput {
            user_name: req.username,
            password: req.password,
            gender: req.gender,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(pair.into())))
}

// ============================================================================
// Log In
// ============================================================================

/// POST /api/auth/login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LogInRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let pair = use_case
        .execute(LogInInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(pair.into()))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/auth/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RefreshRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RefreshUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let pair = use_case.execute(&req.refresh_token).await?;

    Ok(Json(pair.into()))
}

// ============================================================================
// Who
// ============================================================================

/// GET /api/auth/who
pub async fn who<R>(
    State(state): State<AuthAppState<R>>,
    current: CurrentUser,
) -> AuthResult<Json<CurrentUserResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let user = WhoUseCase::new(state.repo.clone())
        .execute(current.user_id)
        .await?;

    Ok(Json(user.into()))
}
