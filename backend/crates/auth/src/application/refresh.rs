//! Refresh Use Case
//!
//! Trades a live refresh token for a new token pair. The old session is
//! consumed: its refresh token cannot be used twice.

use std::sync::Arc;

use chrono::Utc;
use platform::token::TokenManager;

use crate::application::config::AuthConfig;
use crate::application::session_issuer::{self, TokenPair};
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::refresh_token::RefreshToken;
use crate::error::{AuthError, AuthResult};

/// Refresh use case
pub struct RefreshUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    tokens: Arc<TokenManager>,
    config: Arc<AuthConfig>,
}

impl<S> RefreshUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, tokens: Arc<TokenManager>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        let token = RefreshToken::parse(refresh_token).ok_or(AuthError::SessionNotFound)?;

        let session = self
            .session_repo
            .find_by_refresh_token(&token)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        if session.is_expired_at(Utc::now()) {
            tracing::debug!(session_id = %session.session_id, "Refresh with expired session");
            return Err(AuthError::RefreshTokenExpired);
        }

        let replacement = session_issuer::new_session(&self.tokens, &self.config, session.user_id)?;
        let access_token =
            session_issuer::access_token(&self.tokens, &self.config, session.user_id)?;
        let rotated = self
            .session_repo
            .rotate(session.session_id, &replacement)
            .await?;

        tracing::info!(
            user_id = %session.user_id,
            old_session_id = %session.session_id,
            session_id = %rotated.session_id,
            "Session rotated"
        );

        Ok(TokenPair {
            access_token,
            refresh_token: rotated.refresh_token,
        })
    }
}
