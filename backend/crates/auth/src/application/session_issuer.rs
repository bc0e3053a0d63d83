//! Session issuance shared by sign-up, log-in and refresh.

use chrono::Utc;
use platform::token::TokenManager;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::NewSession;
use crate::domain::value_object::{UserId, refresh_token::RefreshToken};
use crate::error::{AuthError, AuthResult};

/// What a client receives after authenticating.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: RefreshToken,
}

/// Mint a refresh token and describe the session row that will hold it.
pub(crate) fn new_session(
    tokens: &TokenManager,
    config: &AuthConfig,
    user_id: UserId,
) -> AuthResult<NewSession> {
    let refresh_token = RefreshToken::from_uuid(tokens.issue_refresh_token()?);
    Ok(NewSession::new(
        user_id,
        refresh_token,
        config.refresh_token_ttl,
        Utc::now(),
    ))
}

pub(crate) fn access_token(
    tokens: &TokenManager,
    config: &AuthConfig,
    user_id: UserId,
) -> AuthResult<String> {
    // ids come from BIGSERIAL, so they are positive
    let subject = u64::try_from(user_id.get())
        .map_err(|_| AuthError::Internal(format!("User id {user_id} is negative")))?;
    Ok(tokens.issue_access_token(subject, config.access_token_ttl)?)
}
