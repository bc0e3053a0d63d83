//! Log In Use Case
//!
//! Checks a user name and password and opens a new session.

use std::sync::Arc;

use platform::token::TokenManager;

use crate::application::config::AuthConfig;
use crate::application::session_issuer::{self, TokenPair};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    pub user_name: String,
    pub password: String,
}

/// Log in use case
pub struct LogInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    tokens: Arc<TokenManager>,
    config: Arc<AuthConfig>,
}

impl<U, S> LogInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        session_repo: Arc<S>,
        tokens: Arc<TokenManager>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: LogInInput) -> AuthResult<TokenPair> {
        // A name that fails validation cannot belong to anyone
        let user_name = UserName::new(&input.user_name).map_err(|_| AuthError::UserNotFound)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Likewise a password outside the policy can never match a stored hash
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::CredentialsInvalid)?;
        if !user.password_hash.verify(raw_password).await {
            return Err(AuthError::CredentialsInvalid);
        }

        let new_session = session_issuer::new_session(&self.tokens, &self.config, user.user_id)?;
        let access_token = session_issuer::access_token(&self.tokens, &self.config, user.user_id)?;
        let session = self.session_repo.create(&new_session).await?;

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(TokenPair {
            access_token,
            refresh_token: session.refresh_token,
        })
    }
}
