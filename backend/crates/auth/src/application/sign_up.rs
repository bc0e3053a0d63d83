//! Sign Up Use Case
//!
//! Creates a new user account and opens its first session.

use std::sync::Arc;

use platform::token::TokenManager;

use crate::application::config::AuthConfig;
use crate::application::session_issuer::{self, TokenPair};
use crate::domain::entity::user::NewUser;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    gender::Gender,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
    pub gender: Gender,
}

/// Sign up use case
pub struct SignUpUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    tokens: Arc<TokenManager>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignUpUseCase<U, S>
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

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<TokenPair> {
        let user_name = UserName::new(&input.user_name)?;
        let raw_password = RawPassword::new(input.password)?;

        // The repository also maps a unique violation to UserAlreadyExists,
        // which covers two sign-ups racing past this check.
        if self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = UserPassword::from_raw(raw_password).await?;

        let user = self
            .user_repo
            .create(&NewUser {
                user_name,
                password_hash,
                gender: input.gender,
            })
            .await?;

        let new_session = session_issuer::new_session(&self.tokens, &self.config, user.user_id)?;
        let access_token = session_issuer::access_token(&self.tokens, &self.config, user.user_id)?;
        let session = self.session_repo.create(&new_session).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(TokenPair {
            access_token,
            refresh_token: session.refresh_token,
        })
    }
}
