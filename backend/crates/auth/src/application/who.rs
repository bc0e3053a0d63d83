//! Who Use Case
//!
//! Returns the profile behind an already-verified user id.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

pub struct WhoUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> WhoUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Fails with `UserNotFound` if the account vanished after the token
    /// was issued.
    pub async fn execute(&self, user_id: UserId) -> AuthResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
