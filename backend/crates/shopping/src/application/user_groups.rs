//! User Groups Use Case

use std::sync::Arc;

use crate::domain::entity::group::UserGroup;
use crate::domain::repository::GroupRepository;
use crate::domain::value_object::UserId;
use crate::error::ShoppingResult;

/// Every group the caller belongs to, with the caller's role in each
pub struct UserGroupsUseCase<G>
where
    G: GroupRepository,
{
    group_repo: Arc<G>,
}

impl<G> UserGroupsUseCase<G>
where
    G: GroupRepository,
{
    pub fn new(group_repo: Arc<G>) -> Self {
        Self { group_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> ShoppingResult<Vec<UserGroup>> {
        self.group_repo.list_for_user(user_id).await
    }
}
