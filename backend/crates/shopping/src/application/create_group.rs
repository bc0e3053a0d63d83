//! Create Group Use Case

use std::sync::Arc;

use crate::domain::entity::group::NewGroup;
use crate::domain::repository::GroupRepository;
use crate::domain::value_object::{
    GroupId, UserId,
    group_code::GroupCode,
    group_profile::{GroupDescription, GroupName},
};
use crate::error::ShoppingResult;

pub struct CreateGroupInput {
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
}

/// Creates a group and makes its creator the owner
pub struct CreateGroupUseCase<G>
where
    G: GroupRepository,
{
    group_repo: Arc<G>,
}

impl<G> CreateGroupUseCase<G>
where
    G: GroupRepository,
{
    pub fn new(group_repo: Arc<G>) -> Self {
        Self { group_repo }
    }

    pub async fn execute(&self, input: CreateGroupInput) -> ShoppingResult<GroupId> {
        let group = NewGroup {
            name: GroupName::new(&input.name)?,
            description: GroupDescription::new(&input.description)?,
            code: GroupCode::generate()?,
        };

        let group_id = self
            .group_repo
            .create_with_owner(&group, input.owner_id)
            .await?;

        tracing::info!(
            %group_id,
            owner_id = %input.owner_id,
            name = %group.name,
            "Group created"
        );

        Ok(group_id)
    }
}
