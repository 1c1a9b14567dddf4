//! Port for groups and their membership.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Group, GroupMember, MemberRole, NewGroup, NewMember};

use super::BackendError;
use super::fixtures::{FIXTURE_GROUP_ID, fixture_timestamp, fixture_user};

/// Group storage and membership management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Find a group by id.
    async fn find(&self, group_id: Uuid) -> Result<Option<Group>, BackendError>;

    /// Insert a group and enrol its creator as owner in the same transaction.
    async fn insert(&self, group: &NewGroup) -> Result<Group, BackendError>;

    /// Members of a group, owners first.
    async fn list_members(&self, group_id: Uuid) -> Result<Vec<GroupMember>, BackendError>;

    /// Add a membership; an existing membership is a [`BackendError::Constraint`].
    async fn add_member(&self, member: &NewMember) -> Result<GroupMember, BackendError>;
}

/// Fixture implementation serving a single known group owned by the fixture user.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureGroupRepository;

fn fixture_group() -> Group {
    Group {
        id: FIXTURE_GROUP_ID,
        name: "Uni friends".to_owned(),
        created_by: fixture_user(),
        created_at: fixture_timestamp(),
    }
}

#[async_trait]
impl GroupRepository for FixtureGroupRepository {
    async fn find(&self, group_id: Uuid) -> Result<Option<Group>, BackendError> {
        Ok((group_id == FIXTURE_GROUP_ID).then(fixture_group))
    }

    async fn insert(&self, group: &NewGroup) -> Result<Group, BackendError> {
        Ok(Group {
            id: FIXTURE_GROUP_ID,
            name: group.name.clone(),
            created_by: group.created_by.clone(),
            created_at: fixture_timestamp(),
        })
    }

    async fn list_members(&self, group_id: Uuid) -> Result<Vec<GroupMember>, BackendError> {
        Ok(vec![GroupMember {
            group_id,
            user_id: fixture_user(),
            role: MemberRole::Owner,
            joined_at: fixture_timestamp(),
        }])
    }

    async fn add_member(&self, member: &NewMember) -> Result<GroupMember, BackendError> {
        if member.user_id == fixture_user() {
            return Err(BackendError::constraint("user is already a member"));
        }
        Ok(GroupMember {
            group_id: member.group_id,
            user_id: member.user_id.clone(),
            role: member.role,
            joined_at: fixture_timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::UserId;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_rejects_duplicate_membership() {
        let member = NewMember {
            group_id: FIXTURE_GROUP_ID,
            user_id: fixture_user(),
            role: MemberRole::Member,
        };
        let err = FixtureGroupRepository
            .add_member(&member)
            .await
            .expect_err("owner is already enrolled");
        assert!(matches!(err, BackendError::Constraint { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_adds_new_members() {
        let member = NewMember {
            group_id: FIXTURE_GROUP_ID,
            user_id: UserId::random(),
            role: MemberRole::Member,
        };
        let added = FixtureGroupRepository
            .add_member(&member)
            .await
            .expect("new member");
        assert_eq!(added.role, MemberRole::Member);
    }
}
