//! Groups resource.

use std::sync::Arc;

use crate::domain::outcome::{Outcome, err};
use crate::domain::ports::GroupRepository;
use crate::domain::validation::{FieldName, optional_text, require_id, require_label, require_text};
use crate::domain::{
    Group, GroupDraft, GroupMember, MemberDraft, MemberRole, NewGroup, NewMember, UserId,
};

use super::{backend_failure, not_found};

const GROUP_ID: FieldName = FieldName::new("groupId");
const USER_ID: FieldName = FieldName::new("userId");
const NAME: FieldName = FieldName::new("name");
const ROLE: FieldName = FieldName::new("role");

/// Group operations over a [`GroupRepository`].
#[derive(Clone)]
pub struct GroupsResource {
    repo: Arc<dyn GroupRepository>,
}

impl GroupsResource {
    /// Wrap a group repository.
    pub fn new(repo: Arc<dyn GroupRepository>) -> Self {
        Self { repo }
    }

    /// A single group.
    pub async fn get(&self, group_id: &str) -> Outcome<Group> {
        let group_id = require_id(GROUP_ID, Some(group_id))?;
        self.find(group_id).await
    }

    /// Create a group; `user` becomes its owner.
    pub async fn create(&self, user: &UserId, draft: GroupDraft) -> Outcome<Group> {
        let name = require_text(NAME, draft.name.as_deref())?;
        let group = NewGroup {
            name,
            created_by: user.clone(),
        };
        self.repo
            .insert(&group)
            .await
            .map_err(backend_failure("create group"))
    }

    /// Members of an existing group.
    pub async fn list_members(&self, group_id: &str) -> Outcome<Vec<GroupMember>> {
        let group_id = require_id(GROUP_ID, Some(group_id))?;
        self.find(group_id).await?;
        self.repo
            .list_members(group_id)
            .await
            .map_err(backend_failure("list group members"))
    }

    /// Enrol a user in an existing group. The role defaults to `member`.
    pub async fn add_member(&self, group_id: &str, draft: MemberDraft) -> Outcome<GroupMember> {
        let group_id = require_id(GROUP_ID, Some(group_id))?;
        let user_id = UserId::from_uuid(require_id(USER_ID, draft.user_id.as_deref())?);
        let role = match optional_text(draft.role.as_deref()) {
            Some(raw) => parse_role(&raw)?,
            None => MemberRole::Member,
        };
        self.find(group_id).await?;

        let member = NewMember {
            group_id,
            user_id,
            role,
        };
        self.repo
            .add_member(&member)
            .await
            .map_err(backend_failure("add group member"))
    }

    async fn find(&self, group_id: uuid::Uuid) -> Outcome<Group> {
        self.repo
            .find(group_id)
            .await
            .map_err(backend_failure("load group"))?
            .ok_or_else(|| not_found("group"))
    }
}

fn parse_role(raw: &str) -> Outcome<MemberRole> {
    let allowed = [MemberRole::Owner, MemberRole::Member].map(|role| role.as_str().to_owned());
    let label = require_label(ROLE, Some(raw), &allowed)?;
    match MemberRole::parse(&label) {
        Some(role) => Ok(role),
        None => err(format!("unknown role {label}")),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{
        BackendError, FIXTURE_GROUP_ID, FixtureGroupRepository, MockGroupRepository,
    };
    use rstest::rstest;
    use uuid::Uuid;

    fn fixture_resource() -> GroupsResource {
        GroupsResource::new(Arc::new(FixtureGroupRepository))
    }

    #[rstest]
    #[tokio::test]
    async fn create_requires_a_name() {
        let mut repo = MockGroupRepository::new();
        repo.expect_insert().never();

        let error = GroupsResource::new(Arc::new(repo))
            .create(&UserId::random(), GroupDraft { name: None })
            .await
            .expect_err("missing name");
        assert_eq!(error.message(), "name is required");
    }

    #[rstest]
    #[tokio::test]
    async fn members_of_unknown_group_are_not_found() {
        let mut repo = MockGroupRepository::new();
        repo.expect_find().times(1).returning(|_| Ok(None));
        repo.expect_list_members().never();

        let error = GroupsResource::new(Arc::new(repo))
            .list_members(&Uuid::new_v4().to_string())
            .await
            .expect_err("unknown group");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn add_member_defaults_role() {
        let draft = MemberDraft {
            user_id: Some(Uuid::new_v4().to_string()),
            role: None,
        };
        let member = fixture_resource()
            .add_member(&FIXTURE_GROUP_ID.to_string(), draft)
            .await
            .expect("member added");
        assert_eq!(member.role, MemberRole::Member);
    }

    #[rstest]
    #[tokio::test]
    async fn add_member_rejects_unknown_roles() {
        let mut repo = MockGroupRepository::new();
        repo.expect_find().never();
        repo.expect_add_member().never();
        let draft = MemberDraft {
            user_id: Some(Uuid::new_v4().to_string()),
            role: Some("admin".to_owned()),
        };

        let error = GroupsResource::new(Arc::new(repo))
            .add_member(&FIXTURE_GROUP_ID.to_string(), draft)
            .await
            .expect_err("unknown role");
        assert_eq!(error.message(), "role must be one of: owner, member");
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_membership_names_the_operation() {
        let mut repo = MockGroupRepository::new();
        repo.expect_find().returning(|id| {
            Ok(Some(Group {
                id,
                name: "Uni friends".to_owned(),
                created_by: UserId::random(),
                created_at: chrono::Utc::now(),
            }))
        });
        repo.expect_add_member()
            .times(1)
            .returning(|_| Err(BackendError::constraint("user is already a member")));
        let draft = MemberDraft {
            user_id: Some(Uuid::new_v4().to_string()),
            role: Some("member".to_owned()),
        };

        let error = GroupsResource::new(Arc::new(repo))
            .add_member(&FIXTURE_GROUP_ID.to_string(), draft)
            .await
            .expect_err("duplicate");
        assert_eq!(
            error.message(),
            "add group member failed: user is already a member"
        );
    }
}
