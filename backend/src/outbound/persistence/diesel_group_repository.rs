//! PostgreSQL-backed `GroupRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{BackendError, GroupRepository};
use crate::domain::{Group, GroupMember, MemberRole, NewGroup, NewMember};

use super::error_mapping::{map_diesel_error, map_diesel_error_with, map_pool_error};
use super::models::{GroupMemberRow, GroupRow, NewGroupMemberRow, NewGroupRow};
use super::pool::DbPool;
use super::schema::{group_members, groups};

/// Diesel implementation of [`GroupRepository`].
#[derive(Clone)]
pub struct DieselGroupRepository {
    pool: DbPool,
}

impl DieselGroupRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for DieselGroupRepository {
    async fn find(&self, group_id: Uuid) -> Result<Option<Group>, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = groups::table
            .filter(groups::id.eq(group_id))
            .select(GroupRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Group::from))
    }

    /// Insert the group and enrol its creator as owner atomically.
    async fn insert(&self, group: &NewGroup) -> Result<Group, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let name = group.name.as_str();
        let creator = *group.created_by.as_uuid();

        let row = conn
            .transaction(|conn| {
                async move {
                    let row = diesel::insert_into(groups::table)
                        .values(&NewGroupRow {
                            name,
                            created_by: creator,
                        })
                        .returning(GroupRow::as_returning())
                        .get_result(conn)
                        .await?;

                    diesel::insert_into(group_members::table)
                        .values(&NewGroupMemberRow {
                            group_id: row.id,
                            user_id: creator,
                            role: MemberRole::Owner.as_str(),
                        })
                        .execute(conn)
                        .await?;

                    Ok::<_, diesel::result::Error>(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(Group::from(row))
    }

    async fn list_members(&self, group_id: Uuid) -> Result<Vec<GroupMember>, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // 'owner' sorts after 'member', so descending puts owners first.
        let rows: Vec<GroupMemberRow> = group_members::table
            .filter(group_members::group_id.eq(group_id))
            .order((group_members::role.desc(), group_members::joined_at.asc()))
            .select(GroupMemberRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(GroupMember::from).collect())
    }

    async fn add_member(&self, member: &NewMember) -> Result<GroupMember, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(group_members::table)
            .values(&NewGroupMemberRow {
                group_id: member.group_id,
                user_id: *member.user_id.as_uuid(),
                role: member.role.as_str(),
            })
            .returning(GroupMemberRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(GroupMember::from)
            .map_err(|error| map_diesel_error_with(error, "user is already a member"))
    }
}
