//! PostgreSQL-backed `TaskRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{BackendError, TaskRepository};
use crate::domain::{NewTask, Task, TaskChanges};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTaskRow, TaskRow, TaskUpdate};
use super::pool::DbPool;
use super::schema::tasks;

/// Diesel implementation of [`TaskRepository`].
#[derive(Clone)]
pub struct DieselTaskRepository {
    pool: DbPool,
}

impl DieselTaskRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for DieselTaskRepository {
    async fn list_for_group(&self, group_id: Uuid) -> Result<Vec<Task>, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TaskRow> = tasks::table
            .filter(tasks::group_id.eq(group_id))
            .order((tasks::due_date.asc().nulls_last(), tasks::created_at.asc()))
            .select(TaskRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn insert(&self, task: &NewTask) -> Result<Task, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewTaskRow {
            group_id: task.group_id,
            trip_id: task.trip_id,
            title: task.title.as_str(),
            status: task.status.as_str(),
            assignee_id: task.assignee_id.as_ref().map(|id| *id.as_uuid()),
            due_date: task.due_date,
            created_by: *task.created_by.as_uuid(),
        };

        diesel::insert_into(tasks::table)
            .values(&row)
            .returning(TaskRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Task::from)
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        task_id: Uuid,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let update = TaskUpdate {
            title: changes.title.as_deref(),
            status: changes.status.as_deref(),
            assignee_id: changes.assignee_id.as_ref().map(|id| *id.as_uuid()),
            due_date: changes.due_date,
        };

        let row = diesel::update(tasks::table.filter(tasks::id.eq(task_id)))
            .set(&update)
            .returning(TaskRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Task::from))
    }
}
