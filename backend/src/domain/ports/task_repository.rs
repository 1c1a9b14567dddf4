//! Port for group task persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewTask, Task, TaskChanges};

use super::BackendError;
use super::fixtures::{
    FIXTURE_GROUP_ID, FIXTURE_TASK_ID, fixture_date, fixture_timestamp, fixture_user,
};

/// Task storage and lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Tasks of a group ordered by due date, undated tasks last.
    async fn list_for_group(&self, group_id: Uuid) -> Result<Vec<Task>, BackendError>;

    /// Insert a task and return the stored row.
    async fn insert(&self, task: &NewTask) -> Result<Task, BackendError>;

    /// Apply `changes`, returning `None` when the task does not exist.
    async fn update(
        &self,
        task_id: Uuid,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, BackendError>;
}

/// Fixture implementation serving a single known task.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTaskRepository;

fn fixture_task() -> Task {
    Task {
        id: FIXTURE_TASK_ID,
        group_id: FIXTURE_GROUP_ID,
        trip_id: None,
        title: "Book the ferry".to_owned(),
        status: "todo".to_owned(),
        assignee_id: None,
        due_date: fixture_date(1),
        created_by: fixture_user(),
        created_at: fixture_timestamp(),
    }
}

#[async_trait]
impl TaskRepository for FixtureTaskRepository {
    async fn list_for_group(&self, group_id: Uuid) -> Result<Vec<Task>, BackendError> {
        if group_id == FIXTURE_GROUP_ID {
            Ok(vec![fixture_task()])
        } else {
            Ok(Vec::new())
        }
    }

    async fn insert(&self, task: &NewTask) -> Result<Task, BackendError> {
        Ok(Task {
            id: FIXTURE_TASK_ID,
            group_id: task.group_id,
            trip_id: task.trip_id,
            title: task.title.clone(),
            status: task.status.clone(),
            assignee_id: task.assignee_id.clone(),
            due_date: task.due_date,
            created_by: task.created_by.clone(),
            created_at: fixture_timestamp(),
        })
    }

    async fn update(
        &self,
        task_id: Uuid,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, BackendError> {
        if task_id != FIXTURE_TASK_ID {
            return Ok(None);
        }
        let mut task = fixture_task();
        if let Some(title) = &changes.title {
            task.title.clone_from(title);
        }
        if let Some(status) = &changes.status {
            task.status.clone_from(status);
        }
        if let Some(assignee) = &changes.assignee_id {
            task.assignee_id = Some(assignee.clone());
        }
        task.due_date = changes.due_date.or(task.due_date);
        Ok(Some(task))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FIXTURE_GROUP_ID, 1)]
    #[case(Uuid::nil(), 0)]
    #[tokio::test]
    async fn fixture_lists_only_its_group(#[case] group_id: Uuid, #[case] expected: usize) {
        let tasks = FixtureTaskRepository
            .list_for_group(group_id)
            .await
            .expect("fixture list");
        assert_eq!(tasks.len(), expected);
    }
}
