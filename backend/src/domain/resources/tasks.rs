//! Tasks resource.
//!
//! Statuses are checked against the startup [`Catalog`]; a task created
//! without one gets the catalog's default status.

use std::sync::Arc;

use crate::domain::outcome::{Outcome, err};
use crate::domain::ports::TaskRepository;
use crate::domain::validation::{
    FieldName, optional_date, optional_id, optional_text, require_id, require_label, require_text,
};
use crate::domain::{Catalog, NewTask, Task, TaskChanges, TaskDraft, UserId};

use super::{backend_failure, not_found};

const TASK_ID: FieldName = FieldName::new("taskId");
const GROUP_ID: FieldName = FieldName::new("groupId");
const TRIP_ID: FieldName = FieldName::new("tripId");
const TITLE: FieldName = FieldName::new("title");
const STATUS: FieldName = FieldName::new("status");
const ASSIGNEE_ID: FieldName = FieldName::new("assigneeId");
const DUE_DATE: FieldName = FieldName::new("dueDate");

/// Task operations over a [`TaskRepository`].
#[derive(Clone)]
pub struct TasksResource {
    repo: Arc<dyn TaskRepository>,
    catalog: Arc<Catalog>,
}

impl TasksResource {
    /// Wrap a task repository.
    pub fn new(repo: Arc<dyn TaskRepository>, catalog: Arc<Catalog>) -> Self {
        Self { repo, catalog }
    }

    /// Tasks of a group. `group_id` comes from a query string and may be absent.
    pub async fn list_for_group(&self, group_id: Option<&str>) -> Outcome<Vec<Task>> {
        let group_id = require_id(GROUP_ID, group_id)?;
        self.repo
            .list_for_group(group_id)
            .await
            .map_err(backend_failure("list tasks"))
    }

    /// Create a task in the draft's group.
    pub async fn create(&self, user: &UserId, draft: TaskDraft) -> Outcome<Task> {
        let group_id = require_id(GROUP_ID, draft.group_id.as_deref())?;
        let title = require_text(TITLE, draft.title.as_deref())?;
        let status = match optional_text(draft.status.as_deref()) {
            Some(raw) => self.status(&raw)?,
            None => self.default_status()?,
        };
        let task = NewTask {
            group_id,
            trip_id: optional_id(TRIP_ID, draft.trip_id.as_deref())?,
            title,
            status,
            assignee_id: optional_id(ASSIGNEE_ID, draft.assignee_id.as_deref())?
                .map(UserId::from_uuid),
            due_date: optional_date(DUE_DATE, draft.due_date.as_deref())?,
            created_by: user.clone(),
        };
        self.repo
            .insert(&task)
            .await
            .map_err(backend_failure("create task"))
    }

    /// Change a task's title, status, assignee or due date.
    pub async fn update(&self, task_id: &str, draft: TaskDraft) -> Outcome<Task> {
        let task_id = require_id(TASK_ID, Some(task_id))?;
        let title = match draft.title.as_deref() {
            Some(raw) => Some(require_text(TITLE, Some(raw))?),
            None => None,
        };
        let status = match optional_text(draft.status.as_deref()) {
            Some(raw) => Some(self.status(&raw)?),
            None => None,
        };
        let changes = TaskChanges {
            title,
            status,
            assignee_id: optional_id(ASSIGNEE_ID, draft.assignee_id.as_deref())?
                .map(UserId::from_uuid),
            due_date: optional_date(DUE_DATE, draft.due_date.as_deref())?,
        };
        if changes.is_empty() {
            return err("no changes supplied");
        }
        self.repo
            .update(task_id, &changes)
            .await
            .map_err(backend_failure("update task"))?
            .ok_or_else(|| not_found("task"))
    }

    fn status(&self, raw: &str) -> Outcome<String> {
        require_label(STATUS, Some(raw), &self.catalog.task_statuses)
    }

    fn default_status(&self) -> Outcome<String> {
        match self.catalog.default_task_status() {
            Some(status) => Ok(status.to_owned()),
            None => err("no task statuses are configured"),
        }
    }
}
