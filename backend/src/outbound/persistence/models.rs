//! Diesel row structs and their conversion into domain entities.
//!
//! Rows never leave the persistence layer; adapters convert them with the
//! `From` impls below before returning.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::domain::{
    Activity, Group, GroupMember, MemberRole, Place, Survey, SurveyResponse, Task, Trip,
    TripImage, UserId,
};

use super::schema::{
    activities, group_members, groups, itinerary_places, survey_responses, surveys, tasks,
    trip_images, trips,
};

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GroupRow {
    pub id: Uuid,
    pub name: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = groups)]
pub(crate) struct NewGroupRow<'a> {
    pub name: &'a str,
    pub created_by: Uuid,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_by: UserId::from_uuid(row.created_by),
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = group_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GroupMemberRow {
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = group_members)]
pub(crate) struct NewGroupMemberRow<'a> {
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub role: &'a str,
}

impl From<GroupMemberRow> for GroupMember {
    fn from(row: GroupMemberRow) -> Self {
        let role = MemberRole::parse(&row.role).unwrap_or_else(|| {
            warn!(
                value = row.role.as_str(),
                group_id = %row.group_id,
                "unrecognised member role, treating as member"
            );
            MemberRole::Member
        });
        Self {
            group_id: row.group_id,
            user_id: UserId::from_uuid(row.user_id),
            role,
            joined_at: row.joined_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Trips
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = trips)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TripRow {
    pub id: Uuid,
    pub group_id: Uuid,
    pub name: String,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = trips)]
pub(crate) struct NewTripRow<'a> {
    pub group_id: Uuid,
    pub name: &'a str,
    pub destination: Option<&'a str>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_by: Uuid,
}

/// `None` fields are left untouched by Diesel.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = trips)]
pub(crate) struct TripUpdate<'a> {
    pub name: Option<&'a str>,
    pub destination: Option<&'a str>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}

impl From<TripRow> for Trip {
    fn from(row: TripRow) -> Self {
        Self {
            id: row.id,
            group_id: row.group_id,
            name: row.name,
            destination: row.destination,
            start_date: row.start_date,
            end_date: row.end_date,
            created_by: UserId::from_uuid(row.created_by),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TaskRow {
    pub id: Uuid,
    pub group_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub title: String,
    pub status: String,
    pub assignee_id: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub(crate) struct NewTaskRow<'a> {
    pub group_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub title: &'a str,
    pub status: &'a str,
    pub assignee_id: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
    pub created_by: Uuid,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub(crate) struct TaskUpdate<'a> {
    pub title: Option<&'a str>,
    pub status: Option<&'a str>,
    pub assignee_id: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            group_id: row.group_id,
            trip_id: row.trip_id,
            title: row.title,
            status: row.status,
            assignee_id: row.assignee_id.map(UserId::from_uuid),
            due_date: row.due_date,
            created_by: UserId::from_uuid(row.created_by),
            created_at: row.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Itinerary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = itinerary_places)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlaceRow {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub name: String,
    pub day_index: i32,
    pub starts_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub position: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = itinerary_places)]
pub(crate) struct NewPlaceRow<'a> {
    pub trip_id: Uuid,
    pub name: &'a str,
    pub day_index: i32,
    pub starts_at: Option<DateTime<Utc>>,
    pub notes: Option<&'a str>,
    pub position: i32,
}

impl From<PlaceRow> for Place {
    fn from(row: PlaceRow) -> Self {
        Self {
            id: row.id,
            trip_id: row.trip_id,
            name: row.name,
            day_index: row.day_index,
            starts_at: row.starts_at,
            notes: row.notes,
            position: row.position,
        }
    }
}

// ---------------------------------------------------------------------------
// Activities and images
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ActivityRow {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub title: String,
    pub category: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activities)]
pub(crate) struct NewActivityRow<'a> {
    pub trip_id: Uuid,
    pub title: &'a str,
    pub category: &'a str,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_by: Uuid,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Self {
            id: row.id,
            trip_id: row.trip_id,
            title: row.title,
            category: row.category,
            scheduled_at: row.scheduled_at,
            created_by: UserId::from_uuid(row.created_by),
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = trip_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TripImageRow {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub storage_path: String,
    pub caption: Option<String>,
    pub uploaded_by: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = trip_images)]
pub(crate) struct NewTripImageRow<'a> {
    pub trip_id: Uuid,
    pub storage_path: &'a str,
    pub caption: Option<&'a str>,
    pub uploaded_by: Uuid,
}

impl From<TripImageRow> for TripImage {
    fn from(row: TripImageRow) -> Self {
        Self {
            id: row.id,
            trip_id: row.trip_id,
            storage_path: row.storage_path,
            caption: row.caption,
            uploaded_by: UserId::from_uuid(row.uploaded_by),
            created_at: row.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Surveys
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = surveys)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SurveyRow {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub title: String,
    pub questions: Value,
    pub closes_at: Option<DateTime<Utc>>,
}

impl From<SurveyRow> for Survey {
    fn from(row: SurveyRow) -> Self {
        Self {
            id: row.id,
            trip_id: row.trip_id,
            title: row.title,
            questions: row.questions,
            closes_at: row.closes_at,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = survey_responses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SurveyResponseRow {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub user_id: Uuid,
    pub answers: Value,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = survey_responses)]
pub(crate) struct NewSurveyResponseRow<'a> {
    pub survey_id: Uuid,
    pub user_id: Uuid,
    pub answers: &'a Value,
}

impl From<SurveyResponseRow> for SurveyResponse {
    fn from(row: SurveyResponseRow) -> Self {
        Self {
            id: row.id,
            survey_id: row.survey_id,
            user_id: UserId::from_uuid(row.user_id),
            answers: row.answers,
            submitted_at: row.submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn joined_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    #[case("owner", MemberRole::Owner)]
    #[case("member", MemberRole::Member)]
    #[case("organiser", MemberRole::Member)]
    fn member_roles_are_parsed(#[case] raw: &str, #[case] expected: MemberRole) {
        let row = GroupMemberRow {
            group_id: Uuid::nil(),
            user_id: Uuid::nil(),
            role: raw.to_owned(),
            joined_at: joined_at(),
        };
        assert_eq!(GroupMember::from(row).role, expected);
    }

    #[rstest]
    fn task_assignee_keeps_its_id() {
        let assignee = Uuid::new_v4();
        let row = TaskRow {
            id: Uuid::nil(),
            group_id: Uuid::nil(),
            trip_id: None,
            title: "Book the ferry".to_owned(),
            status: "todo".to_owned(),
            assignee_id: Some(assignee),
            due_date: None,
            created_by: Uuid::nil(),
            created_at: joined_at(),
        };
        let task = Task::from(row);
        assert_eq!(task.assignee_id.map(|id| *id.as_uuid()), Some(assignee));
    }
}
