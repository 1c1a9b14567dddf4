//! PostgreSQL-backed `ActivityRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ActivityRepository, BackendError};
use crate::domain::{Activity, NewActivity};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ActivityRow, NewActivityRow};
use super::pool::DbPool;
use super::schema::activities;

/// Diesel implementation of [`ActivityRepository`].
#[derive(Clone)]
pub struct DieselActivityRepository {
    pool: DbPool,
}

impl DieselActivityRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for DieselActivityRepository {
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<Activity>, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ActivityRow> = activities::table
            .filter(activities::trip_id.eq(trip_id))
            .order((
                activities::scheduled_at.asc().nulls_last(),
                activities::created_at.asc(),
            ))
            .select(ActivityRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Activity::from).collect())
    }

    async fn insert(&self, activity: &NewActivity) -> Result<Activity, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(activities::table)
            .values(&NewActivityRow {
                trip_id: activity.trip_id,
                title: activity.title.as_str(),
                category: activity.category.as_str(),
                scheduled_at: activity.scheduled_at,
                created_by: *activity.created_by.as_uuid(),
            })
            .returning(ActivityRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Activity::from)
            .map_err(map_diesel_error)
    }
}
