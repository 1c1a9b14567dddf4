//! PostgreSQL-backed `TripRepository` using Diesel.
//!
//! Membership scoping is a join against `group_members`; the adapter never
//! trusts a client-supplied group list.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{BackendError, TripRepository};
use crate::domain::{NewTrip, Trip, TripChanges, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTripRow, TripRow, TripUpdate};
use super::pool::DbPool;
use super::schema::{group_members, trips};

/// Diesel implementation of [`TripRepository`].
#[derive(Clone)]
pub struct DieselTripRepository {
    pool: DbPool,
}

impl DieselTripRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripRepository for DieselTripRepository {
    async fn list_for_member(&self, user: &UserId) -> Result<Vec<Trip>, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TripRow> = trips::table
            .inner_join(group_members::table.on(group_members::group_id.eq(trips::group_id)))
            .filter(group_members::user_id.eq(user.as_uuid()))
            .order((trips::created_at.desc(), trips::id))
            .select(TripRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Trip::from).collect())
    }

    async fn find(&self, trip_id: Uuid) -> Result<Option<Trip>, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = trips::table
            .filter(trips::id.eq(trip_id))
            .select(TripRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Trip::from))
    }

    async fn insert(&self, trip: &NewTrip) -> Result<Trip, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewTripRow {
            group_id: trip.group_id,
            name: trip.name.as_str(),
            destination: trip.destination.as_deref(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            created_by: *trip.created_by.as_uuid(),
        };

        diesel::insert_into(trips::table)
            .values(&row)
            .returning(TripRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Trip::from)
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        trip_id: Uuid,
        changes: &TripChanges,
    ) -> Result<Option<Trip>, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let update = TripUpdate {
            name: changes.name.as_deref(),
            destination: changes.destination.as_deref(),
            start_date: changes.start_date,
            end_date: changes.end_date,
            updated_at: Utc::now(),
        };

        let row = diesel::update(trips::table.filter(trips::id.eq(trip_id)))
            .set(&update)
            .returning(TripRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Trip::from))
    }
}
