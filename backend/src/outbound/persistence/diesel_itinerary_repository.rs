//! PostgreSQL-backed `ItineraryRepository` using Diesel.
//!
//! Positions are dense per `(trip_id, day_index)`: appending reads the
//! current maximum inside the same transaction as the insert.

use async_trait::async_trait;
use diesel::dsl::max;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{BackendError, ItineraryRepository};
use crate::domain::{NewPlace, Place};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPlaceRow, PlaceRow};
use super::pool::DbPool;
use super::schema::itinerary_places;

/// Diesel implementation of [`ItineraryRepository`].
#[derive(Clone)]
pub struct DieselItineraryRepository {
    pool: DbPool,
}

impl DieselItineraryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn next_position(current_max: Option<i32>) -> i32 {
    current_max.map_or(0, |position| position.saturating_add(1))
}

#[async_trait]
impl ItineraryRepository for DieselItineraryRepository {
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<Place>, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PlaceRow> = itinerary_places::table
            .filter(itinerary_places::trip_id.eq(trip_id))
            .order((
                itinerary_places::day_index.asc(),
                itinerary_places::position.asc(),
            ))
            .select(PlaceRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Place::from).collect())
    }

    async fn append(&self, place: &NewPlace) -> Result<Place, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = conn
            .transaction(|conn| {
                async move {
                    let current_max: Option<i32> = itinerary_places::table
                        .filter(itinerary_places::trip_id.eq(place.trip_id))
                        .filter(itinerary_places::day_index.eq(place.day_index))
                        .select(max(itinerary_places::position))
                        .first(conn)
                        .await?;

                    diesel::insert_into(itinerary_places::table)
                        .values(&NewPlaceRow {
                            trip_id: place.trip_id,
                            name: place.name.as_str(),
                            day_index: place.day_index,
                            starts_at: place.starts_at,
                            notes: place.notes.as_deref(),
                            position: next_position(current_max),
                        })
                        .returning(PlaceRow::as_returning())
                        .get_result(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(Place::from(row))
    }
}
