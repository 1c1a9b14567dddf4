//! PostgreSQL-backed `ImageRepository`; stores object paths, never bytes.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{BackendError, ImageRepository};
use crate::domain::{NewTripImage, TripImage};

use super::error_mapping::{map_diesel_error, map_diesel_error_with, map_pool_error};
use super::models::{NewTripImageRow, TripImageRow};
use super::pool::DbPool;
use super::schema::trip_images;

/// Diesel implementation of [`ImageRepository`].
#[derive(Clone)]
pub struct DieselImageRepository {
    pool: DbPool,
}

impl DieselImageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for DieselImageRepository {
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<TripImage>, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TripImageRow> = trip_images::table
            .filter(trip_images::trip_id.eq(trip_id))
            .order(trip_images::created_at.desc())
            .select(TripImageRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(TripImage::from).collect())
    }

    async fn insert(&self, image: &NewTripImage) -> Result<TripImage, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(trip_images::table)
            .values(&NewTripImageRow {
                trip_id: image.trip_id,
                storage_path: image.storage_path.as_str(),
                caption: image.caption.as_deref(),
                uploaded_by: *image.uploaded_by.as_uuid(),
            })
            .returning(TripImageRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(TripImage::from)
            .map_err(|error| map_diesel_error_with(error, "image already registered"))
    }
}
