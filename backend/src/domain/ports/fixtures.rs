//! Deterministic records served by the fixture port implementations.
//!
//! Each fixture repository knows exactly one record per entity so HTTP tests
//! can exercise both the found and the not-found paths without a database.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::{Uuid, uuid};

use crate::domain::UserId;

/// User authenticated by [`FixtureLoginService`](super::FixtureLoginService).
pub const FIXTURE_USER_ID: Uuid = uuid!("123e4567-e89b-12d3-a456-426614174000");
/// Group known to the fixture repositories.
pub const FIXTURE_GROUP_ID: Uuid = uuid!("6f1c2b1e-3c3a-4a55-9d1b-0c6a1b2f4e01");
/// Trip known to the fixture repositories.
pub const FIXTURE_TRIP_ID: Uuid = uuid!("7a8b9c0d-1e2f-4a3b-8c4d-5e6f7a8b9c0d");
/// Task known to the fixture repositories.
pub const FIXTURE_TASK_ID: Uuid = uuid!("0b7e3f5a-9c2d-4e1f-a6b8-c3d4e5f60718");
/// Survey known to the fixture repositories.
pub const FIXTURE_SURVEY_ID: Uuid = uuid!("c0ffee00-1234-4abc-9def-0123456789ab");

pub(crate) fn fixture_user() -> UserId {
    UserId::from_uuid(FIXTURE_USER_ID)
}

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

pub(crate) fn fixture_date(day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 6, day)
}

/// Stable id derived from a fixture name, so inserts are reproducible.
pub(crate) fn fixture_id(name: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}
