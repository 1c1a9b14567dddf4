//! Diesel table definitions for the trip-planning schema.
//!
//! These definitions must match `backend/migrations` exactly; regenerate them
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Traveller accounts; `password_hash` is a pgcrypto `crypt()` digest.
    profiles (id) {
        id -> Uuid,
        email -> Text,
        password_hash -> Text,
        display_name -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    groups (id) {
        id -> Uuid,
        name -> Text,
        created_by -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per (group, user); `role` is `owner` or `member`.
    group_members (group_id, user_id) {
        group_id -> Uuid,
        user_id -> Uuid,
        role -> Text,
        joined_at -> Timestamptz,
    }
}

diesel::table! {
    trips (id) {
        id -> Uuid,
        group_id -> Uuid,
        name -> Text,
        destination -> Nullable<Text>,
        start_date -> Nullable<Date>,
        end_date -> Nullable<Date>,
        created_by -> Uuid,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    tasks (id) {
        id -> Uuid,
        group_id -> Uuid,
        trip_id -> Nullable<Uuid>,
        title -> Text,
        status -> Text,
        assignee_id -> Nullable<Uuid>,
        due_date -> Nullable<Date>,
        created_by -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Places ordered by `(day_index, position)` within a trip.
    itinerary_places (id) {
        id -> Uuid,
        trip_id -> Uuid,
        name -> Text,
        day_index -> Int4,
        starts_at -> Nullable<Timestamptz>,
        notes -> Nullable<Text>,
        position -> Int4,
    }
}

diesel::table! {
    activities (id) {
        id -> Uuid,
        trip_id -> Uuid,
        title -> Text,
        category -> Text,
        scheduled_at -> Nullable<Timestamptz>,
        created_by -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    trip_images (id) {
        id -> Uuid,
        trip_id -> Uuid,
        storage_path -> Text,
        caption -> Nullable<Text>,
        uploaded_by -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    surveys (id) {
        id -> Uuid,
        trip_id -> Uuid,
        title -> Text,
        questions -> Jsonb,
        closes_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// At most one response per (survey, user).
    survey_responses (id) {
        id -> Uuid,
        survey_id -> Uuid,
        user_id -> Uuid,
        answers -> Jsonb,
        submitted_at -> Timestamptz,
    }
}

diesel::joinable!(group_members -> groups (group_id));
diesel::joinable!(trips -> groups (group_id));
diesel::joinable!(tasks -> groups (group_id));
diesel::joinable!(itinerary_places -> trips (trip_id));
diesel::joinable!(activities -> trips (trip_id));
diesel::joinable!(trip_images -> trips (trip_id));
diesel::joinable!(surveys -> trips (trip_id));
diesel::joinable!(survey_responses -> surveys (survey_id));

diesel::allow_tables_to_appear_in_same_query!(
    profiles,
    groups,
    group_members,
    trips,
    tasks,
    itinerary_places,
    activities,
    trip_images,
    surveys,
    survey_responses,
);
