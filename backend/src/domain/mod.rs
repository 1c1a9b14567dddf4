//! Domain primitives, ports and resource modules.
//!
//! Purpose: define the travel-planning entities shared by the HTTP and
//! persistence layers, the [`Outcome`] convention every data operation
//! follows, and the resource modules that validate input before reaching a
//! port.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload and its stable identifier.
//! - Outcome / Envelope: Result alias and its JSON wire form.
//! - Entities and drafts: trips, groups, tasks, itinerary places, activities,
//!   images and surveys.
//! - Catalog: startup names and label sets.
//! - `ports` and `resources`: the hexagonal boundary and its callers.

mod activity;
mod auth;
mod catalog;
pub mod error;
mod group;
mod image;
mod itinerary;
pub mod outcome;
pub mod ports;
pub mod resources;
mod survey;
mod task;
mod trace_id;
mod trip;
mod user;
pub(crate) mod validation;

pub use self::activity::{Activity, ActivityDraft, NewActivity};
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::catalog::{Catalog, RETIRED_ENDPOINT_MESSAGE};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::group::{
    Group, GroupDraft, GroupMember, MemberDraft, MemberRole, NewGroup, NewMember,
};
pub use self::image::{ImageDraft, NewTripImage, TripImage};
pub use self::itinerary::{NewPlace, Place, PlaceDraft};
pub use self::outcome::{Envelope, EnvelopeError, Outcome};
pub use self::survey::{NewSurveyResponse, ResponseDraft, Survey, SurveyResponse};
pub use self::task::{NewTask, Task, TaskChanges, TaskDraft};
pub use self::trace_id::TraceId;
pub use self::trip::{NewTrip, Trip, TripChanges, TripDraft};
pub use self::user::{UserId, UserValidationError};
