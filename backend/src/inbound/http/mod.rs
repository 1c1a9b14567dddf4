//! HTTP inbound adapter exposing the `/api` REST endpoints.
//!
//! Handlers unwrap the [`Outcome`](crate::domain::Outcome) returned by the
//! resource modules: success becomes a JSON body, failure becomes the error
//! body rendered by [`error`].

pub mod activities;
pub mod admin;
pub mod auth;
pub mod cache_control;
pub mod error;
pub mod groups;
pub mod health;
pub mod images;
pub mod itinerary;
pub mod ping;
pub(crate) mod responses;
pub mod routes;
pub mod schemas;
pub mod session;
pub mod state;
pub mod surveys;
pub mod tasks;
#[cfg(test)]
pub mod test_utils;
pub mod trips;

pub use error::ApiResult;
