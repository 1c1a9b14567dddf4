//! Outbound adapters implementing the domain ports.
//!
//! Only Postgres persistence lives here; the HTTP layer reaches it solely
//! through the port traits in [`crate::domain::ports`].

pub mod persistence;
