//! Failure type shared by every backend repository port.

use super::define_port_error;

define_port_error! {
    /// Errors raised by backend adapters.
    ///
    /// Messages are already sanitised by the adapter; resource modules still
    /// rewrap them so callers only ever see the domain [`Error`](crate::domain::Error).
    pub enum BackendError {
        /// The backend could not be reached or the connection dropped.
        Connection { message: String } => "backend connection failed: {message}",
        /// A query or mutation failed while executing.
        Query { message: String } => "backend query failed: {message}",
        /// The backend rejected a mutation, e.g. a foreign key or uniqueness violation.
        Constraint { message: String } => "backend rejected the change: {message}",
    }
}

impl BackendError {
    /// The adapter-provided message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Connection { message }
            | Self::Query { message }
            | Self::Constraint { message } => message,
        }
    }
}
