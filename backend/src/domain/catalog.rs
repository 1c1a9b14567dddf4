//! Immutable names and label sets resolved once at startup.
//!
//! Resource modules and handlers receive the catalog through an `Arc` instead
//! of reading module-level constants.

use serde::{Deserialize, Serialize};

/// Message returned by every retired endpoint.
pub const RETIRED_ENDPOINT_MESSAGE: &str = "This endpoint is no longer available.";

/// Startup catalog of backend names and accepted labels.
///
/// # Examples
/// ```
/// use tripboard::domain::Catalog;
///
/// let catalog = Catalog::default();
/// assert!(catalog.task_statuses.iter().any(|status| status == "todo"));
/// assert_eq!(catalog.retired_endpoint_message, "This endpoint is no longer available.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Stored procedure returning the admin trip overview.
    pub trip_overview_rpc: String,
    /// Accepted task statuses; the first one is the default.
    pub task_statuses: Vec<String>,
    /// Accepted activity categories.
    pub activity_categories: Vec<String>,
    /// Body message for retired endpoints.
    pub retired_endpoint_message: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            trip_overview_rpc: "admin_trip_overview".to_owned(),
            task_statuses: labels(&["todo", "in_progress", "done"]),
            activity_categories: labels(&[
                "food",
                "culture",
                "outdoors",
                "nightlife",
                "transport",
                "other",
            ]),
            retired_endpoint_message: RETIRED_ENDPOINT_MESSAGE.to_owned(),
        }
    }
}

impl Catalog {
    /// Status given to tasks created without one.
    pub fn default_task_status(&self) -> Option<&str> {
        self.task_statuses.first().map(String::as_str)
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}
