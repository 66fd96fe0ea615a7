//! Background job descriptions.
//!
//! Jobs are queued fire-and-forget; execution happens in external workers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A work item accepted by the job queue.
///
/// Serializes as `{"name": "...", "data": {...}}`, the wire shape the worker
/// fleet consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "data")]
pub enum Job {
    /// Send the signup notification for a newly created user.
    #[serde(rename = "notify-signup", rename_all = "camelCase")]
    NotifySignup {
        /// The new user's ID.
        id: Uuid,
        /// One-time plaintext password, present only when the user must
        /// change it on first login.
        #[serde(skip_serializing_if = "Option::is_none")]
        temp_password: Option<String>,
    },

    /// Purge a user's data after a forced delete.
    #[serde(rename = "user-delete", rename_all = "camelCase")]
    UserDelete {
        /// The user being removed.
        id: Uuid,
        /// Set for the hard-delete path.
        force: bool,
    },
}

impl Job {
    /// The queue name for this job.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Job::NotifySignup { .. } => "notify-signup",
            Job::UserDelete { .. } => "user-delete",
        }
    }

    /// The job payload as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn data(&self) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        Ok(value
            .get_mut("data")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}
