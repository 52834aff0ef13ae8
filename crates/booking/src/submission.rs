use crate::form::FormData;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Snapshot of the form taken when the user presses Submit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub form: FormData,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn capture(form: &FormData) -> Self {
        Self {
            form: form.clone(),
            submitted_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
