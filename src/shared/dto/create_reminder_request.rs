use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminderRequest {
    pub title: String,
    pub remind_at: DateTime<Utc>,
    #[serde(default)]
    pub recurring: bool,
}
