use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminderRequest {
    pub title: Option<String>,
    pub remind_at: Option<DateTime<Utc>>,
    pub recurring: Option<bool>,
    pub done: Option<bool>,
}
