use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `POST /api/notifications/email` body. All fields are optional on the
/// wire so the handler can answer with field-specific messages.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotificationRequest {
    pub to: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub data: Option<ReminderDetails>,
}

/// Record fields referenced by reminder mails. Events carry `start`,
/// tasks carry `due_date`; the rest are shared.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDetails {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}
