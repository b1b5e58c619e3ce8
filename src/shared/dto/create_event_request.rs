use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::event::{EventNotifications, Recurrence};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub category: Option<String>,
    pub recurrence: Option<Recurrence>,
    #[serde(default)]
    pub notifications: EventNotifications,
}
