use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::event::{EventNotifications, Recurrence};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub recurrence: Option<Recurrence>,
    pub notifications: Option<EventNotifications>,
}
