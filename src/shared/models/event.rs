use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{create_event_request::CreateEventRequest, update_event_request::UpdateEventRequest};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventNotifications {
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub push: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub owner: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(default)]
    pub notifications: EventNotifications,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn new(owner: Uuid, request: CreateEventRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            title: request.title,
            description: request.description,
            start_date: request.start_date,
            end_date: request.end_date,
            category: request.category,
            recurrence: request.recurrence,
            notifications: request.notifications,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn edit(self, request: UpdateEventRequest) -> Self {
        Self {
            id: self.id,
            owner: self.owner,
            title: request.title.unwrap_or(self.title),
            description: request.description.or(self.description),
            start_date: request.start_date.unwrap_or(self.start_date),
            end_date: request.end_date.unwrap_or(self.end_date),
            category: request.category.or(self.category),
            recurrence: request.recurrence.or(self.recurrence),
            notifications: request.notifications.unwrap_or(self.notifications),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}
