use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{create_reminder_request::CreateReminderRequest, update_reminder_request::UpdateReminderRequest};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: Uuid,
    pub owner: Uuid,
    pub title: String,
    pub remind_at: DateTime<Utc>,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(owner: Uuid, request: CreateReminderRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            title: request.title,
            remind_at: request.remind_at,
            recurring: request.recurring,
            done: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn edit(self, request: UpdateReminderRequest) -> Self {
        Self {
            id: self.id,
            owner: self.owner,
            title: request.title.unwrap_or(self.title),
            remind_at: request.remind_at.unwrap_or(self.remind_at),
            recurring: request.recurring.unwrap_or(self.recurring),
            done: request.done.unwrap_or(self.done),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}
