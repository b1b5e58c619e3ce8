use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{create_note_request::CreateNoteRequest, update_note_request::UpdateNoteRequest};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub owner: Uuid,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(owner: Uuid, request: CreateNoteRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            title: request.title,
            content: request.content,
            category: request.category,
            pinned: request.pinned,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn edit(self, request: UpdateNoteRequest) -> Self {
        Self {
            id: self.id,
            owner: self.owner,
            title: request.title.unwrap_or(self.title),
            content: request.content.unwrap_or(self.content),
            category: request.category.or(self.category),
            pinned: request.pinned.unwrap_or(self.pinned),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}
