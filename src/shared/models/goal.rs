use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{create_goal_request::CreateGoalRequest, update_goal_request::UpdateGoalRequest};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: Uuid,
    pub owner: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    /// Percent complete, clamped to 0..=100.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(owner: Uuid, request: CreateGoalRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            title: request.title,
            description: request.description,
            target_date: request.target_date,
            progress: request.progress.min(100),
            completed: request.progress >= 100,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn edit(self, request: UpdateGoalRequest) -> Self {
        let progress = request.progress.unwrap_or(self.progress).min(100);
        Self {
            id: self.id,
            owner: self.owner,
            title: request.title.unwrap_or(self.title),
            description: request.description.or(self.description),
            target_date: request.target_date.or(self.target_date),
            progress,
            completed: progress >= 100,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}
