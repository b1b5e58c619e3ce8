use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{create_task_request::CreateTaskRequest, update_task_request::UpdateTaskRequest};

use super::{task_priority::TaskPriority, task_status::TaskStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub owner: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub completed: bool,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(owner: Uuid, request: CreateTaskRequest) -> Self {
        let now = Utc::now();
        let status = request.status;
        Self {
            id: Uuid::new_v4(),
            owner,
            title: request.title,
            description: request.description,
            status,
            completed: status == TaskStatus::Completed,
            priority: request.priority,
            category: request.category,
            due_date: request.due_date,
            created_at: now,
            updated_at: now,
            completed_at: (status == TaskStatus::Completed).then_some(now),
        }
    }

    pub fn edit(self, request: UpdateTaskRequest) -> Self {
        let now = Utc::now();
        let status = request.status.unwrap_or(self.status);
        // `completed` is one-way: a status edit may set it, never clear it.
        let completed = self.completed || status == TaskStatus::Completed;
        Self {
            id: self.id,
            owner: self.owner,
            title: request.title.unwrap_or(self.title),
            description: request.description.or(self.description),
            status,
            completed,
            priority: request.priority.unwrap_or(self.priority),
            category: request.category.or(self.category),
            due_date: request.due_date.or(self.due_date),
            created_at: self.created_at,
            updated_at: now,
            completed_at: if completed && self.completed_at.is_none() {
                Some(now)
            } else {
                self.completed_at
            },
        }
    }

    /// One-way completion toggle. Returns false if the task is already
    /// completed; callers must reject that case rather than no-op.
    pub fn mark_completed(&mut self, now: DateTime<Utc>) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.status = TaskStatus::Completed;
        self.completed_at = Some(now);
        self.updated_at = now;
        true
    }
}

// ── Tests ──────────────────────────────────────────────────────
