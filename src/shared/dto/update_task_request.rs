use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{task_priority::TaskPriority, task_status::TaskStatus};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub category: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}
