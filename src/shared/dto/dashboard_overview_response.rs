use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::task_status::TaskStatus;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverviewResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    pub recent_tasks: Vec<RecentTask>,
    pub today_events: Vec<TodayEvent>,
    pub stats: OverviewStats,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentTask {
    pub id: Uuid,
    pub title: String,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TodayEvent {
    pub id: Uuid,
    pub title: String,
    pub start_date: DateTime<Utc>,
}

/// Three-bucket task stats. This endpoint classifies on the `status`
/// field with the `completed` flag overriding into the completed bucket;
/// the analytics summary buckets on the boolean alone. The two rules are
/// intentionally kept separate.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub completed_tasks: u64,
    pub in_progress_tasks: u64,
    pub upcoming_tasks: u64,
}
