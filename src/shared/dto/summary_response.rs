use serde::Serialize;

/// Analytics summary. Derived on every request, never persisted.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub pending_tasks: u64,
    pub productivity_score: i64,
    pub month_total_events: u64,
    pub month_past_events: u64,
    pub progress_series: Vec<ProgressEntry>,
    pub recent_activity: Vec<ActivityEntry>,
}

/// One per-calendar-day bucket, labelled with the day's three-letter
/// weekday abbreviation.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub label: String,
    pub completion_rate: i64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ActivityEntry {
    pub description: String,
    pub time: String,
}
