use serde::Deserialize;

/// Body of `POST /api/reports/generate`. The payload is caller-supplied and
/// pre-shaped; the renderer never recomputes it from storage. Field presence
/// is defensive: absent numbers render as 0, absent sections are skipped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    pub report_data: Option<ReportPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub generated_at: Option<String>,
    pub stats: Option<ReportStats>,
    #[serde(default)]
    pub progress_data: Vec<ProgressPoint>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityLine>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    #[serde(default)]
    pub total_tasks: i64,
    #[serde(default)]
    pub completed_tasks: i64,
    #[serde(default)]
    pub pending_tasks: i64,
    #[serde(default)]
    pub productivity_score: i64,
    #[serde(default)]
    pub month_total_events: i64,
    #[serde(default)]
    pub month_past_events: i64,
}

#[derive(Debug, Deserialize)]
pub struct ProgressPoint {
    pub label: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct ActivityLine {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time: String,
}
