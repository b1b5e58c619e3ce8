use serde::Deserialize;

use crate::time_range::TimeRange;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub time_range: TimeRange,
}
