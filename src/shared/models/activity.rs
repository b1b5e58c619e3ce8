use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only audit entry written by mutation handlers and only ever
/// read back by the aggregation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    pub owner: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    pub fn new(owner: Uuid, kind: &str, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            kind: kind.to_string(),
            description,
            timestamp: Utc::now(),
        }
    }
}
