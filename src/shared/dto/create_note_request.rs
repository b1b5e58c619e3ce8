use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    #[serde(default)]
    pub pinned: bool,
}
