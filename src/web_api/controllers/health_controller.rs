use axum::Json;

use crate::api_response::ApiMessage;

pub struct HealthController {}

impl HealthController {
    pub async fn get() -> Json<ApiMessage> {
        Json(ApiMessage::new("Server is running"))
    }
}
