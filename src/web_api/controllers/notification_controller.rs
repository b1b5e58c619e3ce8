use axum::{extract::State, Json};

use crate::{
    api_response::ApiMessage, app_state::SharedState,
    email_notification_request::EmailNotificationRequest, notifications::mailer, ApiError,
};

pub struct NotificationController {}

impl NotificationController {
    /// `POST /api/notifications/email`: renders an event or task reminder
    /// and delivers it through the configured SMTP relay.
    pub async fn send_email(
        State(state): State<SharedState>,
        Json(body): Json<EmailNotificationRequest>,
    ) -> Result<Json<ApiMessage>, ApiError> {
        let to = body
            .to
            .ok_or_else(|| ApiError::Validation("Email recipient is required".into()))?;
        let (kind, details) = match (body.kind, body.data) {
            (Some(kind), Some(details)) => (kind, details),
            _ => {
                return Err(ApiError::Validation(
                    "Notification type and data are required".into(),
                ))
            }
        };

        let mail = mailer::reminder_for(&kind, &details)?;
        mailer::send(&state.settings, &to, &mail).await?;
        Ok(Json(ApiMessage::new("Email sent successfully")))
    }
}
