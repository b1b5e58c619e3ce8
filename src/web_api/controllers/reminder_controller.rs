use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use uuid::Uuid;

use crate::{
    api_response::ApiData, app_state::SharedState,
    authentication::ownership::ensure_owner, create_reminder_request::CreateReminderRequest,
    reminder::Reminder, update_reminder_request::UpdateReminderRequest, user::User, ApiError,
};

pub struct ReminderController {}

impl ReminderController {
    pub async fn get_all(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
    ) -> Result<Json<ApiData<Vec<Reminder>>>, ApiError> {
        Ok(Json(ApiData::new(state.data_context.list_reminders(user.id)?)))
    }

    pub async fn add(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Json(body): Json<CreateReminderRequest>,
    ) -> Result<(StatusCode, Json<ApiData<Reminder>>), ApiError> {
        if body.title.trim().is_empty() {
            return Err(ApiError::Validation("Title is required".into()));
        }

        let reminder = Reminder::new(user.id, body);
        state.data_context.create_reminder(&reminder)?;
        Ok((StatusCode::CREATED, Json(ApiData::new(reminder))))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
        Json(body): Json<UpdateReminderRequest>,
    ) -> Result<Json<ApiData<Reminder>>, ApiError> {
        let reminder = state
            .data_context
            .get_reminder(id)?
            .ok_or(ApiError::NotFound("Reminder"))?;
        ensure_owner(reminder.owner, user.id)?;

        let edited = reminder.edit(body);
        state.data_context.update_reminder(&edited)?;
        Ok(Json(ApiData::new(edited)))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<ApiData<Uuid>>, ApiError> {
        let reminder = state
            .data_context
            .get_reminder(id)?
            .ok_or(ApiError::NotFound("Reminder"))?;
        ensure_owner(reminder.owner, user.id)?;

        state.data_context.delete_reminder(id)?;
        Ok(Json(ApiData::new(id)))
    }
}
