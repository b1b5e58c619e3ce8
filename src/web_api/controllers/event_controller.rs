use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    activity::Activity, api_response::ApiData, app_state::SharedState,
    authentication::ownership::ensure_owner, create_event_request::CreateEventRequest,
    event::Event, update_event_request::UpdateEventRequest, user::User, ApiError,
};

pub struct EventController {}

impl EventController {
    pub async fn get_all(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
    ) -> Result<Json<ApiData<Vec<Event>>>, ApiError> {
        Ok(Json(ApiData::new(state.data_context.list_events(user.id)?)))
    }

    pub async fn add(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Json(body): Json<CreateEventRequest>,
    ) -> Result<(StatusCode, Json<ApiData<Event>>), ApiError> {
        if body.title.trim().is_empty() {
            return Err(ApiError::Validation("Title is required".into()));
        }
        validate_dates(body.start_date, body.end_date)?;

        let event = Event::new(user.id, body);
        state.data_context.create_event(&event)?;
        state.data_context.append_activity(&Activity::new(
            user.id,
            "event_created",
            format!("Created event \"{}\"", event.title),
        ))?;
        Ok((StatusCode::CREATED, Json(ApiData::new(event))))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
        Json(body): Json<UpdateEventRequest>,
    ) -> Result<Json<ApiData<Event>>, ApiError> {
        let event = state
            .data_context
            .get_event(id)?
            .ok_or(ApiError::NotFound("Event"))?;
        ensure_owner(event.owner, user.id)?;

        let start = body.start_date.unwrap_or(event.start_date);
        let end = body.end_date.unwrap_or(event.end_date);
        validate_dates(start, end)?;

        let edited = event.edit(body);
        state.data_context.update_event(&edited)?;
        Ok(Json(ApiData::new(edited)))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<ApiData<Uuid>>, ApiError> {
        let event = state
            .data_context
            .get_event(id)?
            .ok_or(ApiError::NotFound("Event"))?;
        ensure_owner(event.owner, user.id)?;

        state.data_context.delete_event(id)?;
        Ok(Json(ApiData::new(id)))
    }
}

fn validate_dates(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), ApiError> {
    if end <= start {
        return Err(ApiError::Validation("endDate must be after startDate".into()));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────
