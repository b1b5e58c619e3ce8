use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use uuid::Uuid;

use crate::{
    activity::Activity, api_response::ApiData, app_state::SharedState,
    authentication::ownership::ensure_owner, create_note_request::CreateNoteRequest,
    note::Note, update_note_request::UpdateNoteRequest, user::User, ApiError,
};

pub struct NoteController {}

impl NoteController {
    pub async fn get_all(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
    ) -> Result<Json<ApiData<Vec<Note>>>, ApiError> {
        Ok(Json(ApiData::new(state.data_context.list_notes(user.id)?)))
    }

    pub async fn add(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Json(body): Json<CreateNoteRequest>,
    ) -> Result<(StatusCode, Json<ApiData<Note>>), ApiError> {
        if body.title.trim().is_empty() {
            return Err(ApiError::Validation("Title is required".into()));
        }

        let note = Note::new(user.id, body);
        state.data_context.create_note(&note)?;
        state.data_context.append_activity(&Activity::new(
            user.id,
            "note_created",
            format!("Created note \"{}\"", note.title),
        ))?;
        Ok((StatusCode::CREATED, Json(ApiData::new(note))))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
        Json(body): Json<UpdateNoteRequest>,
    ) -> Result<Json<ApiData<Note>>, ApiError> {
        let note = state
            .data_context
            .get_note(id)?
            .ok_or(ApiError::NotFound("Note"))?;
        ensure_owner(note.owner, user.id)?;

        let edited = note.edit(body);
        state.data_context.update_note(&edited)?;
        Ok(Json(ApiData::new(edited)))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<ApiData<Uuid>>, ApiError> {
        let note = state
            .data_context
            .get_note(id)?
            .ok_or(ApiError::NotFound("Note"))?;
        ensure_owner(note.owner, user.id)?;

        state.data_context.delete_note(id)?;
        Ok(Json(ApiData::new(id)))
    }
}
