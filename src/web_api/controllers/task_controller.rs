use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    activity::Activity, api_response::ApiData, app_state::SharedState,
    authentication::ownership::ensure_owner, create_task_request::CreateTaskRequest,
    task::Task, update_task_request::UpdateTaskRequest, user::User, ApiError,
};

pub struct TaskController {}

impl TaskController {
    pub async fn get_all(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
    ) -> Result<Json<ApiData<Vec<Task>>>, ApiError> {
        Ok(Json(ApiData::new(state.data_context.list_tasks(user.id)?)))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<ApiData<Task>>, ApiError> {
        let task = state
            .data_context
            .get_task(id)?
            .ok_or(ApiError::NotFound("Task"))?;
        ensure_owner(task.owner, user.id)?;
        Ok(Json(ApiData::new(task)))
    }

    pub async fn add(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Json(body): Json<CreateTaskRequest>,
    ) -> Result<(StatusCode, Json<ApiData<Task>>), ApiError> {
        if body.title.trim().is_empty() {
            return Err(ApiError::Validation("Title is required".into()));
        }

        let task = Task::new(user.id, body);
        state.data_context.create_task(&task)?;
        state.data_context.append_activity(&Activity::new(
            user.id,
            "task_created",
            format!("Created task \"{}\"", task.title),
        ))?;

        Ok((StatusCode::CREATED, Json(ApiData::new(task))))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
        Json(body): Json<UpdateTaskRequest>,
    ) -> Result<Json<ApiData<Task>>, ApiError> {
        let task = state
            .data_context
            .get_task(id)?
            .ok_or(ApiError::NotFound("Task"))?;
        ensure_owner(task.owner, user.id)?;

        let edited = task.edit(body);
        state.data_context.update_task(&edited)?;
        Ok(Json(ApiData::new(edited)))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<ApiData<Uuid>>, ApiError> {
        let task = state
            .data_context
            .get_task(id)?
            .ok_or(ApiError::NotFound("Task"))?;
        ensure_owner(task.owner, user.id)?;

        state.data_context.delete_task(id)?;
        state.data_context.append_activity(&Activity::new(
            user.id,
            "task_deleted",
            format!("Deleted task \"{}\"", task.title),
        ))?;
        Ok(Json(ApiData::new(id)))
    }

    /// One-way completion: toggling an already-completed task is an
    /// error, not a silent no-op.
    pub async fn toggle(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<ApiData<Task>>, ApiError> {
        let mut task = state
            .data_context
            .get_task(id)?
            .ok_or(ApiError::NotFound("Task"))?;
        ensure_owner(task.owner, user.id)?;

        if !task.mark_completed(Utc::now()) {
            return Err(ApiError::Validation("Task is already completed".into()));
        }
        state.data_context.update_task(&task)?;
        state.data_context.append_activity(&Activity::new(
            user.id,
            "task_completed",
            format!("Completed task \"{}\"", task.title),
        ))?;
        Ok(Json(ApiData::new(task)))
    }
}
