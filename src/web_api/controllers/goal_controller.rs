use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use uuid::Uuid;

use crate::{
    activity::Activity, api_response::ApiData, app_state::SharedState,
    authentication::ownership::ensure_owner, create_goal_request::CreateGoalRequest,
    goal::Goal, update_goal_request::UpdateGoalRequest, user::User, ApiError,
};

pub struct GoalController {}

impl GoalController {
    pub async fn get_all(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
    ) -> Result<Json<ApiData<Vec<Goal>>>, ApiError> {
        Ok(Json(ApiData::new(state.data_context.list_goals(user.id)?)))
    }

    pub async fn add(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Json(body): Json<CreateGoalRequest>,
    ) -> Result<(StatusCode, Json<ApiData<Goal>>), ApiError> {
        if body.title.trim().is_empty() {
            return Err(ApiError::Validation("Title is required".into()));
        }

        let goal = Goal::new(user.id, body);
        state.data_context.create_goal(&goal)?;
        state.data_context.append_activity(&Activity::new(
            user.id,
            "goal_created",
            format!("Created goal \"{}\"", goal.title),
        ))?;
        Ok((StatusCode::CREATED, Json(ApiData::new(goal))))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
        Json(body): Json<UpdateGoalRequest>,
    ) -> Result<Json<ApiData<Goal>>, ApiError> {
        let goal = state
            .data_context
            .get_goal(id)?
            .ok_or(ApiError::NotFound("Goal"))?;
        ensure_owner(goal.owner, user.id)?;

        let was_completed = goal.completed;
        let edited = goal.edit(body);
        if edited.completed && !was_completed {
            state.data_context.append_activity(&Activity::new(
                user.id,
                "goal_completed",
                format!("Completed goal \"{}\"", edited.title),
            ))?;
        }
        state.data_context.update_goal(&edited)?;
        Ok(Json(ApiData::new(edited)))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<ApiData<Uuid>>, ApiError> {
        let goal = state
            .data_context
            .get_goal(id)?
            .ok_or(ApiError::NotFound("Goal"))?;
        ensure_owner(goal.owner, user.id)?;

        state.data_context.delete_goal(id)?;
        Ok(Json(ApiData::new(id)))
    }
}
