use axum::{middleware, routing::{get, put}, Router};

use crate::{app_state::SharedState, authentication::auth::auth_middleware, goal_controller::GoalController};

pub const ROUTER_PATH: &str = "/goals";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(GoalController::get_all).post(GoalController::add))
        .route(
            format!("{ROUTER_PATH}/:id").as_str(),
            put(GoalController::edit).delete(GoalController::delete),
        )
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
