use axum::{middleware, routing::{get, put}, Router};

use crate::{app_state::SharedState, authentication::auth::auth_middleware, reminder_controller::ReminderController};

pub const ROUTER_PATH: &str = "/reminders";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(ReminderController::get_all).post(ReminderController::add))
        .route(
            format!("{ROUTER_PATH}/:id").as_str(),
            put(ReminderController::edit).delete(ReminderController::delete),
        )
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
