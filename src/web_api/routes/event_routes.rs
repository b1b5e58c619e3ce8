use axum::{middleware, routing::{get, put}, Router};

use crate::{app_state::SharedState, authentication::auth::auth_middleware, event_controller::EventController};

pub const ROUTER_PATH: &str = "/events";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(EventController::get_all).post(EventController::add))
        .route(
            format!("{ROUTER_PATH}/:id").as_str(),
            put(EventController::edit).delete(EventController::delete),
        )
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
