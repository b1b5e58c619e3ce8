use axum::{middleware, routing::get, Router};

use crate::{app_state::SharedState, authentication::auth::auth_middleware, user_controller::UserController};

pub const ROUTER_PATH: &str = "/user";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(UserController::get).put(UserController::edit))
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
