use axum::{routing::post, Router};

use crate::{app_state::SharedState, authentication_controller::AuthenticationController};

pub const ROUTER_PATH: &str = "/auth";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(format!("{ROUTER_PATH}/register").as_str(), post(AuthenticationController::register))
        .route(format!("{ROUTER_PATH}/login").as_str(), post(AuthenticationController::login))
        .route(format!("{ROUTER_PATH}/logout").as_str(), post(AuthenticationController::logout))
        .with_state(app_state)
}
