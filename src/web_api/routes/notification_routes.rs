use axum::{middleware, routing::post, Router};

use crate::{app_state::SharedState, authentication::auth::auth_middleware, notification_controller::NotificationController};

pub const ROUTER_PATH: &str = "/notifications";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(format!("{ROUTER_PATH}/email").as_str(), post(NotificationController::send_email))
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
