use axum::{middleware, routing::get, Router};

use crate::{app_state::SharedState, authentication::auth::auth_middleware, analytics_controller::AnalyticsController};

pub const ROUTER_PATH: &str = "/analytics";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(AnalyticsController::summary))
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
