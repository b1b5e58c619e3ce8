use axum::{middleware, routing::post, Router};

use crate::{app_state::SharedState, authentication::auth::auth_middleware, report_controller::ReportController};

pub const ROUTER_PATH: &str = "/reports";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(format!("{ROUTER_PATH}/generate").as_str(), post(ReportController::generate))
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
