use axum::{middleware, routing::get, Router};

use crate::{app_state::SharedState, authentication::auth::auth_middleware, dashboard_controller::DashboardController};

pub const ROUTER_PATH: &str = "/dashboard";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(format!("{ROUTER_PATH}/overview").as_str(), get(DashboardController::overview))
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
