pub mod health_routes;
pub mod authentication_routes;
pub mod user_routes;
pub mod task_routes;
pub mod note_routes;
pub mod event_routes;
pub mod goal_routes;
pub mod reminder_routes;
pub mod dashboard_routes;
pub mod analytics_routes;
pub mod report_routes;
pub mod notification_routes;

use axum::{routing::get, Router};

use crate::{app_state::SharedState, health_controller::HealthController};

pub fn map_routes(app_state: SharedState) -> Router {
    let api = Router::new()
        .merge(health_routes::get_router())
        .merge(authentication_routes::get_router(app_state.clone()))
        .merge(user_routes::get_router(app_state.clone()))
        .merge(task_routes::get_router(app_state.clone()))
        .merge(note_routes::get_router(app_state.clone()))
        .merge(event_routes::get_router(app_state.clone()))
        .merge(goal_routes::get_router(app_state.clone()))
        .merge(reminder_routes::get_router(app_state.clone()))
        .merge(dashboard_routes::get_router(app_state.clone()))
        .merge(analytics_routes::get_router(app_state.clone()))
        .merge(report_routes::get_router(app_state.clone()))
        .merge(notification_routes::get_router(app_state));

    Router::new()
        .route("/", get(HealthController::get))
        .nest("/api", api)
}
