use axum::{middleware, routing::{get, put}, Router};

use crate::{app_state::SharedState, authentication::auth::auth_middleware, note_controller::NoteController};

pub const ROUTER_PATH: &str = "/notes";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(NoteController::get_all).post(NoteController::add))
        .route(
            format!("{ROUTER_PATH}/:id").as_str(),
            put(NoteController::edit).delete(NoteController::delete),
        )
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
