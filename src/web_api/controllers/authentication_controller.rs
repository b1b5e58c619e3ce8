use axum::{extract::State, Json};

use crate::{
    api_response::ApiMessage, app_state::SharedState, authentication::auth,
    login_request::LoginRequest, login_response::LoginResponse,
    register_request::RegisterRequest, ApiError,
};

pub struct AuthenticationController {}

impl AuthenticationController {
    pub async fn register(
        State(state): State<SharedState>,
        Json(payload): Json<RegisterRequest>,
    ) -> Result<Json<ApiMessage>, ApiError> {
        auth::register(State(state), Json(payload)).await
    }

    pub async fn login(
        State(state): State<SharedState>,
        Json(payload): Json<LoginRequest>,
    ) -> Result<Json<LoginResponse>, ApiError> {
        auth::login(State(state), Json(payload)).await
    }

    pub async fn logout() -> Json<ApiMessage> {
        auth::logout().await
    }
}
