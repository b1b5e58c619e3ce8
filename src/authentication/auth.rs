use crate::{
    api_response::ApiMessage,
    app_state::SharedState,
    login_request::LoginRequest,
    login_response::LoginResponse,
    register_request::RegisterRequest,
    settings::Settings,
    user::User,
    ApiError,
};
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
    Json,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

pub fn create_token(user: &User, settings: &Settings) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expiry = now + Duration::minutes(settings.jwt_expiration_in_minutes as i64);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        exp: expiry.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, settings: &Settings) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

pub async fn register(
    State(state): State<SharedState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<ApiMessage>, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation("Email and password are required".into()));
    }
    if state.data_context.get_user_by_email(&payload.email)?.is_some() {
        return Err(ApiError::Validation("Email already registered".into()));
    }

    let user = User::new(payload);
    state.data_context.create_user(&user)?;

    tracing::info!(email = %user.email, "user registered");
    Ok(Json(ApiMessage::new("User registered successfully")))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .data_context
        .get_user_by_email(&payload.email)?
        .ok_or_else(|| ApiError::Unauthenticated("Invalid credentials".into()))?;

    if !verify_password(&payload.password, &user.password_hash) {
        return Err(ApiError::Unauthenticated("Invalid credentials".into()));
    }

    let mut user = user;
    let previous_email = user.email.clone();
    user.last_login = Some(Utc::now());
    state.data_context.update_user(&previous_email, &user)?;

    let token = create_token(&user, &state.settings)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        token,
        user: user.to_get_dto(),
    }))
}

pub async fn logout() -> Json<ApiMessage> {
    // Stateless tokens: nothing to revoke server-side.
    Json(ApiMessage::new("Logged out"))
}

pub async fn auth_middleware(
    State(state): State<SharedState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => &h[7..],
        _ => return Err(ApiError::Unauthenticated("No token provided".into())),
    };

    let claims = verify_token(token, &state.settings)
        .map_err(|_| ApiError::Unauthenticated("Invalid token provided".into()))?;

    let user = state
        .data_context
        .get_user(claims.sub)?
        .ok_or_else(|| ApiError::Unauthenticated("User not found".into()))?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            tcp_socket_binding: "127.0.0.1".into(),
            tcp_socket_port: 0,
            database_path: String::new(),
            jwt_secret: "test-secret".into(),
            jwt_expiration_in_minutes: 60,
            smtp_host: "localhost".into(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_from: "Daymark <no-reply@example.com>".into(),
        }
    }

    fn test_user() -> User {
        User::new(RegisterRequest {
            email: "sam@example.com".into(),
            password: "hunter2".into(),
            display_name: Some("Sam".into()),
        })
    }

    #[test]
    fn token_round_trip() {
        let settings = test_settings();
        let user = test_user();

        let token = create_token(&user, &settings).unwrap();
        let claims = verify_token(&token, &settings).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let settings = test_settings();
        let user = test_user();
        let token = create_token(&user, &settings).unwrap();

        let mut other = test_settings();
        other.jwt_secret = "different".into();
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn password_verification() {
        let user = test_user();
        assert!(verify_password("hunter2", &user.password_hash));
        assert!(!verify_password("wrong", &user.password_hash));
        assert!(!verify_password("hunter2", "not-a-hash"));
    }
}
