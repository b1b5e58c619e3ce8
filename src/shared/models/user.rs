use argon2::{Argon2, PasswordHasher, password_hash::{SaltString, rand_core::OsRng}};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{register_request::RegisterRequest, user_edit_request::UserEditRequest, user_get_response::UserGetResponse};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(request: RegisterRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: request.email,
            display_name: request.display_name.unwrap_or_default(),
            password_hash: User::get_hashed_password(request.password.trim().as_bytes()),
            created_at: Utc::now(),
            last_login: None,
        }
    }

    pub fn edit(self, request: UserEditRequest) -> Self {
        Self {
            id: self.id,
            email: request.email.unwrap_or(self.email),
            display_name: request.display_name.unwrap_or(self.display_name),
            password_hash: self.password_hash,
            created_at: self.created_at,
            last_login: self.last_login,
        }
    }

    pub fn to_get_dto(&self) -> UserGetResponse {
        UserGetResponse {
            id: self.id,
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            created_at: self.created_at,
            last_login: self.last_login,
        }
    }

    fn get_hashed_password(password_bytes: &[u8]) -> String {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password_bytes, &salt)
            .expect("argon2 hashing cannot fail with default params")
            .to_string()
    }
}
