use axum::{extract::State, Extension, Json};

use crate::{
    api_response::ApiData, app_state::SharedState, user::User,
    user_edit_request::UserEditRequest, user_get_response::UserGetResponse, ApiError,
};

pub struct UserController {}

impl UserController {
    pub async fn get(
        Extension(user): Extension<User>,
    ) -> Result<Json<ApiData<UserGetResponse>>, ApiError> {
        Ok(Json(ApiData::new(user.to_get_dto())))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Json(body): Json<UserEditRequest>,
    ) -> Result<Json<ApiData<UserGetResponse>>, ApiError> {
        if let Some(new_email) = &body.email {
            if new_email != &user.email
                && state.data_context.get_user_by_email(new_email)?.is_some()
            {
                return Err(ApiError::Validation("Email already registered".into()));
            }
        }

        let previous_email = user.email.clone();
        let edited = user.edit(body);
        state.data_context.update_user(&previous_email, &edited)?;
        Ok(Json(ApiData::new(edited.to_get_dto())))
    }
}
