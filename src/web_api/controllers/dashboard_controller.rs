use axum::{extract::State, Extension, Json};

use crate::{
    analytics::engine, api_response::ApiData, app_state::SharedState,
    dashboard_overview_response::DashboardOverviewResponse, user::User, ApiError,
};

pub struct DashboardController {}

impl DashboardController {
    pub async fn overview(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
    ) -> Result<Json<ApiData<DashboardOverviewResponse>>, ApiError> {
        let overview = engine::dashboard_overview(&state.data_context, &user)?;
        Ok(Json(ApiData::new(overview)))
    }
}
