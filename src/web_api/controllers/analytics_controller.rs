use axum::{extract::{Query, State}, Extension, Json};

use crate::{
    analytics::engine, analytics_query::AnalyticsQuery, api_response::ApiData,
    app_state::SharedState, summary_response::SummaryResponse, user::User, ApiError,
};

pub struct AnalyticsController {}

impl AnalyticsController {
    pub async fn summary(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Query(query): Query<AnalyticsQuery>,
    ) -> Result<Json<ApiData<SummaryResponse>>, ApiError> {
        let summary = engine::compute_summary(&state.data_context, user.id, query.time_range)?;
        Ok(Json(ApiData::new(summary)))
    }
}
