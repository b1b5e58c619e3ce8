use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    generate_report_request::GenerateReportRequest,
    reporting::renderer::{render_report, REPORT_CONTENT_TYPE, REPORT_FILENAME},
    ApiError,
};

pub struct ReportController {}

impl ReportController {
    /// `POST /api/reports/generate`: renders the caller-supplied summary
    /// payload into a PDF attachment. Nothing is recomputed from storage.
    pub async fn generate(
        Json(body): Json<GenerateReportRequest>,
    ) -> Result<Response, ApiError> {
        let payload = body
            .report_data
            .ok_or_else(|| ApiError::Validation("Report data is required".into()))?;

        let bytes = render_report(&payload)?;
        let headers = [
            (header::CONTENT_TYPE, REPORT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ];
        Ok((headers, bytes).into_response())
    }
}
