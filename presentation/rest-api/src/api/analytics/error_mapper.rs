use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::analytics::errors::AnalyticsError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AnalyticsError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            AnalyticsError::Repository(_) => ErrorResponse::with_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
