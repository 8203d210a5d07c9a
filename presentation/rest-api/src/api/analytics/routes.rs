use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::analytics::use_cases::get_summary::GetAnalyticsSummaryUseCase;

use crate::api::analytics::dto::AnalyticsSummaryResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AnalyticsApi {
    get_summary_use_case: Arc<dyn GetAnalyticsSummaryUseCase>,
}

impl AnalyticsApi {
    pub fn new(get_summary_use_case: Arc<dyn GetAnalyticsSummaryUseCase>) -> Self {
        Self {
            get_summary_use_case,
        }
    }
}

#[OpenApi]
impl AnalyticsApi {
    /// Sales and stock summary
    ///
    /// Revenue over all orders, top products by stock and products running low.
    #[oai(path = "/analytics/summary", method = "get", tag = "ApiTags::Analytics")]
    async fn get_summary(&self) -> GetAnalyticsSummaryResponse {
        match self.get_summary_use_case.execute().await {
            Ok(summary) => GetAnalyticsSummaryResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAnalyticsSummaryResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAnalyticsSummaryResponse {
    #[oai(status = 200)]
    Ok(Json<AnalyticsSummaryResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
