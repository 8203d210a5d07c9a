use async_trait::async_trait;

use crate::domain::analytics::errors::AnalyticsError;
use crate::domain::analytics::model::AnalyticsSummary;

#[async_trait]
pub trait GetAnalyticsSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<AnalyticsSummary, AnalyticsError>;
}
