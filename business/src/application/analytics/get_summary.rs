use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analytics::errors::AnalyticsError;
use crate::domain::analytics::model::AnalyticsSummary;
use crate::domain::analytics::use_cases::get_summary::GetAnalyticsSummaryUseCase;
use crate::domain::logger::Logger;
use crate::domain::order::repository::OrderRepository;
use crate::domain::product::repository::ProductRepository;

pub struct GetAnalyticsSummaryUseCaseImpl {
    pub order_repository: Arc<dyn OrderRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAnalyticsSummaryUseCase for GetAnalyticsSummaryUseCaseImpl {
    async fn execute(&self) -> Result<AnalyticsSummary, AnalyticsError> {
        self.logger.info("Building analytics summary");

        let orders = self.order_repository.get_all().await?;
        let products = self.product_repository.get_all().await?;
        let summary = AnalyticsSummary::from_snapshot(&orders, &products);

        self.logger.debug(&format!(
            "Summary over {} orders, {} low stock products",
            summary.order_count,
            summary.low_stock_products.len()
        ));
        Ok(summary)
    }
}
