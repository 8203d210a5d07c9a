use poem_openapi::Object;

use business::domain::analytics::model::AnalyticsSummary;

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct AnalyticsSummaryResponse {
    pub total_revenue: u64,
    /// 0 when there are no orders
    pub average_order_value: u64,
    pub order_count: usize,
    /// Largest combined stock first
    pub top_products: Vec<ProductResponse>,
    pub low_stock_products: Vec<ProductResponse>,
}

impl From<AnalyticsSummary> for AnalyticsSummaryResponse {
    fn from(summary: AnalyticsSummary) -> Self {
        Self {
            total_revenue: summary.total_revenue,
            average_order_value: summary.average_order_value,
            order_count: summary.order_count,
            top_products: summary.top_products.into_iter().map(Into::into).collect(),
            low_stock_products: summary
                .low_stock_products
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
