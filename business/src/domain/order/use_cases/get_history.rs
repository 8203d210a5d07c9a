use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::history::{TrailCounts, TrailEntry};
use crate::domain::order::model::OrderId;
use crate::domain::order::status::OrderStatus;

pub struct GetOrderHistoryParams {
    pub id: OrderId,
}

pub struct OrderHistory {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub entries: Vec<TrailEntry>,
    pub counts: TrailCounts,
}

#[async_trait]
pub trait GetOrderHistoryUseCase: Send + Sync {
    async fn execute(&self, params: GetOrderHistoryParams) -> Result<OrderHistory, OrderError>;
}
