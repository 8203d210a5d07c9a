use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderId};

pub struct AdvanceOrderParams {
    pub id: OrderId,
}

#[async_trait]
pub trait AdvanceOrderUseCase: Send + Sync {
    async fn execute(&self, params: AdvanceOrderParams) -> Result<Order, OrderError>;
}
