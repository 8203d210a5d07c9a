use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderLine};
use crate::domain::shared::value_objects::Amount;

pub struct CreateOrderParams {
    pub lines: Vec<OrderLine>,
    pub total_amount: Amount,
    pub delivery_date: NaiveDate,
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError>;
}
