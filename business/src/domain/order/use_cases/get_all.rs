use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

#[async_trait]
pub trait GetAllOrdersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Order>, OrderError>;
}
