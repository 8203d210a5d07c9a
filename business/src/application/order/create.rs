use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{NewOrderProps, Order};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};

pub struct CreateOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateOrderUseCase for CreateOrderUseCaseImpl {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError> {
        self.logger.info(&format!(
            "Creating order with {} lines for delivery on {}",
            params.lines.len(),
            params.delivery_date
        ));

        if params.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let id = self.repository.next_id().await?;
        let order = Order::new(NewOrderProps {
            id,
            lines: params.lines,
            total_amount: params.total_amount,
            delivery_date: Some(params.delivery_date),
            created_at: Utc::now(),
        })?;

        self.repository.insert(&order).await?;

        self.logger
            .info(&format!("Order created with id: {}", order.id));
        Ok(order)
    }
}
