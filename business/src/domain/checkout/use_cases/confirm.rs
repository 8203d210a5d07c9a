use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::OrderConfirmation;
use crate::domain::shared::value_objects::SessionId;

pub struct ConfirmOrderParams {
    pub session_id: SessionId,
    pub delivery_date: NaiveDate,
}

#[async_trait]
pub trait ConfirmOrderUseCase: Send + Sync {
    async fn execute(&self, params: ConfirmOrderParams) -> Result<OrderConfirmation, CheckoutError>;
}
