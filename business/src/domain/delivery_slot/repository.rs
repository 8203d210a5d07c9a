use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::DeliverySlot;

/// Source of the configured slots, in calendar order.
#[async_trait]
pub trait DeliverySlotRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<DeliverySlot>, RepositoryError>;
}
