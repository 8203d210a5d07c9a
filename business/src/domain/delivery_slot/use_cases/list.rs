use async_trait::async_trait;

use crate::domain::delivery_slot::errors::DeliverySlotError;
use crate::domain::delivery_slot::selector::SlotOffer;

#[async_trait]
pub trait ListDeliverySlotsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SlotOffer>, DeliverySlotError>;
}
