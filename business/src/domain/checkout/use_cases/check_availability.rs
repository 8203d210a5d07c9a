use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::AvailabilityCheck;
use crate::domain::shared::value_objects::SessionId;

pub struct CheckAvailabilityParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait CheckAvailabilityUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CheckAvailabilityParams,
    ) -> Result<AvailabilityCheck, CheckoutError>;
}
