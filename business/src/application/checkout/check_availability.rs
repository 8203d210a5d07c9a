use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::AvailabilityCheck;
use crate::domain::checkout::use_cases::check_availability::{
    CheckAvailabilityParams, CheckAvailabilityUseCase,
};
use crate::domain::fulfillment::splitter;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::Amount;

pub struct CheckAvailabilityUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub minimum_order_amount: Amount,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckAvailabilityUseCase for CheckAvailabilityUseCaseImpl {
    async fn execute(
        &self,
        params: CheckAvailabilityParams,
    ) -> Result<AvailabilityCheck, CheckoutError> {
        if params.session_id.is_blank() {
            return Err(CheckoutError::SessionBlank);
        }
        self.logger.info(&format!(
            "Checking availability for cart of session {}",
            params.session_id
        ));

        let cart = self.cart_repository.get(&params.session_id).await?;
        let catalog = self.product_repository.get_all().await?;

        let split = splitter::split(&cart, &catalog);
        if !split.unresolved.is_empty() {
            self.logger.warn(&format!(
                "Cart for session {} references unknown products {:?}",
                params.session_id, split.unresolved
            ));
        }

        Ok(AvailabilityCheck {
            cart_total: cart.total(&catalog),
            minimum_amount: self.minimum_order_amount,
            split,
        })
    }
}
