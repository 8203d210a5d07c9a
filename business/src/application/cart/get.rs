use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::pricing::{ensure_session, price_cart};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct GetCartUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<CartSummary, CartError> {
        ensure_session(&params.session_id)?;
        self.logger
            .debug(&format!("Getting cart for session {}", params.session_id));

        let cart = self.cart_repository.get(&params.session_id).await?;
        price_cart(
            self.product_repository.as_ref(),
            self.logger.as_ref(),
            &params.session_id,
            cart,
        )
        .await
    }
}
