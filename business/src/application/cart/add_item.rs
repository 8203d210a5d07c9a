use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::pricing::{ensure_session, price_cart};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartSummary, CartError> {
        ensure_session(&params.session_id)?;
        self.logger.info(&format!(
            "Adding product {} to cart of session {}",
            params.product_id, params.session_id
        ));

        let mut cart = self.cart_repository.get(&params.session_id).await?;
        cart.add_or_increment(params.product_id);
        self.cart_repository.save(&params.session_id, &cart).await?;

        price_cart(
            self.product_repository.as_ref(),
            self.logger.as_ref(),
            &params.session_id,
            cart,
        )
        .await
    }
}
