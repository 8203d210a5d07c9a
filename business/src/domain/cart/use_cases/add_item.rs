use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::product::model::ProductId;
use crate::domain::shared::value_objects::SessionId;

pub struct AddCartItemParams {
    pub session_id: SessionId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartSummary, CartError>;
}
