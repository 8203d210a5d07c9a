use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::product::model::ProductId;
use crate::domain::shared::value_objects::SessionId;

pub struct SetCartItemQuantityParams {
    pub session_id: SessionId,
    pub product_id: ProductId,
    /// Zero or negative removes the line.
    pub quantity: i64,
}

#[async_trait]
pub trait SetCartItemQuantityUseCase: Send + Sync {
    async fn execute(&self, params: SetCartItemQuantityParams) -> Result<CartSummary, CartError>;
}
