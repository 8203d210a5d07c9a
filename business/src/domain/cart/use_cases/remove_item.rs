use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::product::model::ProductId;
use crate::domain::shared::value_objects::SessionId;

pub struct RemoveCartItemParams {
    pub session_id: SessionId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<CartSummary, CartError>;
}
