use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::model::Cart;

/// Session-scoped cart storage.
///
/// `get` returns an empty cart for a session that has none yet.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get(&self, session_id: &SessionId) -> Result<Cart, RepositoryError>;
    async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError>;
    async fn clear(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
}
