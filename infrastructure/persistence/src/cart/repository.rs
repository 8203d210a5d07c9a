use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

/// One cart per session, dropped once it becomes empty.
#[derive(Default)]
pub struct CartRepositoryInMemory {
    carts: RwLock<HashMap<SessionId, Cart>>,
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn get(&self, session_id: &SessionId) -> Result<Cart, RepositoryError> {
        let carts = self.carts.read().await;
        Ok(carts.get(session_id).cloned().unwrap_or_default())
    }

    async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError> {
        let mut carts = self.carts.write().await;
        if cart.is_empty() {
            carts.remove(session_id);
        } else {
            carts.insert(session_id.clone(), cart.clone());
        }
        Ok(())
    }

    async fn clear(&self, session_id: &SessionId) -> Result<(), RepositoryError> {
        self.carts.write().await.remove(session_id);
        Ok(())
    }
}
