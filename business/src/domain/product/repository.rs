use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductId};

/// Read-only access to the inventory snapshot.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
}
