use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductId};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryInMemory {
    products: RwLock<Vec<ProductEntity>>,
}

impl ProductRepositoryInMemory {
    pub fn new(products: Vec<ProductEntity>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        products.iter().cloned().map(ProductEntity::into_domain).collect()
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let products = self.products.read().await;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)?
            .into_domain()
    }
}
