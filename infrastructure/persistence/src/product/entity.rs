use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product};

/// Catalog row as stored, with the two warehouse stocks kept side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: u32,
    pub name: String,
    pub article: String,
    pub stock_1: u32,
    pub stock_2: u32,
    pub price: u64,
    pub rating: f32,
    pub is_new: bool,
    /// Empty when there is nothing to recommend.
    pub recommendation: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        Product::new(NewProductProps {
            id: self.id,
            name: self.name,
            article_code: self.article,
            stock_warehouse_a: self.stock_1,
            stock_warehouse_b: self.stock_2,
            unit_price: self.price,
            rating: self.rating,
            is_new: self.is_new,
            recommendation: Some(self.recommendation),
        })
        .map_err(|_| RepositoryError::persistence())
    }
}
