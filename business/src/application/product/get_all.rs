use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Getting catalog products");
        let products = self.repository.get_all().await?;

        let products: Vec<Product> = match params.search.as_deref() {
            Some(query) => products.into_iter().filter(|p| p.matches(query)).collect(),
            None => products,
        };

        self.logger
            .info(&format!("Retrieved {} products", products.len()));
        Ok(products)
    }
}
