use serde::Deserialize;

use business::domain::errors::RepositoryError;

use crate::delivery_slot::entity::DeliverySlotEntity;
use crate::order::entity::OrderEntity;
use crate::product::entity::ProductEntity;

const SEED: &str = include_str!("../seed/catalog.json");

/// Catalog, order book and slot calendar the service starts with.
#[derive(Debug, Deserialize)]
pub struct Seed {
    pub products: Vec<ProductEntity>,
    pub orders: Vec<OrderEntity>,
    pub delivery_slots: Vec<DeliverySlotEntity>,
}

impl Seed {
    pub fn load() -> Result<Self, RepositoryError> {
        Self::parse(SEED)
    }

    pub fn parse(raw: &str) -> Result<Self, RepositoryError> {
        let seed: Seed = serde_json::from_str(raw).map_err(|e| {
            tracing::error!("Invalid seed data: {}", e);
            RepositoryError::persistence()
        })?;
        tracing::debug!(
            "Seed loaded: {} products, {} orders, {} delivery slots",
            seed.products.len(),
            seed.orders.len(),
            seed.delivery_slots.len()
        );
        Ok(seed)
    }
}
