use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::order::errors::OrderError;
use business::domain::order::model::{Order, OrderId};
use business::domain::order::repository::OrderRepository;

use super::entity::OrderEntity;

const FIRST_ORDER_ID: OrderId = 1;

pub struct OrderRepositoryInMemory {
    orders: RwLock<BTreeMap<OrderId, OrderEntity>>,
    next_id: AtomicU64,
}

impl OrderRepositoryInMemory {
    /// Numbering continues after the highest seeded id.
    pub fn new(orders: Vec<OrderEntity>) -> Self {
        let next_id = orders
            .iter()
            .map(|o| o.id + 1)
            .max()
            .unwrap_or(FIRST_ORDER_ID);
        Self {
            orders: RwLock::new(orders.into_iter().map(|o| (o.id, o)).collect()),
            next_id: AtomicU64::new(next_id),
        }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.orders.read().await;
        orders
            .values()
            .rev()
            .cloned()
            .map(OrderEntity::into_domain)
            .collect()
    }

    async fn get_by_id(&self, id: OrderId) -> Result<Order, RepositoryError> {
        let orders = self.orders.read().await;
        orders
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)?
            .into_domain()
    }

    async fn next_id(&self) -> Result<OrderId, RepositoryError> {
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            return Err(RepositoryError::duplicated());
        }
        orders.insert(order.id, OrderEntity::from_domain(order));
        Ok(())
    }

    async fn advance(&self, id: OrderId, at: DateTime<Utc>) -> Result<Order, OrderError> {
        let mut orders = self.orders.write().await;
        let stored = orders.get_mut(&id).ok_or(OrderError::NotFound)?;

        let mut order = stored.clone().into_domain()?;
        order.advance(at)?;
        *stored = OrderEntity::from_domain(&order);
        Ok(order)
    }
}
