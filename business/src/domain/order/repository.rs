use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::RepositoryError;

use super::errors::OrderError;
use super::model::{Order, OrderId};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders, newest first.
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(&self, id: OrderId) -> Result<Order, RepositoryError>;
    /// Reserves the next sequential order id.
    async fn next_id(&self) -> Result<OrderId, RepositoryError>;
    /// Fails with `Duplicated` when the id is already taken.
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError>;
    /// Moves the stored order one state forward and returns it.
    /// Read, transition and write happen as one step: `NotFound` for an
    /// unknown id, `TerminalStateReached` once it is `Delivered`.
    async fn advance(&self, id: OrderId, at: DateTime<Utc>) -> Result<Order, OrderError>;
}
