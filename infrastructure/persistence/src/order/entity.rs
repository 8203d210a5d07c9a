use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderLine, StatusTransition};
use business::domain::order::status::OrderStatus;
use business::domain::product::value_objects::Warehouse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemEntity {
    pub product_id: u32,
    pub quantity: u32,
    pub warehouse: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionEntity {
    pub status: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEntity {
    pub id: u64,
    pub total: u64,
    pub delivery_date: Option<NaiveDate>,
    pub items: Vec<OrderItemEntity>,
    pub history: Vec<TransitionEntity>,
}

impl OrderEntity {
    pub fn from_domain(order: &Order) -> Self {
        Self {
            id: order.id,
            total: order.total_amount,
            delivery_date: order.delivery_date,
            items: order
                .lines
                .iter()
                .map(|line| OrderItemEntity {
                    product_id: line.product_id,
                    quantity: line.quantity,
                    warehouse: line.warehouse_source.to_string(),
                })
                .collect(),
            history: order
                .transitions()
                .iter()
                .map(|t| TransitionEntity {
                    status: t.status.to_string(),
                    at: t.at,
                })
                .collect(),
        }
    }

    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let lines = self
            .items
            .into_iter()
            .map(|item| {
                Ok(OrderLine {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    warehouse_source: item
                        .warehouse
                        .parse::<Warehouse>()
                        .map_err(|_| RepositoryError::persistence())?,
                })
            })
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        let transitions = self
            .history
            .into_iter()
            .map(|t| {
                Ok(StatusTransition {
                    status: t
                        .status
                        .parse::<OrderStatus>()
                        .map_err(|_| RepositoryError::persistence())?,
                    at: t.at,
                })
            })
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        Order::from_repository(self.id, lines, self.total, self.delivery_date, transitions)
            .map_err(|_| RepositoryError::persistence())
    }
}
