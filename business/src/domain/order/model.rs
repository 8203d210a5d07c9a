use chrono::{DateTime, NaiveDate, Utc};

use super::errors::OrderError;
use super::status::OrderStatus;
use crate::domain::product::model::ProductId;
use crate::domain::product::value_objects::Warehouse;
use crate::domain::shared::value_objects::Amount;

pub type OrderId = u64;

/// One product of an order, fulfilled entirely from a single warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub warehouse_source: Warehouse,
}

/// The moment an order entered a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    pub status: OrderStatus,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub total_amount: Amount,
    pub delivery_date: Option<NaiveDate>,
    status: OrderStatus,
    transitions: Vec<StatusTransition>,
}

pub struct NewOrderProps {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    pub total_amount: Amount,
    pub delivery_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an order in its initial state.
    pub fn new(props: NewOrderProps) -> Result<Self, OrderError> {
        validate_lines(&props.lines)?;

        Ok(Self {
            id: props.id,
            created_at: props.created_at,
            lines: props.lines,
            total_amount: props.total_amount,
            delivery_date: props.delivery_date,
            status: OrderStatus::Created,
            transitions: vec![StatusTransition {
                status: OrderStatus::Created,
                at: props.created_at,
            }],
        })
    }

    /// Rebuilds an order from its recorded transitions.
    ///
    /// The transitions must start at `Created` and follow the lifecycle
    /// without gaps; the last one is the current state.
    pub fn from_repository(
        id: OrderId,
        lines: Vec<OrderLine>,
        total_amount: Amount,
        delivery_date: Option<NaiveDate>,
        transitions: Vec<StatusTransition>,
    ) -> Result<Self, OrderError> {
        validate_lines(&lines)?;

        let in_sequence = transitions.len() <= OrderStatus::SEQUENCE.len()
            && transitions
                .iter()
                .zip(OrderStatus::SEQUENCE.iter())
                .all(|(transition, expected)| transition.status == *expected);
        let (first, last) = match (transitions.first(), transitions.last()) {
            (Some(first), Some(last)) if in_sequence => (*first, *last),
            _ => return Err(OrderError::InvalidHistory),
        };

        Ok(Self {
            id,
            created_at: first.at,
            lines,
            total_amount,
            delivery_date,
            status: last.status,
            transitions,
        })
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn transitions(&self) -> &[StatusTransition] {
        &self.transitions
    }

    pub fn reached_at(&self, status: OrderStatus) -> Option<DateTime<Utc>> {
        self.transitions
            .iter()
            .find(|t| t.status == status)
            .map(|t| t.at)
    }

    /// Moves the order one state forward.
    pub fn advance(&mut self, at: DateTime<Utc>) -> Result<OrderStatus, OrderError> {
        let next = self.status.next().ok_or(OrderError::TerminalStateReached)?;
        self.status = next;
        self.transitions.push(StatusTransition { status: next, at });
        Ok(next)
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

fn validate_lines(lines: &[OrderLine]) -> Result<(), OrderError> {
    if lines.is_empty() {
        return Err(OrderError::EmptyOrder);
    }
    if lines.iter().any(|l| l.quantity == 0) {
        return Err(OrderError::InvalidQuantity);
    }
    Ok(())
}
