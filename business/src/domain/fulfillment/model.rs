use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::order::model::OrderLine;
use crate::domain::product::model::ProductId;
use crate::domain::shared::value_objects::Amount;

/// A cart line after it has been checked against stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub line: OrderLine,
    /// Combined stock of both warehouses at the time of the check.
    pub available: u64,
    pub unit_price: Amount,
}

impl ClassifiedLine {
    pub fn amount(&self) -> Amount {
        self.unit_price
            .saturating_mul(u64::from(self.line.quantity))
    }
}

/// Result of checking a cart against the inventory snapshot.
///
/// Every cart line whose product resolves lands in exactly one partition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FulfillmentSplit {
    pub in_stock: Vec<ClassifiedLine>,
    pub back_ordered: Vec<ClassifiedLine>,
    /// Cart lines whose product is gone from the catalog; in neither partition.
    pub unresolved: Vec<ProductId>,
}

impl FulfillmentSplit {
    pub fn can_proceed(&self) -> bool {
        !self.in_stock.is_empty()
    }

    /// Both partitions are non-empty, so the order ships in two parts.
    pub fn is_split(&self) -> bool {
        self.can_proceed() && !self.back_ordered.is_empty()
    }

    pub fn in_stock_lines(&self) -> Vec<OrderLine> {
        self.in_stock.iter().map(|c| c.line).collect()
    }

    pub fn back_ordered_lines(&self) -> Vec<OrderLine> {
        self.back_ordered.iter().map(|c| c.line).collect()
    }

    /// Value of the part that can ship now; this becomes the order total.
    pub fn in_stock_amount(&self) -> Amount {
        self.in_stock
            .iter()
            .map(ClassifiedLine::amount)
            .fold(0, Amount::saturating_add)
    }

    /// The back-ordered part as a record waiting for replenishment,
    /// or `None` when nothing is back-ordered.
    pub fn pending_fulfillment(&self, created_at: DateTime<Utc>) -> Option<PendingFulfillment> {
        if self.back_ordered.is_empty() {
            return None;
        }
        Some(PendingFulfillment {
            id: Uuid::new_v4(),
            lines: self.back_ordered_lines(),
            status: PendingStatus::AwaitingStock,
            delivery_date: None,
            created_at,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingStatus {
    AwaitingStock,
}

impl std::fmt::Display for PendingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PendingStatus::AwaitingStock => write!(f, "awaiting_stock"),
        }
    }
}

/// Back-ordered lines set aside for resubmission once stock arrives.
/// Never gets a delivery date here.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFulfillment {
    pub id: Uuid,
    pub lines: Vec<OrderLine>,
    pub status: PendingStatus,
    pub delivery_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
