use crate::domain::fulfillment::model::{FulfillmentSplit, PendingFulfillment};
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::Amount;

/// First checkout step: what can ship now and whether the partner may go on.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityCheck {
    pub split: FulfillmentSplit,
    pub cart_total: Amount,
    pub minimum_amount: Amount,
}

impl AvailabilityCheck {
    pub fn meets_minimum(&self) -> bool {
        self.cart_total >= self.minimum_amount
    }

    pub fn can_proceed(&self) -> bool {
        self.meets_minimum() && self.split.can_proceed()
    }
}

/// Second checkout step: the created order and, for a split order, the
/// back-ordered remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order: Order,
    pub pending: Option<PendingFulfillment>,
}
