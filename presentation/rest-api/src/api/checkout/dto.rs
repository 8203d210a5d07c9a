use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::Object;

use business::domain::checkout::model::{AvailabilityCheck, OrderConfirmation};
use business::domain::fulfillment::model::{ClassifiedLine, PendingFulfillment};

use crate::api::order::dto::{OrderLineResponse, OrderResponse};
use crate::api::product::dto::WarehouseDto;

#[derive(Debug, Clone, Object)]
pub struct ConfirmOrderRequest {
    /// Shipment day, one of the listed delivery slots
    pub delivery_date: NaiveDate,
}

#[derive(Debug, Clone, Object)]
pub struct ClassifiedLineResponse {
    pub product_id: u32,
    /// Units ordered
    pub quantity: u32,
    /// Units across both warehouses at the time of the check
    pub available: u64,
    pub unit_price: u64,
    pub amount: u64,
    pub warehouse_source: WarehouseDto,
}

impl From<&ClassifiedLine> for ClassifiedLineResponse {
    fn from(classified: &ClassifiedLine) -> Self {
        Self {
            product_id: classified.line.product_id,
            quantity: classified.line.quantity,
            available: classified.available,
            unit_price: classified.unit_price,
            amount: classified.amount(),
            warehouse_source: classified.line.warehouse_source.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AvailabilityResponse {
    /// Lines that ship with the order
    pub in_stock: Vec<ClassifiedLineResponse>,
    /// Lines set aside until stock arrives
    pub back_ordered: Vec<ClassifiedLineResponse>,
    /// Cart lines whose product is no longer in the catalog
    pub unresolved: Vec<u32>,
    pub cart_total: u64,
    /// Value of the in-stock lines, the amount the order will carry
    pub in_stock_amount: u64,
    pub minimum_amount: u64,
    pub meets_minimum: bool,
    /// Both partitions are non-empty
    pub is_split: bool,
    pub can_proceed: bool,
}

impl From<AvailabilityCheck> for AvailabilityResponse {
    fn from(check: AvailabilityCheck) -> Self {
        Self {
            in_stock: check.split.in_stock.iter().map(Into::into).collect(),
            back_ordered: check.split.back_ordered.iter().map(Into::into).collect(),
            in_stock_amount: check.split.in_stock_amount(),
            is_split: check.split.is_split(),
            meets_minimum: check.meets_minimum(),
            can_proceed: check.can_proceed(),
            cart_total: check.cart_total,
            minimum_amount: check.minimum_amount,
            unresolved: check.split.unresolved,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PendingFulfillmentResponse {
    pub id: String,
    pub lines: Vec<OrderLineResponse>,
    /// Always `awaiting_stock`
    pub status: String,
    #[oai(skip_serializing_if_is_none)]
    pub delivery_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<PendingFulfillment> for PendingFulfillmentResponse {
    fn from(pending: PendingFulfillment) -> Self {
        Self {
            id: pending.id.to_string(),
            lines: pending.lines.iter().map(OrderLineResponse::from).collect(),
            status: pending.status.to_string(),
            delivery_date: pending.delivery_date,
            created_at: pending.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderConfirmationResponse {
    pub order: OrderResponse,
    /// Present when part of the cart was back-ordered
    #[oai(skip_serializing_if_is_none)]
    pub pending: Option<PendingFulfillmentResponse>,
}

impl From<OrderConfirmation> for OrderConfirmationResponse {
    fn from(confirmation: OrderConfirmation) -> Self {
        Self {
            order: confirmation.order.into(),
            pending: confirmation.pending.map(Into::into),
        }
    }
}
