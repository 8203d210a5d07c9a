use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::order::history::TrailEntry;
use business::domain::order::model::{Order, OrderLine};
use business::domain::order::status::OrderStatus;
use business::domain::order::use_cases::get_history::OrderHistory;

use crate::api::product::dto::WarehouseDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "created")]
    Created,
    #[oai(rename = "submitted_to_erp")]
    SubmittedToErp,
    #[oai(rename = "processing")]
    Processing,
    #[oai(rename = "confirmed")]
    Confirmed,
    #[oai(rename = "picking")]
    Picking,
    #[oai(rename = "shipped")]
    Shipped,
    #[oai(rename = "delivered")]
    Delivered,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Created => OrderStatusDto::Created,
            OrderStatus::SubmittedToErp => OrderStatusDto::SubmittedToErp,
            OrderStatus::Processing => OrderStatusDto::Processing,
            OrderStatus::Confirmed => OrderStatusDto::Confirmed,
            OrderStatus::Picking => OrderStatusDto::Picking,
            OrderStatus::Shipped => OrderStatusDto::Shipped,
            OrderStatus::Delivered => OrderStatusDto::Delivered,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderLineResponse {
    pub product_id: u32,
    pub quantity: u32,
    /// Warehouse the whole line ships from
    pub warehouse_source: WarehouseDto,
    /// Display name of the warehouse
    pub warehouse_label: String,
}

impl From<&OrderLine> for OrderLineResponse {
    fn from(line: &OrderLine) -> Self {
        Self {
            product_id: line.product_id,
            quantity: line.quantity,
            warehouse_source: line.warehouse_source.into(),
            warehouse_label: line.warehouse_source.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    /// Sequential order number
    pub id: u64,
    pub status: OrderStatusDto,
    /// Display name of the current state
    pub status_label: String,
    pub created_at: DateTime<Utc>,
    /// Chosen shipment day, absent for orders placed before slot selection
    #[oai(skip_serializing_if_is_none)]
    pub delivery_date: Option<NaiveDate>,
    pub total_amount: u64,
    /// Units across all lines
    pub item_count: u64,
    pub lines: Vec<OrderLineResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            status: order.status().into(),
            status_label: order.status().label().to_string(),
            created_at: order.created_at,
            delivery_date: order.delivery_date,
            total_amount: order.total_amount,
            item_count: order.item_count(),
            lines: order.lines.iter().map(OrderLineResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TrailEntryResponse {
    pub status: OrderStatusDto,
    pub label: String,
    pub description: String,
    #[oai(skip_serializing_if_is_none)]
    pub expected_duration: Option<String>,
    pub is_completed: bool,
    pub is_current: bool,
    /// When the order entered this state; absent for states not reached yet
    #[oai(skip_serializing_if_is_none)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<TrailEntry> for TrailEntryResponse {
    fn from(entry: TrailEntry) -> Self {
        Self {
            status: entry.status.into(),
            label: entry.label.to_string(),
            description: entry.description.to_string(),
            expected_duration: entry.expected_duration.map(str::to_string),
            is_completed: entry.is_completed,
            is_current: entry.is_current,
            timestamp: entry.timestamp,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderHistoryResponse {
    pub order_id: u64,
    pub status: OrderStatusDto,
    /// One entry per lifecycle state, in order
    pub entries: Vec<TrailEntryResponse>,
    pub completed: usize,
    pub current: usize,
    pub pending: usize,
}

impl From<OrderHistory> for OrderHistoryResponse {
    fn from(history: OrderHistory) -> Self {
        Self {
            order_id: history.order_id,
            status: history.status.into(),
            entries: history.entries.into_iter().map(Into::into).collect(),
            completed: history.counts.completed,
            current: history.counts.current,
            pending: history.counts.pending,
        }
    }
}
