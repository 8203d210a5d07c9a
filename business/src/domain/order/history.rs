use chrono::{DateTime, Utc};

use super::model::Order;
use super::status::OrderStatus;

/// One row of the status timeline shown for an order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailEntry {
    pub status: OrderStatus,
    pub label: &'static str,
    pub description: &'static str,
    pub expected_duration: Option<&'static str>,
    pub is_completed: bool,
    pub is_current: bool,
    /// `None` for states the order has not reached yet.
    pub timestamp: Option<DateTime<Utc>>,
}

/// How many trail rows are done, in progress and still ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailCounts {
    pub completed: usize,
    pub current: usize,
    pub pending: usize,
}

/// Derives the full timeline of an order, one entry per lifecycle state.
///
/// Nothing here is stored: the trail is rebuilt from the current state and
/// the recorded transition timestamps every time it is asked for.
pub fn history_trail(order: &Order) -> Vec<TrailEntry> {
    let current = order.status().index();

    OrderStatus::SEQUENCE
        .iter()
        .map(|&status| {
            let index = status.index();
            TrailEntry {
                status,
                label: status.label(),
                description: status.description(),
                expected_duration: status.expected_duration(),
                is_completed: index < current,
                is_current: index == current,
                timestamp: if index <= current {
                    order.reached_at(status)
                } else {
                    None
                },
            }
        })
        .collect()
}

pub fn trail_counts(trail: &[TrailEntry]) -> TrailCounts {
    TrailCounts {
        completed: trail.iter().filter(|e| e.is_completed).count(),
        current: trail.iter().filter(|e| e.is_current).count(),
        pending: trail
            .iter()
            .filter(|e| !e.is_completed && !e.is_current)
            .count(),
    }
}
