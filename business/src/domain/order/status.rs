use serde::{Deserialize, Serialize};

/// Lifecycle of an order. Variants are declared in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Created,
    SubmittedToErp,
    Processing,
    Confirmed,
    Picking,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Every state, first to last. `advance` walks this table one step at a time.
    pub const SEQUENCE: [OrderStatus; 7] = [
        OrderStatus::Created,
        OrderStatus::SubmittedToErp,
        OrderStatus::Processing,
        OrderStatus::Confirmed,
        OrderStatus::Picking,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn index(self) -> usize {
        match self {
            OrderStatus::Created => 0,
            OrderStatus::SubmittedToErp => 1,
            OrderStatus::Processing => 2,
            OrderStatus::Confirmed => 3,
            OrderStatus::Picking => 4,
            OrderStatus::Shipped => 5,
            OrderStatus::Delivered => 6,
        }
    }

    /// The following state, or `None` once delivered.
    pub fn next(self) -> Option<OrderStatus> {
        Self::SEQUENCE.get(self.index() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Created => "Created",
            OrderStatus::SubmittedToErp => "Submitted to ERP",
            OrderStatus::Processing => "Processing",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Picking => "Picking",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OrderStatus::Created => "Order created by the partner",
            OrderStatus::SubmittedToErp => "Order loaded into the ERP system for processing",
            OrderStatus::Processing => "Manager is checking availability and preparing shipment",
            OrderStatus::Confirmed => "Order confirmed, goods reserved",
            OrderStatus::Picking => "Goods are being picked at the warehouse",
            OrderStatus::Shipped => "Goods shipped, awaiting delivery",
            OrderStatus::Delivered => "Goods delivered to the recipient",
        }
    }

    /// How long the order usually stays in this state, where known.
    pub fn expected_duration(self) -> Option<&'static str> {
        match self {
            OrderStatus::Processing => Some("Usually takes 2-4 hours"),
            OrderStatus::Confirmed => Some("Picking starts within 1 hour"),
            OrderStatus::Picking => Some("Picking takes 4-6 hours"),
            OrderStatus::Shipped => Some("Delivery within 1-2 days"),
            OrderStatus::Created | OrderStatus::SubmittedToErp | OrderStatus::Delivered => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Created => write!(f, "created"),
            OrderStatus::SubmittedToErp => write!(f, "submitted_to_erp"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
            OrderStatus::Picking => write!(f, "picking"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(OrderStatus::Created),
            "submitted_to_erp" => Ok(OrderStatus::SubmittedToErp),
            "processing" => Ok(OrderStatus::Processing),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "picking" => Ok(OrderStatus::Picking),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_index_match_sequence_position() {
        for (position, status) in OrderStatus::SEQUENCE.iter().enumerate() {
            assert_eq!(status.index(), position);
        }
    }

    #[test]
    fn should_step_forward_one_state_at_a_time() {
        assert_eq!(OrderStatus::Created.next(), Some(OrderStatus::SubmittedToErp));
        assert_eq!(OrderStatus::Picking.next(), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::Delivered.next(), None);
    }

    #[test]
    fn should_only_delivered_be_terminal() {
        let terminal: Vec<_> = OrderStatus::SEQUENCE
            .iter()
            .filter(|s| s.is_terminal())
            .collect();

        assert_eq!(terminal, vec![&OrderStatus::Delivered]);
    }

    #[test]
    fn should_order_by_lifecycle_position() {
        assert!(OrderStatus::Created < OrderStatus::Delivered);
        assert!(OrderStatus::Confirmed > OrderStatus::Processing);
    }

    #[test]
    fn should_parse_displayed_status() {
        for status in OrderStatus::SEQUENCE {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn should_have_label_and_description_for_every_state() {
        for status in OrderStatus::SEQUENCE {
            assert!(!status.label().is_empty());
            assert!(!status.description().is_empty());
        }
    }
}
