use crate::domain::order::model::Order;
use crate::domain::product::model::Product;
use crate::domain::product::stock::{is_low_stock, top_by_stock};
use crate::domain::shared::value_objects::Amount;

pub const TOP_PRODUCTS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub total_revenue: Amount,
    /// Mean over all orders rounded to the nearest unit, 0 when there are none.
    pub average_order_value: Amount,
    pub order_count: usize,
    pub top_products: Vec<Product>,
    pub low_stock_products: Vec<Product>,
}

impl AnalyticsSummary {
    pub fn from_snapshot(orders: &[Order], products: &[Product]) -> Self {
        let total_revenue = orders
            .iter()
            .map(|o| o.total_amount)
            .fold(0, Amount::saturating_add);
        let average_order_value = match orders.len() {
            0 => 0,
            n => {
                let n = n as Amount;
                total_revenue.saturating_add(n / 2) / n
            }
        };

        Self {
            total_revenue,
            average_order_value,
            order_count: orders.len(),
            top_products: top_by_stock(products, TOP_PRODUCTS_LIMIT),
            low_stock_products: products
                .iter()
                .filter(|p| is_low_stock(p))
                .cloned()
                .collect(),
        }
    }
}
