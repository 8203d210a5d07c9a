use poem_openapi::Object;

use business::domain::cart::model::{CartLine, CartSummary};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Catalog identifier; unknown products are accepted and priced at 0
    pub product_id: u32,
}

#[derive(Debug, Clone, Object)]
pub struct SetCartItemQuantityRequest {
    /// New quantity; zero or below removes the line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub product_id: u32,
    pub quantity: u32,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    /// Distinct products in the cart
    pub line_count: usize,
    /// Units across all lines
    pub item_count: u64,
    /// Priced against the current catalog
    pub total: u64,
}

impl From<CartSummary> for CartResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            lines: summary.cart.lines().iter().map(CartLineResponse::from).collect(),
            line_count: summary.cart.line_count(),
            item_count: summary.item_count,
            total: summary.total,
        }
    }
}
