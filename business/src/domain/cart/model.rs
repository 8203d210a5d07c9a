use crate::domain::product::model::{Product, ProductId};
use crate::domain::shared::value_objects::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    /// Never zero: a line that would reach zero is removed instead.
    pub quantity: u32,
}

/// Requested quantities keyed by product, in the order products were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from stored lines, merging duplicates and dropping zeros.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.line_mut(line.product_id) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
                None => cart.lines.push(line),
            }
        }
        cart
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of requested units over all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map(|l| l.quantity)
    }

    pub fn add_or_increment(&mut self, product_id: ProductId) {
        match self.line_mut(product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                product_id,
                quantity: 1,
            }),
        }
    }

    /// Sets the quantity of an existing line; zero or less removes it.
    /// Products not in the cart are left alone.
    pub fn set_quantity(&mut self, product_id: ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove(product_id);
            return;
        }
        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Price of the cart against a catalog. Lines whose product is missing
    /// from `products` contribute nothing.
    pub fn total(&self, products: &[Product]) -> Amount {
        self.lines
            .iter()
            .filter_map(|line| {
                products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .map(|p| p.unit_price.saturating_mul(u64::from(line.quantity)))
            })
            .fold(0, Amount::saturating_add)
    }

    /// Product ids referenced by the cart but absent from `products`.
    pub fn dangling_references(&self, products: &[Product]) -> Vec<ProductId> {
        self.lines
            .iter()
            .map(|l| l.product_id)
            .filter(|id| !products.iter().any(|p| p.id == *id))
            .collect()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}

/// A cart priced against the current catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub cart: Cart,
    pub total: Amount,
    pub item_count: u64,
}

impl CartSummary {
    pub fn new(cart: Cart, products: &[Product]) -> Self {
        let total = cart.total(products);
        let item_count = cart.item_count();
        Self {
            cart,
            total,
            item_count,
        }
    }
}
