use super::errors::FulfillmentError;
use super::model::{ClassifiedLine, FulfillmentSplit};
use crate::domain::cart::model::Cart;
use crate::domain::order::model::OrderLine;
use crate::domain::product::model::Product;

/// Partitions a cart into lines that can ship now and lines that must wait.
///
/// A line is in stock when the combined stock of both warehouses covers the
/// whole requested quantity. Lines are never split: a short line waits in
/// full. Each line is sourced from the warehouse holding more of the product.
pub fn split(cart: &Cart, products: &[Product]) -> FulfillmentSplit {
    let mut result = FulfillmentSplit::default();

    for cart_line in cart.lines() {
        let Some(product) = products.iter().find(|p| p.id == cart_line.product_id) else {
            result.unresolved.push(cart_line.product_id);
            continue;
        };

        let classified = ClassifiedLine {
            line: OrderLine {
                product_id: product.id,
                quantity: cart_line.quantity,
                warehouse_source: product.fullest_warehouse(),
            },
            available: product.available(),
            unit_price: product.unit_price,
        };

        if classified.available >= u64::from(cart_line.quantity) {
            result.in_stock.push(classified);
        } else {
            result.back_ordered.push(classified);
        }
    }

    result
}

/// Like [`split`], but refuses a result with nothing to ship.
pub fn split_fulfillable(
    cart: &Cart,
    products: &[Product],
) -> Result<FulfillmentSplit, FulfillmentError> {
    let result = split(cart, products);
    if !result.can_proceed() {
        return Err(FulfillmentError::EmptyFulfillableSet);
    }
    Ok(result)
}
