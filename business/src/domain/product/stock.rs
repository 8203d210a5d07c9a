use super::model::Product;

/// Combined stock under this many units is reported as low.
pub const LOW_STOCK_THRESHOLD: u64 = 100;

pub fn is_low_stock(product: &Product) -> bool {
    product.available() < LOW_STOCK_THRESHOLD
}

/// Products ordered by combined stock, largest first, truncated to `limit`.
///
/// The input slice is left untouched.
pub fn top_by_stock(products: &[Product], limit: usize) -> Vec<Product> {
    let mut ranked = products.to_vec();
    ranked.sort_by(|a, b| b.available().cmp(&a.available()));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;

    fn product(id: u32, stock_a: u32, stock_b: u32) -> Product {
        Product::new(NewProductProps {
            id,
            name: format!("Product {}", id),
            article_code: format!("ART-{}", id),
            stock_warehouse_a: stock_a,
            stock_warehouse_b: stock_b,
            unit_price: 100,
            rating: 4.5,
            is_new: false,
            recommendation: None,
        })
        .unwrap()
    }

    #[test]
    fn should_flag_low_stock_below_threshold() {
        assert!(is_low_stock(&product(5, 42, 8)));
        assert!(!is_low_stock(&product(3, 85, 15)));
    }

    #[test]
    fn should_rank_products_by_combined_stock() {
        let products = vec![product(1, 10, 0), product(2, 50, 50), product(3, 30, 1)];

        let ranked = top_by_stock(&products, 2);

        assert_eq!(ranked.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(products[0].id, 1);
    }
}
