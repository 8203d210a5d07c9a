use super::errors::ProductError;
use super::value_objects::Warehouse;
use crate::domain::shared::value_objects::Amount;

pub type ProductId = u32;

/// A catalog entry together with its stock in both warehouses.
///
/// Stock figures are a snapshot: they never change while a cart is being
/// split against them.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub article_code: String,
    pub stock_warehouse_a: u32,
    pub stock_warehouse_b: u32,
    pub unit_price: Amount,
    pub rating: f32,
    pub is_new: bool,
    pub recommendation: Option<String>,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub article_code: String,
    pub stock_warehouse_a: u32,
    pub stock_warehouse_b: u32,
    pub unit_price: Amount,
    pub rating: f32,
    pub is_new: bool,
    pub recommendation: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.article_code.trim().is_empty() {
            return Err(ProductError::ArticleCodeEmpty);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            article_code: props.article_code,
            stock_warehouse_a: props.stock_warehouse_a,
            stock_warehouse_b: props.stock_warehouse_b,
            unit_price: props.unit_price,
            rating: props.rating,
            is_new: props.is_new,
            recommendation: props.recommendation.filter(|r| !r.trim().is_empty()),
        })
    }

    /// Combined stock of both warehouses.
    pub fn available(&self) -> u64 {
        u64::from(self.stock_warehouse_a) + u64::from(self.stock_warehouse_b)
    }

    /// Warehouse holding more of this product. Ties go to warehouse A.
    pub fn fullest_warehouse(&self) -> Warehouse {
        if self.stock_warehouse_b > self.stock_warehouse_a {
            Warehouse::B
        } else {
            Warehouse::A
        }
    }

    /// Case-insensitive match on name or article code.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.article_code.to_lowercase().contains(&query)
    }

    /// Carries a restock note from the supplier.
    pub fn needs_attention(&self) -> bool {
        self.recommendation.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(stock_a: u32, stock_b: u32) -> NewProductProps {
        NewProductProps {
            id: 1,
            name: "MANNOL 5W-40 Extreme".to_string(),
            article_code: "MN7909-4".to_string(),
            stock_warehouse_a: stock_a,
            stock_warehouse_b: stock_b,
            unit_price: 8500,
            rating: 4.8,
            is_new: true,
            recommendation: None,
        }
    }

    #[test]
    fn should_create_product_when_valid() {
        let product = Product::new(props(1200, 450)).unwrap();

        assert_eq!(product.name, "MANNOL 5W-40 Extreme");
        assert_eq!(product.available(), 1650);
    }

    #[test]
    fn should_reject_product_when_name_is_empty() {
        let mut p = props(1, 1);
        p.name = "  ".to_string();

        assert!(matches!(Product::new(p), Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_product_when_article_code_is_empty() {
        let mut p = props(1, 1);
        p.article_code = "".to_string();

        assert!(matches!(
            Product::new(p),
            Err(ProductError::ArticleCodeEmpty)
        ));
    }

    #[test]
    fn should_drop_blank_recommendation() {
        let mut p = props(1, 1);
        p.recommendation = Some("".to_string());

        let product = Product::new(p).unwrap();
        assert!(!product.needs_attention());
    }

    #[test]
    fn should_not_overflow_when_summing_large_stock() {
        let product = Product::new(props(u32::MAX, u32::MAX)).unwrap();

        assert_eq!(product.available(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn should_pick_warehouse_with_more_stock() {
        assert_eq!(
            Product::new(props(10, 20)).unwrap().fullest_warehouse(),
            Warehouse::B
        );
        assert_eq!(
            Product::new(props(42, 8)).unwrap().fullest_warehouse(),
            Warehouse::A
        );
    }

    #[test]
    fn should_prefer_warehouse_a_on_tie() {
        let product = Product::new(props(5, 5)).unwrap();

        assert_eq!(product.fullest_warehouse(), Warehouse::A);
    }

    #[test]
    fn should_match_name_or_article_ignoring_case() {
        let product = Product::new(props(1, 1)).unwrap();

        assert!(product.matches("extreme"));
        assert!(product.matches("mn7909"));
        assert!(product.matches(""));
        assert!(!product.matches("antifreeze"));
    }
}
