use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::stock::is_low_stock;
use business::domain::product::value_objects::Warehouse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum WarehouseDto {
    #[oai(rename = "warehouse_a")]
    WarehouseA,
    #[oai(rename = "warehouse_b")]
    WarehouseB,
}

impl From<Warehouse> for WarehouseDto {
    fn from(warehouse: Warehouse) -> Self {
        match warehouse {
            Warehouse::A => WarehouseDto::WarehouseA,
            Warehouse::B => WarehouseDto::WarehouseB,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Catalog identifier
    pub id: u32,
    /// Product name
    pub name: String,
    /// Unique article code
    pub article_code: String,
    /// Units in warehouse 1
    pub stock_warehouse_a: u32,
    /// Units in warehouse 2
    pub stock_warehouse_b: u32,
    /// Units across both warehouses
    pub available: u64,
    /// Price per unit
    pub unit_price: u64,
    /// Partner rating, 0 to 5
    pub rating: f32,
    /// Recently added to the catalog
    pub is_new: bool,
    /// Combined stock is under the low-stock threshold
    pub low_stock: bool,
    /// Has a restock note and needs the partner's attention
    pub needs_attention: bool,
    /// Restock note from the supplier
    #[oai(skip_serializing_if_is_none)]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CatalogResponse {
    pub products: Vec<ProductResponse>,
    /// Products flagged as new
    pub new_count: usize,
    /// Products carrying a restock note
    pub needs_attention_count: usize,
}

impl From<Vec<Product>> for CatalogResponse {
    fn from(products: Vec<Product>) -> Self {
        let new_count = products.iter().filter(|p| p.is_new).count();
        let needs_attention_count = products.iter().filter(|p| p.needs_attention()).count();
        Self {
            products: products.into_iter().map(ProductResponse::from).collect(),
            new_count,
            needs_attention_count,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            available: product.available(),
            low_stock: is_low_stock(&product),
            needs_attention: product.needs_attention(),
            id: product.id,
            name: product.name,
            article_code: product.article_code,
            stock_warehouse_a: product.stock_warehouse_a,
            stock_warehouse_b: product.stock_warehouse_b,
            unit_price: product.unit_price,
            rating: product.rating,
            is_new: product.is_new,
            recommendation: product.recommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::NewProductProps;

    fn product(id: u32, is_new: bool, recommendation: Option<&str>) -> Product {
        Product::new(NewProductProps {
            id,
            name: "MANNOL Molibden Benzin 10W-40".to_string(),
            article_code: format!("MN1120-{}", id),
            stock_warehouse_a: 42,
            stock_warehouse_b: 8,
            unit_price: 7900,
            rating: 4.8,
            is_new,
            recommendation: recommendation.map(str::to_string),
        })
        .unwrap()
    }

    #[test]
    fn should_expose_combined_stock_and_low_stock_flag() {
        let response = ProductResponse::from(product(5, false, Some("Critical stock level!")));

        assert_eq!(response.available, 50);
        assert!(response.low_stock);
        assert!(response.needs_attention);
        assert_eq!(response.recommendation.as_deref(), Some("Critical stock level!"));
    }

    #[test]
    fn should_count_new_and_attention_products_in_catalog() {
        let catalog = CatalogResponse::from(vec![
            product(1, true, None),
            product(2, true, Some("Restock soon")),
            product(3, false, Some("Critical stock level!")),
            product(4, false, Some("  ")),
        ]);

        assert_eq!(catalog.products.len(), 4);
        assert_eq!(catalog.new_count, 2);
        assert_eq!(catalog.needs_attention_count, 2);
        assert!(!catalog.products[3].needs_attention);
    }

    #[test]
    fn should_map_warehouses() {
        assert_eq!(WarehouseDto::from(Warehouse::A), WarehouseDto::WarehouseA);
        assert_eq!(WarehouseDto::from(Warehouse::B), WarehouseDto::WarehouseB);
    }
}
