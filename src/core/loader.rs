use crate::domain::category::Category;
use crate::domain::counters::CatalogCounters;
use crate::domain::model::Product;
use crate::domain::price::Price;
use crate::utils::error::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub description: String,
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub quantity: i64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = crate::utils::error::CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self> {
        Product::new(record.name, record.description, record.price, record.quantity)
    }
}

/// Reads a JSON array of categories from `path`.
pub fn load_categories<P: AsRef<Path>>(path: P, counters: &CatalogCounters) -> Result<Vec<Category>> {
    let path = path.as_ref();
    tracing::info!("📁 Loading catalog from: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_categories(&content, counters)
}

/// Builds categories in document order. Every product is validated before any
/// category is created, so a failed load leaves `counters` untouched.
pub fn parse_categories(json: &str, counters: &CatalogCounters) -> Result<Vec<Category>> {
    let records: Vec<CategoryRecord> = serde_json::from_str(json)?;

    let mut staged = Vec::with_capacity(records.len());
    for record in records {
        let products = record
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>>>()?;
        staged.push((record.name, record.description, products));
    }

    let categories: Vec<Category> = staged
        .into_iter()
        .map(|(name, description, products)| Category::new(name, description, products, counters))
        .collect();

    tracing::info!(
        "Loaded {} categories with {} products",
        categories.len(),
        categories.iter().map(|c| c.product_list().len()).sum::<usize>()
    );
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CatalogError;

    const SAMPLE: &str = r#"[
        {
            "name": "Category 1",
            "description": "Desc 1",
            "products": [
                {"name": "Product 1", "description": "P Desc 1", "price": 1000.0, "quantity": 5},
                {"name": "Product 2", "description": "P Desc 2", "price": 2000.0, "quantity": 10}
            ]
        },
        {
            "name": "Category 2",
            "description": "Desc 2",
            "products": []
        }
    ]"#;

    #[test]
    fn test_parse_categories() {
        let counters = CatalogCounters::new();
        let categories = parse_categories(SAMPLE, &counters).unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name(), "Category 1");
        assert_eq!(categories[0].description(), "Desc 1");
        assert_eq!(categories[0].product_list().len(), 2);
        assert_eq!(categories[0].product_list()[0].name(), "Product 1");
        assert_eq!(categories[0].product_list()[1].price(), 2000.0);
        assert!(categories[1].product_list().is_empty());

        assert_eq!(counters.category_count(), 2);
        assert_eq!(counters.product_count(), 2);
    }

    #[test]
    fn test_integer_prices_render_without_decimals() {
        let json = r#"[{"name": "Cat", "description": "D", "products": [
            {"name": "P1", "description": "D1", "price": 100, "quantity": 1},
            {"name": "P2", "description": "D2", "price": 200.0, "quantity": 2}
        ]}]"#;
        let categories = parse_categories(json, &CatalogCounters::new()).unwrap();

        assert_eq!(
            categories[0].products_view(),
            "P1, 100 руб. Остаток: 1 шт.\nP2, 200.0 руб. Остаток: 2 шт."
        );
        assert_eq!(categories[0].average_price(), 150.0);
    }

    #[test]
    fn test_malformed_json() {
        let counters = CatalogCounters::new();
        assert!(matches!(
            parse_categories("[{", &counters),
            Err(CatalogError::SerializationError(_))
        ));
    }

    #[test]
    fn test_missing_field() {
        let json = r#"[{"name": "C", "description": "D",
            "products": [{"name": "P", "description": "D", "price": 1.0}]}]"#;
        let err = parse_categories(json, &CatalogCounters::new()).unwrap_err();
        assert!(err.to_string().contains("quantity"));
    }

    #[test]
    fn test_invalid_product_leaves_counters_untouched() {
        let json = r#"[
            {"name": "Good", "description": "D",
             "products": [{"name": "P", "description": "D", "price": 1.0, "quantity": 1}]},
            {"name": "Bad", "description": "D",
             "products": [{"name": "P", "description": "D", "price": 1.0, "quantity": 0}]}
        ]"#;
        let counters = CatalogCounters::new();

        assert!(matches!(
            parse_categories(json, &counters),
            Err(CatalogError::ValidationError { .. })
        ));
        assert_eq!(counters.category_count(), 0);
        assert_eq!(counters.product_count(), 0);
    }
}
