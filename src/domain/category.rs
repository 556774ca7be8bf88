use crate::domain::counters::CatalogCounters;
use crate::domain::iterator::CategoryIterator;
use crate::domain::model::Product;
use crate::domain::ports::ItemContainer;
use std::any::{type_name, Any};
use std::fmt;

/// A named group of products. Products are only ever appended.
#[derive(Debug)]
pub struct Category {
    name: String,
    description: String,
    products: Vec<Product>,
    counters: CatalogCounters,
}

impl Category {
    /// Registers the category and every initial product with `counters`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        products: Vec<Product>,
        counters: &CatalogCounters,
    ) -> Self {
        counters.record_category();
        counters.record_products(products.len());

        let category = Self {
            name: name.into(),
            description: description.into(),
            products,
            counters: counters.clone(),
        };
        tracing::debug!(
            name = %category.name,
            products = category.products.len(),
            "category created"
        );
        category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Appends `candidate` when it is a [`Product`]; any other value is ignored
    /// without error. Returns whether the product was added.
    pub fn add_product<T: Any>(&mut self, candidate: T) -> bool {
        let candidate: Box<dyn Any> = Box::new(candidate);
        match candidate.downcast::<Product>() {
            Ok(product) => {
                self.products.push(*product);
                self.counters.record_products(1);
                true
            }
            Err(_) => {
                tracing::debug!(
                    category = %self.name,
                    candidate = type_name::<T>(),
                    "ignoring non-product value"
                );
                false
            }
        }
    }

    /// One describe line per product, in insertion order.
    pub fn products_view(&self) -> String {
        self.products
            .iter()
            .map(Product::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn product_list(&self) -> &[Product] {
        &self.products
    }

    /// Mutable access to a single product, e.g. for a price change. The list
    /// itself stays append-only.
    pub fn product_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.name() == name)
    }

    /// Mean product price, or 0 for an empty category.
    pub fn average_price(&self) -> f64 {
        if self.products.is_empty() {
            return 0.0;
        }
        let total: f64 = self.products.iter().map(Product::price).sum();
        total / self.products.len() as f64
    }

    /// Units in stock across all products.
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity())).sum()
    }

    pub fn iter(&self) -> CategoryIterator<'_> {
        CategoryIterator::new(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, количество продуктов: {}.",
            self.name,
            self.total_quantity()
        )
    }
}

impl ItemContainer for Category {
    fn items(&self) -> Vec<&Product> {
        self.products.iter().collect()
    }
}

impl<'a> IntoIterator for &'a Category {
    type Item = &'a Product;
    type IntoIter = CategoryIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
