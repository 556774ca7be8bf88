use crate::core::loader;
use crate::domain::category::Category;
use crate::domain::counters::CatalogCounters;
use crate::domain::model::{PriceChange, Product};
use crate::domain::ports::{Notifier, PricePrompt};
use crate::domain::price::Price;
use crate::utils::error::{CatalogError, Result};
use std::path::Path;

/// Owns the loaded categories and the counters they report into.
#[derive(Debug, Default)]
pub struct Catalog {
    counters: CatalogCounters,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let counters = CatalogCounters::new();
        let categories = loader::load_categories(path, &counters)?;
        Ok(Self {
            counters,
            categories,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let counters = CatalogCounters::new();
        let categories = loader::parse_categories(json, &counters)?;
        Ok(Self {
            counters,
            categories,
        })
    }

    pub fn create_category(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        products: Vec<Product>,
    ) -> &mut Category {
        let index = self.categories.len();
        self.categories
            .push(Category::new(name, description, products, &self.counters));
        &mut self.categories[index]
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name() == name)
    }

    pub fn counters(&self) -> &CatalogCounters {
        &self.counters
    }

    /// First product with this name, searching categories in load order.
    pub fn find_product_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.categories
            .iter_mut()
            .find_map(|category| category.product_mut(name))
    }

    pub fn reprice(
        &mut self,
        product_name: &str,
        new_price: impl Into<Price>,
        prompt: &mut dyn PricePrompt,
        notifier: &dyn Notifier,
    ) -> Result<PriceChange> {
        let product = self
            .find_product_mut(product_name)
            .ok_or_else(|| CatalogError::ProductNotFoundError {
                name: product_name.to_string(),
            })?;
        let outcome = product.set_price(new_price, prompt, notifier);
        tracing::info!(product = product_name, ?outcome, "reprice requested");
        Ok(outcome)
    }
}
