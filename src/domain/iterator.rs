use crate::domain::category::Category;
use crate::domain::model::Product;

/// Single-pass cursor over a category's products. Build a new one to restart.
#[derive(Debug, Clone)]
pub struct CategoryIterator<'a> {
    category: &'a Category,
    index: usize,
}

impl<'a> CategoryIterator<'a> {
    pub fn new(category: &'a Category) -> Self {
        Self { category, index: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.category.product_list().len()
    }
}

impl<'a> Iterator for CategoryIterator<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        let product = self.category.product_list().get(self.index)?;
        self.index += 1;
        Some(product)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.category.product_list().len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CategoryIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::counters::CatalogCounters;

    fn category() -> Category {
        Category::new(
            "Test Category",
            "Test Description",
            vec![
                Product::new("Product 1", "Desc 1", 100.0, 2).unwrap(),
                Product::new("Product 2", "Desc 2", 200.0, 5).unwrap(),
            ],
            &CatalogCounters::new(),
        )
    }

    #[test]
    fn test_yields_in_insertion_order_then_stops() {
        let category = category();
        let mut iterator = CategoryIterator::new(&category);

        assert!(iterator.has_next());
        assert_eq!(iterator.next().map(Product::name), Some("Product 1"));
        assert_eq!(iterator.next().map(Product::name), Some("Product 2"));
        assert!(!iterator.has_next());
        assert!(iterator.next().is_none());
        assert!(iterator.next().is_none());
    }

    #[test]
    fn test_collects_all_products() {
        let category = category();
        let names: Vec<&str> = category.iter().map(Product::name).collect();
        assert_eq!(names, vec!["Product 1", "Product 2"]);
        assert_eq!(category.iter().len(), 2);
    }

    #[test]
    fn test_empty_category() {
        let category = Category::new("Empty", "D", Vec::new(), &CatalogCounters::new());
        let mut iterator = category.iter();
        assert!(!iterator.has_next());
        assert!(iterator.next().is_none());
    }

    #[test]
    fn test_for_loop_over_category() {
        let category = category();
        let mut total = 0.0;
        for product in &category {
            total += product.total_value();
        }
        assert_eq!(total, 100.0 * 2.0 + 200.0 * 5.0);
    }
}
