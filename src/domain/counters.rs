use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Running totals of categories created and products registered.
///
/// Cloning yields another handle to the same totals, so every category built
/// from one handle reports into the same place.
#[derive(Debug, Clone, Default)]
pub struct CatalogCounters {
    inner: Arc<CounterState>,
}

#[derive(Debug, Default)]
struct CounterState {
    categories: AtomicUsize,
    products: AtomicUsize,
}

impl CatalogCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category_count(&self) -> usize {
        self.inner.categories.load(Ordering::Relaxed)
    }

    pub fn product_count(&self) -> usize {
        self.inner.products.load(Ordering::Relaxed)
    }

    pub(crate) fn record_category(&self) {
        self.inner.categories.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_products(&self, count: usize) {
        self.inner.products.fetch_add(count, Ordering::Relaxed);
    }
}
