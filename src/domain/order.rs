use crate::domain::model::Product;
use crate::domain::price::Price;
use crate::domain::ports::ItemContainer;
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_quantity;
use std::fmt;

/// A purchase of one product in some quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    product: Product,
    quantity: u32,
}

impl Order {
    pub fn new(product: Product, quantity: i64) -> Result<Self> {
        let quantity = validate_positive_quantity("order.quantity", quantity)?;
        tracing::debug!(product = %product.name(), quantity, "order created");
        Ok(Self { product, quantity })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_price(&self) -> f64 {
        self.listed_total().value()
    }

    fn listed_total(&self) -> Price {
        self.product.listed_price().times(self.quantity)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Заказ: {}, кол-во: {}, на сумму: {}",
            self.product.name(),
            self.quantity,
            self.listed_total()
        )
    }
}

impl ItemContainer for Order {
    fn items(&self) -> Vec<&Product> {
        vec![&self.product]
    }
}
