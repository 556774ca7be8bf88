use crate::domain::ports::{Notifier, PricePrompt};
use crate::domain::price::Price;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_positive_price, validate_positive_quantity};
use serde_json::{Map, Value};
use std::fmt;

pub const CURRENCY_SUFFIX: &str = "руб";
pub const PRICE_DROP_QUESTION: &str =
    "Новая цена ниже старой, вы уверены в изменении цены (y/n?)";
pub const NON_POSITIVE_PRICE_NOTICE: &str = "Цена не должна быть нулевая или отрицательная";
pub const CHANGE_DECLINED_NOTICE: &str = "Изменения не применены";

#[derive(Debug, Clone, PartialEq)]
pub struct SmartphoneSpec {
    pub efficiency: f64,
    pub model: String,
    /// Storage in GB.
    pub memory: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LawnGrassSpec {
    pub country: String,
    pub germination_period: String,
    pub color: String,
}

/// Product variant. Two products can only be combined when their kinds match.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKind {
    Generic,
    Smartphone(SmartphoneSpec),
    LawnGrass(LawnGrassSpec),
}

impl ProductKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ProductKind::Generic => "product",
            ProductKind::Smartphone(_) => "smartphone",
            ProductKind::LawnGrass(_) => "lawn_grass",
        }
    }
}

/// Outcome of a guarded price update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceChange {
    Applied,
    RejectedNonPositive,
    Declined,
}

impl PriceChange {
    pub fn is_applied(self) -> bool {
        self == PriceChange::Applied
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    description: String,
    price: Price,
    quantity: u32,
    kind: ProductKind,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Price>,
        quantity: i64,
    ) -> Result<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::Generic)
    }

    pub fn smartphone(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Price>,
        quantity: i64,
        spec: SmartphoneSpec,
    ) -> Result<Self> {
        Self::with_kind(
            name,
            description,
            price,
            quantity,
            ProductKind::Smartphone(spec),
        )
    }

    pub fn lawn_grass(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Price>,
        quantity: i64,
        spec: LawnGrassSpec,
    ) -> Result<Self> {
        Self::with_kind(
            name,
            description,
            price,
            quantity,
            ProductKind::LawnGrass(spec),
        )
    }

    pub fn with_kind(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Price>,
        quantity: i64,
        kind: ProductKind,
    ) -> Result<Self> {
        let price = price.into();
        validate_positive_price("price", price.value())?;
        let quantity = validate_positive_quantity("quantity", quantity)?;

        let product = Self {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
            kind,
        };
        tracing::debug!(kind = product.kind.tag(), name = %product.name, "product created");
        Ok(product)
    }

    /// Builds a generic product from a `name`/`description`/`price`/`quantity` map.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self> {
        let name = string_field(fields, "name")?;
        let description = string_field(fields, "description")?;
        let price = match field(fields, "price")? {
            Value::Number(number) => Price::from_json(number),
            _ => None,
        }
        .ok_or_else(|| {
            CatalogError::InvalidFieldTypeError {
                field: "price".to_string(),
                expected: "number".to_string(),
            }
        })?;
        let quantity = field(fields, "quantity")?.as_i64().ok_or_else(|| {
            CatalogError::InvalidFieldTypeError {
                field: "quantity".to_string(),
                expected: "integer".to_string(),
            }
        })?;

        Self::new(name, description, price, quantity)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price.value()
    }

    /// The price as written, for display.
    pub fn listed_price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Updates the price. Non-positive prices are refused; a decrease is only
    /// applied when `prompt` answers "y".
    pub fn set_price(
        &mut self,
        new_price: impl Into<Price>,
        prompt: &mut dyn PricePrompt,
        notifier: &dyn Notifier,
    ) -> PriceChange {
        let new_price = new_price.into();
        // NaN falls through here too
        if !(new_price.value() > 0.0) {
            notifier.notify(NON_POSITIVE_PRICE_NOTICE);
            return PriceChange::RejectedNonPositive;
        }

        if new_price.value() < self.price.value() {
            let answer = prompt.ask(PRICE_DROP_QUESTION);
            if answer.trim() != "y" {
                notifier.notify(CHANGE_DECLINED_NOTICE);
                return PriceChange::Declined;
            }
        }

        tracing::debug!(name = %self.name, old = %self.price, new = %new_price, "price updated");
        self.price = new_price;
        PriceChange::Applied
    }

    /// Price times stock on hand.
    pub fn total_value(&self) -> f64 {
        self.price.times(self.quantity).value()
    }

    /// Sum of both products' total values. Only products of the same kind combine.
    pub fn combine(&self, other: &Product) -> Result<f64> {
        if self.kind.tag() != other.kind.tag() {
            return Err(CatalogError::TypeIncompatibleError {
                left: self.kind.tag().to_string(),
                right: other.kind.tag().to_string(),
            });
        }
        Ok(self.total_value() + other.total_value())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {}. Остаток: {} шт.",
            self.name,
            self.price,
            CURRENCY_SUFFIX,
            self.quantity
        )
    }
}

fn field<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    fields
        .get(key)
        .ok_or_else(|| CatalogError::missing_field(key))
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Result<String> {
    field(fields, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| CatalogError::InvalidFieldTypeError {
            field: key.to_string(),
            expected: "string".to_string(),
        })
}
