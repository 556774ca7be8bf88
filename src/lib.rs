pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{CatalogSettings, PriceDropMode, RepriceRequest};
pub use crate::core::{
    catalog::Catalog,
    loader::{load_categories, parse_categories},
};
pub use domain::{
    category::Category,
    counters::CatalogCounters,
    iterator::CategoryIterator,
    model::{LawnGrassSpec, PriceChange, Product, ProductKind, SmartphoneSpec},
    order::Order,
    price::Price,
};
pub use utils::error::{CatalogError, Result};
