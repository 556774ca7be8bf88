pub mod toml_config;

use crate::domain::price::Price;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_path, validate_positive_price, Validate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use toml_config::CatalogConfig;

#[cfg(feature = "cli")]
use clap::Parser;

/// How a requested price decrease gets answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PriceDropMode {
    /// Ask on the terminal.
    #[default]
    Prompt,
    Accept,
    Decline,
}

/// `PRODUCT=PRICE`, split on the last `=` so product names may contain one.
#[derive(Debug, Clone, PartialEq)]
pub struct RepriceRequest {
    pub product: String,
    pub price: Price,
}

impl FromStr for RepriceRequest {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| CatalogError::InvalidConfigValueError {
            field: "reprice".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (product, price) = s
            .rsplit_once('=')
            .ok_or_else(|| invalid("expected PRODUCT=PRICE"))?;
        let product = product.trim();
        if product.is_empty() {
            return Err(invalid("product name is empty"));
        }
        let price = price.trim();
        let price = match price.parse::<i64>() {
            Ok(whole) => Price::integral(whole),
            Err(_) => price
                .parse::<f64>()
                .map(Price::decimal)
                .map_err(|_| invalid("price is not a number"))?,
        };

        Ok(Self {
            product: product.to_string(),
            price,
        })
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-catalog")]
#[command(about = "Load a product catalog from JSON and report on it")]
pub struct CliConfig {
    /// Path to the JSON catalog (overrides the config file)
    #[arg(long)]
    pub data: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Change a product price before reporting, as PRODUCT=PRICE (repeatable)
    #[arg(long = "reprice")]
    pub reprice: Vec<RepriceRequest>,

    /// How to answer price decreases
    #[arg(long, value_enum)]
    pub price_drops: Option<PriceDropMode>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// Effective settings: command line over config file over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSettings {
    pub data_path: String,
    pub price_drops: PriceDropMode,
    pub reprice: Vec<RepriceRequest>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl CatalogSettings {
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            data_path: config.data_path().to_string(),
            price_drops: config.price_drops(),
            reprice: Vec::new(),
            verbose: config.verbose(),
            json_logs: config.json_logs(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file_config = match &cli.config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::default(),
        };

        let mut settings = Self::from_config(&file_config);
        if let Some(data) = &cli.data {
            settings.data_path = data.clone();
        }
        if let Some(mode) = cli.price_drops {
            settings.price_drops = mode;
        }
        settings.reprice = cli.reprice.clone();
        settings.verbose |= cli.verbose;
        settings.json_logs |= cli.json_logs;
        Ok(settings)
    }
}

impl Validate for CatalogSettings {
    fn validate(&self) -> Result<()> {
        validate_path("data_path", &self.data_path)?;
        for request in &self.reprice {
            validate_positive_price("reprice", request.price.value()).map_err(|_| {
                CatalogError::InvalidConfigValueError {
                    field: "reprice".to_string(),
                    value: format!("{}={}", request.product, request.price),
                    reason: "price must be positive".to_string(),
                }
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reprice_request() {
        let request: RepriceRequest = "Iphone 15=190000".parse().unwrap();
        assert_eq!(request.product, "Iphone 15");
        assert_eq!(request.price, Price::integral(190000));

        let request: RepriceRequest = "a=b=2.5".parse().unwrap();
        assert_eq!(request.product, "a=b");
        assert_eq!(request.price, Price::decimal(2.5));

        assert!("no-separator".parse::<RepriceRequest>().is_err());
        assert!("=10".parse::<RepriceRequest>().is_err());
        assert!("Phone=cheap".parse::<RepriceRequest>().is_err());
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = CatalogSettings::from_config(&CatalogConfig::default());
        assert!(settings.validate().is_ok());

        settings.reprice.push(RepriceRequest {
            product: "P".to_string(),
            price: Price::decimal(-1.0),
        });
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_defaults() {
        let cli = CliConfig::parse_from([
            "small-catalog",
            "--data",
            "catalog.json",
            "--price-drops",
            "accept",
            "--reprice",
            "Iphone 15=1000",
            "--verbose",
        ]);
        let settings = CatalogSettings::resolve(&cli).unwrap();

        assert_eq!(settings.data_path, "catalog.json");
        assert_eq!(settings.price_drops, PriceDropMode::Accept);
        assert_eq!(settings.reprice.len(), 1);
        assert!(settings.verbose);
        assert!(!settings.json_logs);
    }
}
