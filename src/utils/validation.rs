use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_price(field_name: &str, price: f64) -> Result<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(CatalogError::validation(
            field_name,
            format!("Price must be a positive number, got {}", price),
        ));
    }
    Ok(())
}

/// Quantities arrive as signed integers from JSON so that zero and negative
/// stock can be reported instead of failing deserialization.
pub fn validate_positive_quantity(field_name: &str, quantity: i64) -> Result<u32> {
    if quantity <= 0 {
        return Err(CatalogError::validation(
            field_name,
            format!("Quantity must be a positive integer, got {}", quantity),
        ));
    }
    u32::try_from(quantity).map_err(|_| {
        CatalogError::validation(field_name, format!("Quantity {} is too large", quantity))
    })
}
