use serde::{Deserialize, Deserializer};
use std::fmt;

/// A price together with how it was written.
///
/// Catalog data mixes `100` and `100.0`; descriptions echo the price back the
/// same way, so whole-number input stays `100` and decimal input stays `100.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price {
    value: f64,
    integral: bool,
}

impl Price {
    pub fn decimal(value: f64) -> Self {
        Self {
            value,
            integral: false,
        }
    }

    pub fn integral(value: i64) -> Self {
        Self {
            value: value as f64,
            integral: true,
        }
    }

    /// Integers keep the integral form, everything else is decimal.
    pub fn from_json(number: &serde_json::Number) -> Option<Self> {
        if let Some(value) = number.as_i64() {
            return Some(Self::integral(value));
        }
        number.as_f64().map(Self::decimal)
    }

    pub fn value(self) -> f64 {
        self.value
    }

    pub fn is_integral(self) -> bool {
        self.integral
    }

    /// Price of `quantity` units; integral prices stay integral.
    pub fn times(self, quantity: u32) -> Self {
        Self {
            value: self.value * f64::from(quantity),
            integral: self.integral,
        }
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self::decimal(value)
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self::integral(value)
    }
}

impl From<i32> for Price {
    fn from(value: i32) -> Self {
        Self::integral(i64::from(value))
    }
}

impl From<u32> for Price {
    fn from(value: u32) -> Self {
        Self::integral(i64::from(value))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.value.fract() == 0.0 && self.value.abs() < 1e15;
        match (self.integral, whole) {
            (true, true) => write!(f, "{}", self.value as i64),
            (false, true) => write!(f, "{:.1}", self.value),
            _ => write!(f, "{}", self.value),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        Price::from_json(&number)
            .ok_or_else(|| serde::de::Error::custom(format!("unsupported price {}", number)))
    }
}
