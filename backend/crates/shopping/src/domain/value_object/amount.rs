//! Quantity and Price Value Objects

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AmountError {
    #[error("Quantity must be at least 1 (got {0})")]
    QuantityTooSmall(i32),

    #[error("Price must be a finite, non-negative number (got {0})")]
    InvalidPrice(f64),
}

/// How many units of a product to buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Quantity(i32);

impl Quantity {
    pub fn new(value: i32) -> Result<Self, AmountError> {
        if value < 1 {
            return Err(AmountError::QuantityTooSmall(value));
        }
        Ok(Self(value))
    }

    pub fn from_db(value: i32) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

/// Price paid for a product, in the group's (implicit) currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() || value < 0.0 {
            return Err(AmountError::InvalidPrice(value));
        }
        Ok(Self(value))
    }

    pub fn from_db(value: f64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity() {
        assert_eq!(Quantity::new(2).unwrap().get(), 2);
        assert_eq!(Quantity::new(0), Err(AmountError::QuantityTooSmall(0)));
        assert!(Quantity::new(-3).is_err());
    }

    #[test]
    fn test_price() {
        assert_eq!(Price::new(3.5).unwrap().get(), 3.5);
        assert!(Price::new(0.0).is_ok());
        assert!(Price::new(-0.01).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }
}
