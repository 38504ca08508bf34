use serde::{Deserialize, Serialize};

use super::Cents;

/// Anything that can be counted in a [`QuantityLedger`](super::QuantityLedger).
pub trait Priced {
    fn name(&self) -> &str;
    fn unit_price(&self) -> Cents;
}

/// A retail product. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price_cents: Cents,
}

impl Product {
    pub fn new(name: impl Into<String>, price_cents: Cents) -> Result<Self, PriceError> {
        Ok(Self {
            name: name.into(),
            price_cents: check_price(price_cents)?,
        })
    }
}

impl Priced for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn unit_price(&self) -> Cents {
        self.price_cents
    }
}

/// A dish on a restaurant menu. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FoodItem {
    name: String,
    price_cents: Cents,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, price_cents: Cents) -> Result<Self, PriceError> {
        Ok(Self {
            name: name.into(),
            price_cents: check_price(price_cents)?,
        })
    }
}

impl Priced for FoodItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn unit_price(&self) -> Cents {
        self.price_cents
    }
}

fn check_price(price_cents: Cents) -> Result<Cents, PriceError> {
    if price_cents < 0 {
        return Err(PriceError::Negative(price_cents));
    }
    Ok(price_cents)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    Negative(Cents),
}

impl std::fmt::Display for PriceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceError::Negative(cents) => {
                write!(f, "Unit price cannot be negative ({} cents)", cents)
            }
        }
    }
}

impl std::error::Error for PriceError {}
