use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{Cents, Priced, Product, Quantity, QuantityLedger};

use super::AppError;

pub type ShoppingCart = QuantityLedger<Product>;

/// A shopper with their own cart.
#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub email: String,
    cart: ShoppingCart,
}

/// Result of a successful checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub customer: String,
    pub lines: Vec<ReceiptLine>,
    pub total_cents: Cents,
    pub checked_out_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub item: String,
    pub unit_price: Cents,
    pub quantity: Quantity,
    pub line_total: Cents,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            cart: ShoppingCart::new(),
        }
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> Result<(), AppError> {
        self.cart.add(product.clone(), quantity)?;
        Ok(())
    }

    pub fn remove_from_cart(&mut self, product: &Product, quantity: i64) -> Result<(), AppError> {
        self.cart.remove(product, quantity)?;
        Ok(())
    }

    /// Settle the cart. An empty (or zero-valued) cart is left as is.
    pub fn checkout(&mut self) -> Result<Receipt, AppError> {
        let total_cents = self.cart.total_value();
        if total_cents <= 0 {
            warn!(customer = %self.name, "checkout with empty cart");
            return Err(AppError::EmptyCart);
        }

        let lines = self
            .cart
            .iter()
            .map(|(product, quantity)| ReceiptLine {
                item: product.name().to_string(),
                unit_price: product.unit_price(),
                quantity,
                line_total: product
                    .unit_price()
                    .saturating_mul(Cents::try_from(quantity).unwrap_or(Cents::MAX)),
            })
            .collect();

        let receipt = Receipt {
            id: Uuid::new_v4(),
            customer: self.name.clone(),
            lines,
            total_cents,
            checked_out_at: Utc::now(),
        };
        self.cart.clear();

        info!(customer = %self.name, receipt = %receipt.id, total_cents, "checked out");
        Ok(receipt)
    }
}
