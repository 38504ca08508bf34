use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::{Cents, Priced};

/// A count of items held in a ledger. Always > 0; absence means zero.
pub type Quantity = u64;

/// Mapping from item to a positive quantity.
///
/// Used for shopping carts, restaurant menus and delivery carts. Rejected
/// operations return a [`LedgerError`] and leave the ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityLedger<K> {
    entries: BTreeMap<K, Quantity>,
}

impl<K> Default for QuantityLedger<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Priced + Ord> QuantityLedger<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase the stored quantity of `item` by `quantity`, inserting it if absent.
    pub fn add(&mut self, item: K, quantity: i64) -> Result<(), LedgerError> {
        let Some(quantity) = positive(quantity) else {
            warn!(item = item.name(), quantity, "rejected add: non-positive quantity");
            return Err(LedgerError::InvalidQuantity { quantity });
        };

        debug!(item = item.name(), quantity, "adding to ledger");
        let stored = self.entries.entry(item).or_insert(0);
        *stored = stored.saturating_add(quantity);
        Ok(())
    }

    /// Decrease the stored quantity of `item`.
    ///
    /// Removing at least as much as is stored deletes the entry; this is not
    /// an error.
    pub fn remove(&mut self, item: &K, quantity: i64) -> Result<(), LedgerError> {
        let Some(stored) = self.entries.get_mut(item) else {
            warn!(item = item.name(), "rejected remove: item not found");
            return Err(LedgerError::ItemNotFound {
                item: item.name().to_string(),
            });
        };

        let Some(quantity) = positive(quantity) else {
            warn!(item = item.name(), quantity, "rejected remove: non-positive quantity");
            return Err(LedgerError::InvalidQuantity { quantity });
        };

        if *stored <= quantity {
            debug!(item = item.name(), "removing entry from ledger");
            self.entries.remove(item);
        } else {
            *stored -= quantity;
        }
        Ok(())
    }

    /// Sum of unit price times stored quantity. Zero for an empty ledger.
    pub fn total_value(&self) -> Cents {
        self.entries.iter().fold(0, |total: Cents, (item, quantity)| {
            let quantity = Cents::try_from(*quantity).unwrap_or(Cents::MAX);
            total.saturating_add(item.unit_price().saturating_mul(quantity))
        })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn quantity_of(&self, item: &K) -> Quantity {
        self.entries.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &K) -> bool {
        self.entries.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by item.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Quantity)> {
        self.entries.iter().map(|(item, quantity)| (item, *quantity))
    }
}

fn positive(quantity: i64) -> Option<Quantity> {
    Quantity::try_from(quantity).ok().filter(|q| *q > 0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    InvalidQuantity { quantity: i64 },
    ItemNotFound { item: String },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::InvalidQuantity { quantity } => {
                write!(f, "Invalid quantity {}: quantity must be positive", quantity)
            }
            LedgerError::ItemNotFound { item } => write!(f, "{} not found", item),
        }
    }
}

impl std::error::Error for LedgerError {}
