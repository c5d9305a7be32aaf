//! In-memory order composition.
//!
//! A draft holds the line items a partner has picked so far. Items are
//! keyed by product id: re-adding a product merges quantities instead of
//! appending a duplicate row, and totals are recomputed on every mutation.

use crate::errors::ServiceError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A line in an in-progress order draft.
///
/// `total_price` always equals `quantity * unit_price`; the draft
/// recomputes it whenever the quantity changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftItem {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

/// Input for adding a product to a draft.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddItemInput {
    pub product_id: i32,
    pub product_name: String,
    pub unit_price: Decimal,
    #[validate(range(min = 1, message = "Quantity must be a positive integer"))]
    pub quantity: i32,
}

/// An order being composed in memory, scoped to one user session.
///
/// Insertion order of distinct products is preserved. Not designed for
/// concurrent mutation; the `&mut self` API keeps a draft single-owner.
/// The draft is discarded on cancel or superseded by persisted rows on a
/// successful commit.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    items: Vec<DraftItem>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product to the draft, merging with the existing line when the
    /// product is already present.
    pub fn add_item(&mut self, input: AddItemInput) -> Result<(), ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == input.product_id)
        {
            item.quantity += input.quantity;
            item.total_price = item.unit_price * Decimal::from(item.quantity);
        } else {
            let total_price = input.unit_price * Decimal::from(input.quantity);
            self.items.push(DraftItem {
                product_id: input.product_id,
                product_name: input.product_name,
                quantity: input.quantity,
                unit_price: input.unit_price,
                total_price,
            });
        }

        Ok(())
    }

    /// Removes the line for `product_id`. Removing an absent product is a
    /// no-op, not an error.
    pub fn remove_item(&mut self, product_id: i32) {
        self.items.retain(|item| item.product_id != product_id);
    }

    /// Running total over all lines; zero for an empty draft.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.total_price).sum()
    }

    pub fn items(&self) -> &[DraftItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Discards every line, e.g. when the user cancels the draft.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
