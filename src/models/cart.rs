//! The in-memory shopping cart.
//!
//! The cart lives for the session only. Entries keep the order in which dishes
//! were first added, and there is never more than one entry per item id.

use bigdecimal::BigDecimal;
use serde::Serialize;

use super::menu_item::format_money;
use super::MenuItem;

/// A dish in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartEntry {
    /// The dish
    pub item: MenuItem,
    /// Number of portions, always at least 1
    pub quantity: u32,
    /// Optional preparation notes for the chef
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl CartEntry {
    /// Price of this entry (`price × quantity`).
    pub fn line_total(&self) -> BigDecimal {
        self.item.price_for(self.quantity)
    }
}

/// Totals reported by the checkout stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    /// Number of distinct dishes
    pub lines: usize,
    /// Total number of portions
    pub item_count: u64,
    /// Total rounded for display (e.g., "$63.00")
    pub total: String,
}

/// Dishes the user is assembling into an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds `quantity` portions of `item`.
    ///
    /// Increments the existing entry or inserts a new one. Adding zero
    /// portions does nothing. Non-empty instructions replace any previous
    /// instructions on the entry.
    pub fn add(&mut self, item: &MenuItem, quantity: u32, instructions: Option<&str>) {
        if quantity == 0 {
            return;
        }

        let instructions = instructions
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.id == item.id) {
            entry.quantity = entry.quantity.saturating_add(quantity);
            if instructions.is_some() {
                entry.instructions = instructions;
            }
        } else {
            self.entries.push(CartEntry {
                item: item.clone(),
                quantity,
                instructions,
            });
        }

        tracing::debug!(id = item.id, quantity, "added to cart");
    }

    /// Adds a single portion of `item`.
    pub fn add_one(&mut self, item: &MenuItem) {
        self.add(item, 1, None);
    }

    /// Removes one portion of the item with `id`.
    ///
    /// The entry disappears when its last portion is removed. Unknown ids are
    /// ignored.
    pub fn remove_one(&mut self, id: u32) {
        let Some(index) = self.entries.iter().position(|e| e.item.id == id) else {
            return;
        };

        if self.entries[index].quantity > 1 {
            self.entries[index].quantity -= 1;
        } else {
            self.entries.remove(index);
        }

        tracing::debug!(id, "removed one from cart");
    }

    /// Quantity in the cart for `id` (0 when absent).
    pub fn quantity_of(&self, id: u32) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item.id == id)
            .map_or(0, |e| e.quantity)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// True when the cart holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Exact sum of `price × quantity` over all entries.
    pub fn total_price(&self) -> BigDecimal {
        self.entries
            .iter()
            .fold(BigDecimal::from(0), |sum, e| sum + e.line_total())
    }

    /// Total rounded to cents for display.
    pub fn display_total(&self) -> String {
        format_money(&self.total_price())
    }

    /// Summarizes the order. Nothing is submitted and the cart is untouched.
    pub fn checkout(&self) -> CheckoutSummary {
        let summary = CheckoutSummary {
            lines: self.entries.len(),
            item_count: self.total_item_count(),
            total: self.display_total(),
        };
        tracing::info!(
            lines = summary.lines,
            items = summary.item_count,
            total = %summary.total,
            "checkout requested"
        );
        summary
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
