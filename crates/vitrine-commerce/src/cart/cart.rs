//! Cart store and line item types.

use crate::cart::ItemSnapshot;
use crate::ids::{ProductId, Size};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart, keyed by (product id, size).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Selected size.
    pub size: Size,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Display details captured at first add.
    pub details: ItemSnapshot,
}

impl CartLine {
    /// Line subtotal: snapshot price times quantity. A line without a
    /// snapshot price contributes zero.
    pub fn subtotal(&self, currency: Currency) -> Money {
        match self.details.price {
            Some(price) => price
                .try_multiply(self.quantity as i64)
                .unwrap_or_else(|| Money::zero(currency)),
            None => Money::zero(currency),
        }
    }
}

/// The authoritative set of cart line items for the current session.
///
/// Insertion-ordered: lines appear in first-added order. At most one
/// line exists per (product id, size) pair. All mutations are
/// synchronous with a single logical writer; aggregates (item count,
/// subtotal) are computed on demand, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of (product, size) to the cart.
    ///
    /// Both identifiers must be non-empty. If a line with the same key
    /// already exists its quantity goes up by one and the stored
    /// `details` stay as they were (a repeat add does not refresh a
    /// stale snapshot); otherwise a new line with quantity 1 is
    /// appended.
    pub fn add_item(&mut self, product_id: ProductId, size: Size, details: ItemSnapshot) {
        if let Some(line) = self.line_mut(&product_id, &size) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            product_id,
            size,
            quantity: 1,
            details,
        });
    }

    /// Remove the line for (product, size).
    ///
    /// Returns whether a line was removed; an absent key is a no-op,
    /// not an error.
    pub fn remove_item(&mut self, product_id: &ProductId, size: &Size) -> bool {
        let len_before = self.lines.len();
        self.lines
            .retain(|l| !(&l.product_id == product_id && &l.size == size));
        self.lines.len() < len_before
    }

    /// Increase the quantity of (product, size) by one.
    ///
    /// Returns whether a line was updated.
    pub fn increase_quantity(&mut self, product_id: &ProductId, size: &Size) -> bool {
        match self.line_mut(product_id, size) {
            Some(line) => {
                line.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Decrease the quantity of (product, size) by one, never below 1.
    ///
    /// At quantity 1 this is a deliberate no-op: removal only happens
    /// through `remove_item`. Returns whether a line was updated.
    pub fn decrease_quantity(&mut self, product_id: &ProductId, size: &Size) -> bool {
        match self.line_mut(product_id, size) {
            Some(line) if line.quantity > 1 => {
                line.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Get the line for (product, size), if present.
    pub fn get(&self, product_id: &ProductId, size: &Size) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|l| &l.product_id == product_id && &l.size == size)
    }

    /// All lines, in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total item count: the sum of quantities across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cart subtotal: sum over lines of snapshot price times quantity.
    pub fn subtotal(&self, currency: Currency) -> Money {
        let mut total = Money::zero(currency);
        for line in &self.lines {
            total = total
                .try_add(&line.subtotal(currency))
                .unwrap_or(total);
        }
        total
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, product_id: &ProductId, size: &Size) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|l| &l.product_id == product_id && &l.size == size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn snapshot(name: &str, cents: i64) -> ItemSnapshot {
        ItemSnapshot::new(name, Some(usd(cents)))
    }

    #[test]
    fn test_add_item_creates_line_with_quantity_one() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 2500));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_repeat_add_increments_quantity() {
        let mut cart = CartStore::new();
        for _ in 0..3 {
            cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 2500));
        }

        assert_eq!(cart.line_count(), 1);
        let line = cart.get(&ProductId::new("p1"), &Size::new("M")).unwrap();
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_snapshot_is_first_write_wins() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 25));
        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 999));

        let line = cart.get(&ProductId::new("p1"), &Size::new("M")).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.details.price.unwrap().amount_cents, 25);
    }

    #[test]
    fn test_same_product_different_size_is_a_new_line() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 2500));
        cart.add_item(ProductId::new("p1"), Size::new("L"), snapshot("Shirt", 2500));

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 2500));

        assert!(cart.remove_item(&ProductId::new("p1"), &Size::new("M")));
        assert!(cart.is_empty());

        // Absent key is a no-op.
        assert!(!cart.remove_item(&ProductId::new("p1"), &Size::new("M")));
    }

    #[test]
    fn test_re_add_after_remove_resets_the_line() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 25));
        cart.increase_quantity(&ProductId::new("p1"), &Size::new("M"));
        cart.remove_item(&ProductId::new("p1"), &Size::new("M"));

        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 30));
        let line = cart.get(&ProductId::new("p1"), &Size::new("M")).unwrap();
        assert_eq!(line.quantity, 1);
        // Details come from the new call, not the removed line.
        assert_eq!(line.details.price.unwrap().amount_cents, 30);
    }

    #[test]
    fn test_increase_quantity() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 2500));

        assert!(cart.increase_quantity(&ProductId::new("p1"), &Size::new("M")));
        assert_eq!(cart.item_count(), 2);

        assert!(!cart.increase_quantity(&ProductId::new("missing"), &Size::new("M")));
    }

    #[test]
    fn test_decrease_quantity_floors_at_one() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 2500));
        cart.increase_quantity(&ProductId::new("p1"), &Size::new("M"));

        assert!(cart.decrease_quantity(&ProductId::new("p1"), &Size::new("M")));
        assert_eq!(cart.item_count(), 1);

        // At quantity 1 the decrease is a no-op, not a removal.
        assert!(!cart.decrease_quantity(&ProductId::new("p1"), &Size::new("M")));
        let line = cart.get(&ProductId::new("p1"), &Size::new("M")).unwrap();
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_subtotal_sums_snapshot_prices() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 1000));
        cart.increase_quantity(&ProductId::new("p1"), &Size::new("M"));
        cart.add_item(ProductId::new("p2"), Size::new("L"), snapshot("Pant", 2000));

        // 2 * 1000 + 1 * 2000
        assert_eq!(cart.subtotal(Currency::USD).amount_cents, 4000);
    }

    #[test]
    fn test_subtotal_counts_missing_price_as_zero() {
        let mut cart = CartStore::new();
        cart.add_item(
            ProductId::new("p1"),
            Size::new("M"),
            ItemSnapshot::new("Unpriced", None),
        );
        cart.add_item(ProductId::new("p2"), Size::new("L"), snapshot("Pant", 2000));

        assert_eq!(cart.subtotal(Currency::USD).amount_cents, 2000);
    }

    #[test]
    fn test_lines_keep_first_added_order() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("p2"), Size::new("L"), snapshot("Pant", 2000));
        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 1000));
        cart.add_item(ProductId::new("p2"), Size::new("L"), snapshot("Pant", 2000));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("p1"), Size::new("M"), snapshot("Shirt", 1000));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
