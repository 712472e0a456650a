//! Session-scoped cart store.
//!
//! The single source of truth for a user's selected bookings. Mutators take
//! `&mut self` (single-writer by ownership) and recompute the cached total
//! before returning, so `total` never disagrees with `items` at any
//! observable point.

use crate::cart::item::CartItem;
use crate::cart::pricing::{self, CartPricing};
use crate::error::CommerceError;
use crate::ids::ActivityId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Cart-mutation events emitted to the host.
///
/// Returned from the mutators rather than pushed through a bus; the host
/// decides what (if anything) to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    /// A new line was appended.
    ItemAdded { activity_id: ActivityId },
    /// An add for an activity already in the cart merged traveler counts
    /// into the existing line.
    ItemMerged { activity_id: ActivityId },
    /// A line was removed.
    ItemRemoved { activity_id: ActivityId },
    /// The cart was emptied.
    Cleared,
}

/// A user's cart: ordered line items plus a cached total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartStore {
    /// Line items in insertion order.
    items: Vec<CartItem>,
    /// Cached subtotal, recomputed inside every mutation.
    total: Money,
    /// Whether the cart drawer is open in the UI.
    drawer_open: bool,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total: Money::default(),
            drawer_open: false,
        }
    }

    /// Add a booking to the cart.
    ///
    /// Adding an activity that is already in the cart merges the traveler
    /// counts into the existing line and keeps the original schedule and
    /// price snapshot. The mutation is atomic: on any failure the cart is
    /// left exactly as it was.
    pub fn add_item(&mut self, item: CartItem) -> Result<CartEvent, CommerceError> {
        item.travelers.validate()?;

        if let Some(pos) = self
            .items
            .iter()
            .position(|i| i.activity_id == item.activity_id)
        {
            let merged = self.items[pos].travelers.try_merge(&item.travelers)?;
            let previous = self.items[pos].travelers;
            self.items[pos].travelers = merged;
            if let Err(e) = self.recompute() {
                self.items[pos].travelers = previous;
                return Err(e);
            }
            return Ok(CartEvent::ItemMerged {
                activity_id: item.activity_id,
            });
        }

        let activity_id = item.activity_id.clone();
        self.items.push(item);
        if let Err(e) = self.recompute() {
            self.items.pop();
            return Err(e);
        }
        Ok(CartEvent::ItemAdded { activity_id })
    }

    /// Remove all lines for an activity.
    ///
    /// Removing an id that isn't in the cart is a no-op (`Ok(None)`), not an
    /// error. The mutation is atomic: items and the cached total change
    /// together or not at all.
    pub fn remove_item(
        &mut self,
        activity_id: &ActivityId,
    ) -> Result<Option<CartEvent>, CommerceError> {
        let remaining: Vec<CartItem> = self
            .items
            .iter()
            .filter(|i| &i.activity_id != activity_id)
            .cloned()
            .collect();
        if remaining.len() == self.items.len() {
            return Ok(None);
        }
        self.total = pricing::subtotal(&remaining)?;
        self.items = remaining;
        Ok(Some(CartEvent::ItemRemoved {
            activity_id: activity_id.clone(),
        }))
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> CartEvent {
        self.items.clear();
        self.total = Money::zero(self.total.currency);
        CartEvent::Cleared
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The cached subtotal over all lines.
    pub fn total(&self) -> Money {
        self.total
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Full pricing breakdown including service fee and grand total.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        pricing::price_cart(&self.items)
    }

    /// Open the cart drawer.
    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    /// Close the cart drawer.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Toggle the cart drawer.
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Whether the cart drawer is open.
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    fn recompute(&mut self) -> Result<(), CommerceError> {
        self.total = pricing::subtotal(&self.items)?;
        Ok(())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::item::TravelerCounts;
    use crate::money::Currency;

    fn item(id: &str, price_cents: i64, adults: i64) -> CartItem {
        CartItem::new(
            ActivityId::new(id),
            "Test Activity",
            "/img/test.jpg",
            None,
            TravelerCounts::new(adults, 0, 0),
            Money::new(price_cents, Currency::USD),
        )
        .unwrap()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert!(!cart.is_drawer_open());
    }

    #[test]
    fn test_total_tracks_every_mutation() {
        let mut cart = CartStore::new();

        cart.add_item(item("act-1", 1000, 2)).unwrap();
        assert_eq!(cart.total().amount_cents, 2000);
        assert_eq!(
            cart.total(),
            pricing::subtotal(cart.items()).unwrap()
        );

        cart.add_item(item("act-2", 500, 3)).unwrap();
        assert_eq!(cart.total().amount_cents, 3500);
        assert_eq!(
            cart.total(),
            pricing::subtotal(cart.items()).unwrap()
        );

        cart.remove_item(&ActivityId::new("act-1")).unwrap();
        assert_eq!(cart.total().amount_cents, 1500);
        assert_eq!(
            cart.total(),
            pricing::subtotal(cart.items()).unwrap()
        );
    }

    #[test]
    fn test_add_emits_event() {
        let mut cart = CartStore::new();
        let event = cart.add_item(item("act-1", 1000, 1)).unwrap();
        assert_eq!(
            event,
            CartEvent::ItemAdded {
                activity_id: ActivityId::new("act-1")
            }
        );
    }

    #[test]
    fn test_duplicate_add_merges_counts() {
        let mut cart = CartStore::new();
        cart.add_item(item("act-1", 1000, 2)).unwrap();
        let event = cart.add_item(item("act-1", 1000, 1)).unwrap();

        assert_eq!(
            event,
            CartEvent::ItemMerged {
                activity_id: ActivityId::new("act-1")
            }
        );
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].travelers.adults, 3);
        assert_eq!(cart.total().amount_cents, 3000);
    }

    #[test]
    fn test_merge_keeps_original_snapshot() {
        let mut cart = CartStore::new();
        cart.add_item(item("act-1", 1000, 1)).unwrap();

        // Second add carries a different price snapshot; the first one wins.
        cart.add_item(item("act-1", 9999, 1)).unwrap();
        assert_eq!(cart.items()[0].unit_price.amount_cents, 1000);
        assert_eq!(cart.total().amount_cents, 2000);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = CartStore::new();
        cart.add_item(item("act-1", 1000, 1)).unwrap();
        let before = cart.clone();

        assert!(cart.remove_item(&ActivityId::new("act-9")).unwrap().is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_keeps_cart_currency() {
        let eur_item = |id: &str| {
            CartItem::new(
                ActivityId::new(id),
                "Test Activity",
                "/img/test.jpg",
                None,
                TravelerCounts::new(1, 0, 0),
                Money::new(1000, Currency::EUR),
            )
            .unwrap()
        };

        let mut cart = CartStore::new();
        cart.add_item(eur_item("act-1")).unwrap();
        cart.add_item(eur_item("act-2")).unwrap();

        let event = cart.remove_item(&ActivityId::new("act-1")).unwrap();
        assert_eq!(
            event,
            Some(CartEvent::ItemRemoved {
                activity_id: ActivityId::new("act-1")
            })
        );
        assert_eq!(cart.total(), Money::new(1000, Currency::EUR));
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add_item(item("act-1", 1000, 2)).unwrap();
        cart.add_item(item("act-2", 2000, 1)).unwrap();

        assert_eq!(cart.clear(), CartEvent::Cleared);
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_failed_add_leaves_cart_unchanged() {
        let mut cart = CartStore::new();
        cart.add_item(item("act-1", 1000, 1)).unwrap();
        let before = cart.clone();

        let overflow = item("act-2", i64::MAX, 2);
        assert!(cart.add_item(overflow).is_err());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartStore::new();
        cart.add_item(item("act-b", 1000, 1)).unwrap();
        cart.add_item(item("act-a", 1000, 1)).unwrap();
        cart.add_item(item("act-c", 1000, 1)).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.activity_id.as_str()).collect();
        assert_eq!(ids, vec!["act-b", "act-a", "act-c"]);
    }

    #[test]
    fn test_drawer_flag() {
        let mut cart = CartStore::new();
        cart.open_drawer();
        assert!(cart.is_drawer_open());
        cart.toggle_drawer();
        assert!(!cart.is_drawer_open());
        cart.toggle_drawer();
        cart.close_drawer();
        assert!(!cart.is_drawer_open());
    }
}
