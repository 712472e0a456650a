//! Cart pricing calculations.
//!
//! Pure functions over cart contents; no store, no clock, no side effects.
//! The cart store calls these after every mutation, and checkout calls them
//! for the completion total.

use crate::cart::item::CartItem;
use crate::error::CommerceError;
use crate::ids::ActivityId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Service fee applied to the cart subtotal (5%).
pub const SERVICE_FEE_RATE: f64 = 0.05;

/// Line total for one item: unit price times total travelers.
///
/// Fails with `InvalidQuantity` if any count is negative or all are zero.
pub fn line_total(item: &CartItem) -> Result<Money, CommerceError> {
    item.travelers.validate()?;
    item.unit_price
        .try_multiply(item.total_travelers())
        .ok_or(CommerceError::Overflow)
}

/// Subtotal over a sequence of items; zero for an empty sequence.
pub fn subtotal(items: &[CartItem]) -> Result<Money, CommerceError> {
    let currency = items
        .first()
        .map(|i| i.unit_price.currency)
        .unwrap_or_default();
    let mut acc = Money::zero(currency);
    for item in items {
        let line = line_total(item)?;
        if line.currency != acc.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: acc.currency.code().to_string(),
                got: line.currency.code().to_string(),
            });
        }
        acc = acc.try_add(&line).ok_or(CommerceError::Overflow)?;
    }
    Ok(acc)
}

/// Service fee on a subtotal, at [`SERVICE_FEE_RATE`].
pub fn service_fee(subtotal: Money) -> Money {
    subtotal.fraction(SERVICE_FEE_RATE)
}

/// Grand total: subtotal plus fee.
pub fn grand_total(subtotal: Money, fee: Money) -> Result<Money, CommerceError> {
    subtotal.try_add(&fee).ok_or(CommerceError::Overflow)
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Service fee on the subtotal.
    pub service_fee: Money,
    /// Subtotal plus fee.
    pub grand_total: Money,
    /// Per-line breakdown, in cart order.
    pub line_items: Vec<LinePricing>,
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Activity the line books.
    pub activity_id: ActivityId,
    /// Price per traveler.
    pub unit_price: Money,
    /// Travelers on the line.
    pub travelers: i64,
    /// Line total.
    pub total: Money,
}

/// Price a full cart: per-line totals plus subtotal, fee, and grand total.
pub fn price_cart(items: &[CartItem]) -> Result<CartPricing, CommerceError> {
    let mut line_items = Vec::with_capacity(items.len());
    for item in items {
        line_items.push(LinePricing {
            activity_id: item.activity_id.clone(),
            unit_price: item.unit_price,
            travelers: item.total_travelers(),
            total: line_total(item)?,
        });
    }

    let subtotal = subtotal(items)?;
    let fee = service_fee(subtotal);
    let grand = grand_total(subtotal, fee)?;

    Ok(CartPricing {
        subtotal,
        service_fee: fee,
        grand_total: grand,
        line_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::item::TravelerCounts;
    use crate::money::Currency;

    fn item(id: &str, price_cents: i64, adults: i64, children: i64, infants: i64) -> CartItem {
        CartItem::new(
            ActivityId::new(id),
            "Test Activity",
            "/img/test.jpg",
            None,
            TravelerCounts::new(adults, children, infants),
            Money::new(price_cents, Currency::USD),
        )
        .unwrap()
    }

    #[test]
    fn test_line_total() {
        // price=100, adults=2, children=1, infants=0 -> 300
        let i = item("act-1", 10000, 2, 1, 0);
        assert_eq!(line_total(&i).unwrap().amount_cents, 30000);
    }

    #[test]
    fn test_line_total_rejects_bad_counts() {
        let mut i = item("act-1", 10000, 1, 0, 0);
        i.travelers.adults = 0;
        assert!(matches!(
            line_total(&i),
            Err(CommerceError::InvalidQuantity { .. })
        ));

        i.travelers = TravelerCounts::new(2, -1, 0);
        assert!(line_total(&i).is_err());
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let pricing = price_cart(&[]).unwrap();
        assert!(pricing.subtotal.is_zero());
        assert!(pricing.service_fee.is_zero());
        assert!(pricing.grand_total.is_zero());
        assert!(pricing.line_items.is_empty());
    }

    #[test]
    fn test_single_item_scenario() {
        // Subtotal 300, fee 15, grand total 315.
        let items = vec![item("act-1", 10000, 2, 1, 0)];
        let pricing = price_cart(&items).unwrap();
        assert_eq!(pricing.subtotal.amount_cents, 30000);
        assert_eq!(pricing.service_fee.amount_cents, 1500);
        assert_eq!(pricing.grand_total.amount_cents, 31500);
    }

    #[test]
    fn test_grand_total_identity() {
        // grand_total(S, fee(S)) == S * 1.05 on the cent
        for cents in [0_i64, 1, 30, 999, 10000, 123456789] {
            let s = Money::new(cents, Currency::USD);
            let grand = grand_total(s, service_fee(s)).unwrap();
            let expected = (cents as f64 * 1.05).round() as i64;
            assert!(
                (grand.amount_cents - expected).abs() <= 1,
                "identity drifted for subtotal {cents}"
            );
        }
    }

    #[test]
    fn test_multi_item_subtotal() {
        let items = vec![item("act-1", 10000, 2, 0, 0), item("act-2", 2500, 1, 1, 1)];
        // 2*100 + 3*25 = 275
        assert_eq!(subtotal(&items).unwrap().amount_cents, 27500);
    }

    #[test]
    fn test_currency_mismatch_is_an_error() {
        let mut second = item("act-2", 1000, 1, 0, 0);
        second.unit_price = Money::new(1000, Currency::EUR);
        let items = vec![item("act-1", 1000, 1, 0, 0), second];
        assert!(matches!(
            subtotal(&items),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
