//! Shopping cart module.
//!
//! Contains types for cart items, the session-scoped cart store, and pricing.

mod item;
mod pricing;
mod store;

pub use item::{BookingSchedule, CartItem, TravelerCounts};
pub use pricing::{
    grand_total, line_total, price_cart, service_fee, subtotal, CartPricing, LinePricing,
    SERVICE_FEE_RATE,
};
pub use store::{CartEvent, CartStore};
