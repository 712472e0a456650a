//! Travel-activity booking domain logic for the Voyago storefront.
//!
//! This crate is the cart/checkout state and pricing engine behind the
//! storefront UI:
//!
//! - **Catalog**: the read-only activity surface the core consumes
//! - **Cart**: bookable line items, traveler counts, pricing with service fee
//! - **Checkout**: the traveler-details → payment state machine
//! - **Tracking**: booking lookup by confirmation code or id
//!
//! The crate renders nothing and talks to no network. Hosts own a
//! [`cart::CartStore`] per user session, drive a [`checkout::CheckoutSession`]
//! through checkout, and react to the events and redirect signals the core
//! returns.
//!
//! # Example
//!
//! ```rust,ignore
//! use voyago_commerce::prelude::*;
//!
//! let mut cart = CartStore::new();
//! cart.add_item(CartItem::new(
//!     ActivityId::new("act-kayak-tour"),
//!     "Sunset Kayak Tour",
//!     "/img/kayak.jpg",
//!     None,
//!     TravelerCounts { adults: 2, children: 1, infants: 0 },
//!     Money::from_decimal(100.0, Currency::USD),
//! )?)?;
//!
//! let pricing = cart.pricing()?;
//! println!("Total: {}", pricing.grand_total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod tracking;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Activity, ActivityKind, CatalogLookup, InMemoryCatalog};

    // Cart
    pub use crate::cart::{
        BookingSchedule, CartEvent, CartItem, CartPricing, CartStore, LinePricing,
        TravelerCounts, SERVICE_FEE_RATE,
    };

    // Checkout
    pub use crate::checkout::{
        AuthState, BookingCompleted, CheckoutCompletion, CheckoutDenied, CheckoutSession,
        CheckoutStep, Notice, PaymentType, Redirect, TravelerDetails, TravelerField,
        UserProfile,
    };

    // Tracking
    pub use crate::tracking::{
        track, BookingRecord, BookingStatus, BookingTracker, PaymentStatus,
    };
}
