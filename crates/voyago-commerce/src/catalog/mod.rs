//! Activity catalog surface.
//!
//! The catalog is owned by an external system; the core only reads from it,
//! and only for payment-deadline resolution and add-to-cart snapshots.

mod activity;

pub use activity::{Activity, ActivityKind, CatalogLookup, InMemoryCatalog};
