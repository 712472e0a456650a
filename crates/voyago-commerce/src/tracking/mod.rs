//! Booking tracking module.
//!
//! Lookup of existing bookings by confirmation code or id, over a read-only
//! record set owned by an external booking store.

mod record;
mod tracker;

pub use record::{BookingRecord, BookingStatus, PaymentStatus};
pub use tracker::{track, BookingTracker};
