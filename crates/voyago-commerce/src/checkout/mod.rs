//! Checkout module.
//!
//! The two-step checkout state machine (traveler details → payment), the
//! traveler form with its validation rules, and the signals checkout emits
//! to the host.

mod session;
mod signal;
mod traveler;

pub use session::{
    payment_due_date, AuthState, CheckoutSession, CheckoutStep, PaymentType, UserProfile,
    COMPLETION_REDIRECT_DELAY_MS, DEFAULT_PAYMENT_DEADLINE_DAYS,
};
pub use signal::{BookingCompleted, CheckoutCompletion, CheckoutDenied, Notice, Redirect};
pub use traveler::{TravelerDetails, TravelerField, MIN_PHONE_LEN};
