//! Commerce error types.

use crate::checkout::TravelerField;
use thiserror::Error;

/// Errors that can occur in booking-storefront operations.
///
/// Validation failures, empty tracking queries, and authorization
/// preconditions are user-correctable and returned as values; `Overflow` and
/// `CurrencyMismatch` indicate a programming defect upstream (e.g. pricing a
/// cart whose snapshots were never validated) and are surfaced loudly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Traveler counts are unusable: a negative count, or no travelers at all.
    #[error("invalid traveler counts: adults {adults}, children {children}, infants {infants}")]
    InvalidQuantity {
        adults: i64,
        children: i64,
        infants: i64,
    },

    /// A traveler-details field failed validation; checkout does not advance.
    #[error("validation failed for field: {field}")]
    ValidationError { field: TravelerField },

    /// Checkout was entered without an authenticated user.
    #[error("authentication required to begin checkout")]
    AuthenticationRequired,

    /// Invalid checkout state transition.
    #[error("invalid checkout transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// A booking-tracking query was empty after trimming.
    #[error("tracking query is empty")]
    EmptyQuery,

    /// Currency mismatch in a money operation.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a money calculation.
    #[error("arithmetic overflow in money calculation")]
    Overflow,
}
