//! Signals checkout emits to the host.
//!
//! The core renders nothing; navigation and user-facing notices are carried
//! back to the caller as values.

use crate::checkout::session::PaymentType;
use crate::checkout::traveler::TravelerField;
use crate::error::CommerceError;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    /// Target path (e.g., "/login").
    pub path: String,
    /// Query parameters as key/value pairs.
    pub query: Vec<(String, String)>,
}

impl Redirect {
    /// Redirect to a path with no query.
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Redirect to the login page, carrying the path to return to after a
    /// successful login.
    pub fn login_with_return(return_path: impl Into<String>) -> Self {
        Self {
            path: "/login".to_string(),
            query: vec![("redirect".to_string(), return_path.into())],
        }
    }

    /// Look up a query parameter.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// User-facing notice kinds the host maps to messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// Login is required before checkout.
    AuthRequired,
    /// A traveler-form field failed validation.
    ValidationFailed(TravelerField),
    /// Checkout finished and the booking was placed.
    BookingCompleted,
}

impl Notice {
    /// Map a checkout error to the notice kind to surface, if the error has
    /// a user-facing message.
    pub fn from_error(error: &CommerceError) -> Option<Notice> {
        match error {
            CommerceError::ValidationError { field } => Some(Notice::ValidationFailed(*field)),
            CommerceError::AuthenticationRequired => Some(Notice::AuthRequired),
            _ => None,
        }
    }
}

/// Why a checkout session could not be created.
///
/// Carried separately from [`crate::CommerceError`] so calling code cannot
/// proceed past an unauthenticated state by accident: there is no session
/// value at all, only the redirect to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDenied {
    /// Where to send the user.
    pub redirect: Redirect,
    /// One-time notice to surface.
    pub notice: Notice,
}

/// Event describing a completed booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingCompleted {
    /// How the traveler chose to pay.
    pub payment_type: PaymentType,
    /// Grand total at completion (subtotal plus service fee).
    pub grand_total: Money,
    /// Deadline for deferred payment; `None` when paid in full.
    pub payment_due_date: Option<NaiveDate>,
}

/// Everything `complete()` hands back to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutCompletion {
    /// The completion event for downstream collaborators.
    pub event: BookingCompleted,
    /// One-time success notice to surface.
    pub notice: Notice,
    /// Where to navigate once the settle delay has elapsed.
    pub redirect: Redirect,
    /// Settle delay before navigating, in milliseconds. A UX affordance,
    /// not a correctness requirement.
    pub settle_delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_redirect_carries_return_path() {
        let r = Redirect::login_with_return("/checkout");
        assert_eq!(r.path, "/login");
        assert_eq!(r.query_param("redirect"), Some("/checkout"));
    }

    #[test]
    fn test_notice_from_error() {
        let err = CommerceError::ValidationError {
            field: TravelerField::Email,
        };
        assert_eq!(
            Notice::from_error(&err),
            Some(Notice::ValidationFailed(TravelerField::Email))
        );
        assert_eq!(
            Notice::from_error(&CommerceError::AuthenticationRequired),
            Some(Notice::AuthRequired)
        );
        assert_eq!(Notice::from_error(&CommerceError::Overflow), None);
    }

    #[test]
    fn test_plain_redirect() {
        let r = Redirect::to("/bookings");
        assert_eq!(r.path, "/bookings");
        assert!(r.query.is_empty());
        assert!(r.query_param("redirect").is_none());
    }
}
