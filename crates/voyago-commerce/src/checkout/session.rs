//! Checkout session state machine.
//!
//! A checkout attempt walks two steps, traveler details then payment, and
//! ends with a completion that clears the cart and asks the host to navigate
//! to the bookings list. Entry is gated on authentication, evaluated once at
//! construction; returning to pay for an existing reservation skips straight
//! to the payment step.

use crate::cart::{CartItem, CartStore};
use crate::catalog::CatalogLookup;
use crate::checkout::signal::{
    BookingCompleted, CheckoutCompletion, CheckoutDenied, Notice, Redirect,
};
use crate::checkout::traveler::TravelerDetails;
use crate::error::CommerceError;
use crate::ids::BookingId;
use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Days until a deferred payment is due when no cart activity carries its
/// own deadline.
pub const DEFAULT_PAYMENT_DEADLINE_DAYS: i64 = 7;

/// Settle delay applied by the host before the post-completion redirect,
/// in milliseconds.
pub const COMPLETION_REDIRECT_DELAY_MS: u64 = 1500;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Lead traveler contact details.
    #[default]
    TravelerDetails,
    /// Payment type selection.
    Payment,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::TravelerDetails => "traveler_details",
            CheckoutStep::Payment => "payment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::TravelerDetails => "Traveler Details",
            CheckoutStep::Payment => "Payment",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::TravelerDetails => 1,
            CheckoutStep::Payment => 2,
        }
    }
}

/// How the traveler pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentType {
    /// Pay the full amount now.
    #[default]
    Full,
    /// Reserve now, pay by the payment-due date.
    Later,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Full => "full",
            PaymentType::Later => "later",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentType::Full => "Pay in full",
            PaymentType::Later => "Reserve now, pay later",
        }
    }
}

/// Profile of the authenticated user, as the auth collaborator exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

/// The external authentication capability, read once at checkout entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    /// Whether a user is logged in.
    pub is_authenticated: bool,
    /// The logged-in user's profile, if any.
    pub user: Option<UserProfile>,
}

impl AuthState {
    /// An anonymous visitor.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A logged-in user.
    pub fn authenticated(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            user: Some(UserProfile {
                name: name.into(),
                email: email.into(),
            }),
        }
    }
}

/// Compute the payment-due date for a cart.
///
/// Takes the most permissive `payment_deadline_days` among the cart's
/// activities, falling back to [`DEFAULT_PAYMENT_DEADLINE_DAYS`] when no
/// activity carries one, and adds it to `today`.
pub fn payment_due_date(
    today: NaiveDate,
    items: &[CartItem],
    catalog: &dyn CatalogLookup,
) -> NaiveDate {
    let days = items
        .iter()
        .filter_map(|item| catalog.activity(&item.activity_id))
        .filter_map(|activity| activity.payment_deadline_days)
        .max()
        .unwrap_or(DEFAULT_PAYMENT_DEADLINE_DAYS);
    today + Duration::days(days)
}

/// One checkout attempt.
///
/// Created per attempt and discarded on navigation away; the only terminal
/// transition is [`CheckoutSession::complete`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    step: CheckoutStep,
    /// Traveler form data; the host binds form inputs directly to this.
    pub traveler: TravelerDetails,
    payment_type: PaymentType,
    payment_due: Option<NaiveDate>,
    reentry_booking: Option<BookingId>,
    completed: bool,
}

impl CheckoutSession {
    /// Begin a checkout attempt.
    ///
    /// Returns [`CheckoutDenied`] with a login redirect (carrying
    /// `redirect=/checkout`) and an `AuthRequired` notice when no user is
    /// authenticated; in that case no session, and therefore no step, ever
    /// exists. Authentication is not re-checked after this point.
    ///
    /// With `reentry` set (returning to pay for an existing reservation) the
    /// session starts at the payment step with the traveler prefilled from
    /// the user profile and the due date computed immediately.
    pub fn begin(
        auth: &AuthState,
        catalog: &dyn CatalogLookup,
        cart: &CartStore,
        reentry: Option<BookingId>,
    ) -> Result<Self, CheckoutDenied> {
        Self::begin_on(auth, catalog, cart, reentry, today())
    }

    /// [`CheckoutSession::begin`] with an explicit date, for hosts and tests
    /// that control the clock.
    pub fn begin_on(
        auth: &AuthState,
        catalog: &dyn CatalogLookup,
        cart: &CartStore,
        reentry: Option<BookingId>,
        today: NaiveDate,
    ) -> Result<Self, CheckoutDenied> {
        if !auth.is_authenticated {
            return Err(CheckoutDenied {
                redirect: Redirect::login_with_return("/checkout"),
                notice: Notice::AuthRequired,
            });
        }

        let mut session = Self {
            step: CheckoutStep::TravelerDetails,
            traveler: TravelerDetails::default(),
            payment_type: PaymentType::default(),
            payment_due: None,
            reentry_booking: None,
            completed: false,
        };

        if let Some(booking_id) = reentry {
            if let Some(profile) = &auth.user {
                session.traveler = TravelerDetails::from_profile(&profile.name, &profile.email);
            }
            session.step = CheckoutStep::Payment;
            session.payment_due = Some(payment_due_date(today, cart.items(), catalog));
            session.reentry_booking = Some(booking_id);
        }

        Ok(session)
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Selected payment type.
    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    /// Select how to pay. Does not touch the payment-due date.
    pub fn set_payment_type(&mut self, payment_type: PaymentType) {
        self.payment_type = payment_type;
    }

    /// Payment-due date, fixed once the payment step has been entered.
    pub fn payment_due_date(&self) -> Option<NaiveDate> {
        self.payment_due
    }

    /// The reservation being paid for, when this is a re-entry session.
    pub fn reentry_booking(&self) -> Option<&BookingId> {
        self.reentry_booking.as_ref()
    }

    /// Whether the session reached completion.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Advance from traveler details to payment.
    ///
    /// All four validation rules must pass; the first failure aborts with
    /// `ValidationError { field }` and the step does not change. Entering
    /// the payment step for the first time fixes the payment-due date for
    /// the rest of the session.
    pub fn advance(
        &mut self,
        catalog: &dyn CatalogLookup,
        cart: &CartStore,
    ) -> Result<CheckoutStep, CommerceError> {
        self.advance_on(catalog, cart, today())
    }

    /// [`CheckoutSession::advance`] with an explicit date.
    pub fn advance_on(
        &mut self,
        catalog: &dyn CatalogLookup,
        cart: &CartStore,
        today: NaiveDate,
    ) -> Result<CheckoutStep, CommerceError> {
        if self.step != CheckoutStep::TravelerDetails || self.completed {
            return Err(CommerceError::InvalidTransition {
                from: self.state_name(),
                to: CheckoutStep::Payment.as_str(),
            });
        }

        self.traveler.validate()?;

        if self.payment_due.is_none() {
            self.payment_due = Some(payment_due_date(today, cart.items(), catalog));
        }
        self.step = CheckoutStep::Payment;
        Ok(self.step)
    }

    /// Go back from payment to traveler details.
    ///
    /// Always allowed; entered data and the computed due date are kept.
    /// Calling from the first step is a no-op.
    pub fn back(&mut self) -> CheckoutStep {
        self.step = CheckoutStep::TravelerDetails;
        self.step
    }

    /// Complete the checkout.
    ///
    /// Only valid from the payment step, once. Emits the
    /// [`BookingCompleted`] event with the cart's grand total, clears the
    /// cart, and returns the post-completion redirect with its settle delay.
    pub fn complete(
        &mut self,
        cart: &mut CartStore,
    ) -> Result<CheckoutCompletion, CommerceError> {
        if self.step != CheckoutStep::Payment || self.completed {
            return Err(CommerceError::InvalidTransition {
                from: self.state_name(),
                to: "completed",
            });
        }

        let pricing = cart.pricing()?;
        let payment_due_date = match self.payment_type {
            PaymentType::Later => self.payment_due,
            PaymentType::Full => None,
        };

        self.completed = true;
        cart.clear();

        Ok(CheckoutCompletion {
            event: BookingCompleted {
                payment_type: self.payment_type,
                grand_total: pricing.grand_total,
                payment_due_date,
            },
            notice: Notice::BookingCompleted,
            redirect: Redirect::to("/bookings"),
            settle_delay_ms: COMPLETION_REDIRECT_DELAY_MS,
        })
    }

    fn state_name(&self) -> &'static str {
        if self.completed {
            "completed"
        } else {
            self.step.as_str()
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
