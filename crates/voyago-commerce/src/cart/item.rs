//! Cart item types.

use crate::error::CommerceError;
use crate::ids::ActivityId;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Traveler counts for a single booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TravelerCounts {
    /// Adult travelers.
    pub adults: i64,
    /// Child travelers.
    pub children: i64,
    /// Infant travelers.
    pub infants: i64,
}

impl TravelerCounts {
    /// Create a new set of counts.
    pub fn new(adults: i64, children: i64, infants: i64) -> Self {
        Self {
            adults,
            children,
            infants,
        }
    }

    /// Total number of travelers.
    ///
    /// Saturates at the integer bounds; counts anywhere near them never pass
    /// [`TravelerCounts::validate`].
    pub fn total(&self) -> i64 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    fn checked_total(&self) -> Option<i64> {
        self.adults
            .checked_add(self.children)?
            .checked_add(self.infants)
    }

    /// Validate the counts: none may be negative, at least one traveler must
    /// be booked, and the sum must not overflow.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let negative = self.adults < 0 || self.children < 0 || self.infants < 0;
        match self.checked_total() {
            Some(total) if !negative && total > 0 => Ok(()),
            _ => Err(CommerceError::InvalidQuantity {
                adults: self.adults,
                children: self.children,
                infants: self.infants,
            }),
        }
    }

    /// Try to merge another set of counts into this one.
    pub fn try_merge(&self, other: &TravelerCounts) -> Result<TravelerCounts, CommerceError> {
        let merged = TravelerCounts {
            adults: checked_count(self.adults, other.adults)?,
            children: checked_count(self.children, other.children)?,
            infants: checked_count(self.infants, other.infants)?,
        };
        merged.validate()?;
        Ok(merged)
    }
}

fn checked_count(a: i64, b: i64) -> Result<i64, CommerceError> {
    a.checked_add(b).ok_or(CommerceError::Overflow)
}

/// The schedule captured when a dated activity is added to the cart.
///
/// Absent for flexible tour packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSchedule {
    /// First day of the booking.
    pub start_date: NaiveDate,
    /// Last day of the booking.
    pub end_date: NaiveDate,
    /// Pickup time as shown in the catalog (e.g., "09:30").
    pub pickup_time: String,
}

/// A bookable line item in the cart.
///
/// Title, image, and unit price are snapshots taken at add time so later
/// catalog edits don't change what the user agreed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog activity this booking is for.
    pub activity_id: ActivityId,
    /// Activity title at add time.
    pub activity_title: String,
    /// Activity image at add time.
    pub image: String,
    /// Booking schedule; `None` for tour packages.
    pub schedule: Option<BookingSchedule>,
    /// Traveler counts.
    pub travelers: TravelerCounts,
    /// Price per traveler at add time.
    pub unit_price: Money,
}

impl CartItem {
    /// Create a new cart item, validating the traveler counts.
    pub fn new(
        activity_id: ActivityId,
        activity_title: impl Into<String>,
        image: impl Into<String>,
        schedule: Option<BookingSchedule>,
        travelers: TravelerCounts,
        unit_price: Money,
    ) -> Result<Self, CommerceError> {
        travelers.validate()?;
        Ok(Self {
            activity_id,
            activity_title: activity_title.into(),
            image: image.into(),
            schedule,
            travelers,
            unit_price,
        })
    }

    /// Total travelers on this line.
    pub fn total_travelers(&self) -> i64 {
        self.travelers.total()
    }

    /// Line total: unit price times travelers.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        crate::cart::pricing::line_total(self)
    }
}
