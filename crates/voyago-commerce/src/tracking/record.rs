//! Booking record types.

use crate::ids::BookingId;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Booking placed successfully.
    #[default]
    BookingSuccessful,
    /// Booking confirmed by the operator.
    BookingConfirmed,
    /// Booking cancelled.
    Cancelled,
    /// Tickets not yet issued.
    TicketPending,
    /// Tickets delivered to the traveler.
    TicketDelivered,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::BookingSuccessful => "booking_successful",
            BookingStatus::BookingConfirmed => "booking_confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::TicketPending => "ticket_pending",
            BookingStatus::TicketDelivered => "ticket_delivered",
        }
    }

    /// User-facing label.
    ///
    /// This mapping is a contract with external consumers; every variant has
    /// a label and unknown inputs parse to the default variant's label.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::BookingSuccessful => "Booking Successful",
            BookingStatus::BookingConfirmed => "Booking Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::TicketPending => "Ticket Pending",
            BookingStatus::TicketDelivered => "Ticket Delivered",
        }
    }

    /// Parse a status string, falling back to `BookingSuccessful` for
    /// anything unrecognized. Default-on-unknown is policy, not a fault.
    pub fn parse(s: &str) -> Self {
        match s {
            "booking_successful" => BookingStatus::BookingSuccessful,
            "booking_confirmed" => BookingStatus::BookingConfirmed,
            "cancelled" => BookingStatus::Cancelled,
            "ticket_pending" => BookingStatus::TicketPending,
            "ticket_delivered" => BookingStatus::TicketDelivered,
            _ => BookingStatus::default(),
        }
    }
}

/// Payment status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Paid in full.
    Paid,
    /// Awaiting payment (e.g., a pay-later reservation).
    #[default]
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
        }
    }
}

/// A completed booking as the external booking store exposes it.
///
/// The tracker reads these; it never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Internal booking id.
    pub id: BookingId,
    /// Human-shareable confirmation code (e.g., "GYG-COL-789012").
    pub confirmation_code: String,
    /// Booked activity title.
    pub activity_title: String,
    /// Activity location.
    pub location: String,
    /// Booking date.
    pub date: NaiveDate,
    /// Pickup/start time.
    pub time: String,
    /// Number of travelers.
    pub travelers: i64,
    /// Total price paid or due.
    pub price: Money,
    /// Booking lifecycle status.
    pub booking_status: BookingStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Activity image.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_a_label() {
        let all = [
            BookingStatus::BookingSuccessful,
            BookingStatus::BookingConfirmed,
            BookingStatus::Cancelled,
            BookingStatus::TicketPending,
            BookingStatus::TicketDelivered,
        ];
        for status in all {
            assert!(!status.label().is_empty());
            assert_eq!(BookingStatus::parse(status.as_str()), status);
        }
    }

    #[test]
    fn test_unknown_status_falls_back() {
        assert_eq!(
            BookingStatus::parse("shipped"),
            BookingStatus::BookingSuccessful
        );
        assert_eq!(BookingStatus::parse("shipped").label(), "Booking Successful");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&BookingStatus::TicketPending).unwrap();
        assert_eq!(json, "\"ticket_pending\"");
        let json = serde_json::to_string(&PaymentStatus::Paid).unwrap();
        assert_eq!(json, "\"paid\"");
    }
}
