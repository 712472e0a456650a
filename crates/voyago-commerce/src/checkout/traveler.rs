//! Traveler details and their validation rules.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum phone length after trimming.
pub const MIN_PHONE_LEN: usize = 6;

/// The traveler-form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelerField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl TravelerField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelerField::FirstName => "first_name",
            TravelerField::LastName => "last_name",
            TravelerField::Email => "email",
            TravelerField::Phone => "phone",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TravelerField::FirstName => "First name",
            TravelerField::LastName => "Last name",
            TravelerField::Email => "Email",
            TravelerField::Phone => "Phone",
        }
    }
}

impl fmt::Display for TravelerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The lead traveler's contact details, collected in checkout step one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TravelerDetails {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Phone country calling code (e.g., "+49").
    pub country_code: String,
    /// Phone number.
    pub phone: String,
}

impl TravelerDetails {
    /// Prefill details from an authenticated user's profile.
    ///
    /// The profile's full name is split on the first space: first token
    /// becomes the first name, the remainder the last name. Phone is left
    /// empty for the traveler to fill in.
    pub fn from_profile(full_name: &str, email: &str) -> Self {
        let trimmed = full_name.trim();
        let (first, last) = match trimmed.split_once(' ') {
            Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
            None => (trimmed.to_string(), String::new()),
        };
        Self {
            first_name: first,
            last_name: last,
            email: email.to_string(),
            country_code: String::new(),
            phone: String::new(),
        }
    }

    /// Validate the details, applying the rules in order and reporting the
    /// first failure.
    ///
    /// Rules: first name non-empty, last name non-empty, email shaped like
    /// `local@domain.tld`, phone at least [`MIN_PHONE_LEN`] characters. All
    /// checks apply to trimmed input.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.first_name.trim().is_empty() {
            return Err(field_error(TravelerField::FirstName));
        }
        if self.last_name.trim().is_empty() {
            return Err(field_error(TravelerField::LastName));
        }
        if !email_is_valid(self.email.trim()) {
            return Err(field_error(TravelerField::Email));
        }
        if self.phone.trim().len() < MIN_PHONE_LEN {
            return Err(field_error(TravelerField::Phone));
        }
        Ok(())
    }
}

fn field_error(field: TravelerField) -> CommerceError {
    CommerceError::ValidationError { field }
}

/// Check for a `local@domain.tld` shape: exactly one `@`, a non-empty local
/// part, and a domain with at least one dot separating non-empty labels.
fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}
