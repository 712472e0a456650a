//! Activity types and the catalog lookup contract.

use crate::ids::ActivityId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How an activity is booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivityKind {
    /// Booked for a concrete date range with a pickup time.
    #[default]
    Scheduled,
    /// Flexible tour package; no schedule is captured at add-to-cart time.
    TourPackage,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Scheduled => "scheduled",
            ActivityKind::TourPackage => "tour_package",
        }
    }
}

/// A bookable activity in the external catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Unique activity identifier.
    pub id: ActivityId,
    /// Display title.
    pub title: String,
    /// Location (e.g., "Cartagena, Colombia").
    pub location: String,
    /// Primary image URL.
    pub image: String,
    /// Price per traveler.
    pub price: Money,
    /// Booking style.
    pub kind: ActivityKind,
    /// Days after reservation by which a deferred payment is due.
    ///
    /// `None` means the activity imposes no deadline of its own and the
    /// storefront default applies.
    pub payment_deadline_days: Option<i64>,
}

/// Read-only catalog access consumed by the core.
///
/// The storefront host wires this to its real catalog; tests use
/// [`InMemoryCatalog`].
pub trait CatalogLookup {
    /// Look up an activity by id.
    fn activity(&self, id: &ActivityId) -> Option<&Activity>;
}

/// Map-backed catalog for tests and single-process hosts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    activities: HashMap<ActivityId, Activity>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an activity, replacing any previous entry with the same id.
    pub fn insert(&mut self, activity: Activity) {
        self.activities.insert(activity.id.clone(), activity);
    }

    /// Number of activities in the catalog.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl CatalogLookup for InMemoryCatalog {
    fn activity(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.get(id)
    }
}

impl FromIterator<Activity> for InMemoryCatalog {
    fn from_iter<T: IntoIterator<Item = Activity>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for activity in iter {
            catalog.insert(activity);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sample_activity(id: &str, deadline: Option<i64>) -> Activity {
        Activity {
            id: ActivityId::new(id),
            title: "City Walking Tour".to_string(),
            location: "Lisbon, Portugal".to_string(),
            image: "/img/walking-tour.jpg".to_string(),
            price: Money::new(4500, Currency::USD),
            kind: ActivityKind::Scheduled,
            payment_deadline_days: deadline,
        }
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog: InMemoryCatalog =
            vec![sample_activity("act-1", None), sample_activity("act-2", Some(3))]
                .into_iter()
                .collect();

        assert_eq!(catalog.len(), 2);
        let found = catalog.activity(&ActivityId::new("act-2")).unwrap();
        assert_eq!(found.payment_deadline_days, Some(3));
        assert!(catalog.activity(&ActivityId::new("act-9")).is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert(sample_activity("act-1", None));
        catalog.insert(sample_activity("act-1", Some(10)));

        assert_eq!(catalog.len(), 1);
        let found = catalog.activity(&ActivityId::new("act-1")).unwrap();
        assert_eq!(found.payment_deadline_days, Some(10));
    }
}
