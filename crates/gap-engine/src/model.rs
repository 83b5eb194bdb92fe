//! Value records shared by every stage of a search: date ranges, campsites,
//! reservations and gap rules.
//!
//! All records are plain immutable values. Dates are calendar dates with no
//! time component and both ends of a [`DateRange`] are inclusive.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GapError, Result};

/// Identifier of a campsite, referenced by [`Reservation::campsite_id`].
pub type CampsiteId = i64;

/// An inclusive range of calendar days.
///
/// Used both for the requested search window and for existing reservations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Build a range without checking that `start_date <= end_date`.
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Build a range, failing with [`GapError::InvertedRange`] when the end
    /// date precedes the start date. `field` names the range in the error.
    pub fn checked(field: &str, start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        if end_date < start_date {
            return Err(GapError::InvertedRange {
                field: field.to_string(),
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self::new(start_date, end_date))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_date, self.end_date)
    }
}

/// A bookable campsite.
///
/// Any fields beyond `id` and `name` are carried through untouched in
/// `metadata` and serialized back in their original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campsite {
    pub id: CampsiteId,
    pub name: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Campsite {
    pub fn new(id: CampsiteId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            metadata: Map::new(),
        }
    }
}

/// An existing booking of one campsite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reservation {
    pub campsite_id: CampsiteId,
    pub range: DateRange,
}

/// A forbidden number of idle days between two bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapRule {
    pub gap_size: i64,
}
