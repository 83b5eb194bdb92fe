//! Search documents: the raw JSON shape and its normalized form.
//!
//! A document carries the search window, the campsites, the gap rules and the
//! existing reservations. Dates arrive as `YYYY-MM-DD` strings in a
//! [`RawQuery`]; [`normalize`] turns that into a [`Query`] of calendar dates
//! without touching the raw input, so one raw document can feed any number of
//! independent searches.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::availability::{self, SiteReport};
use crate::error::{GapError, Result};
use crate::gap::GapRules;
use crate::model::{Campsite, CampsiteId, DateRange, GapRule, Reservation};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date range as it appears in the input document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRange {
    pub start_date: String,
    pub end_date: String,
}

/// A reservation as it appears in the input document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReservation {
    pub campsite_id: CampsiteId,
    pub start_date: String,
    pub end_date: String,
}

/// The input document before date parsing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuery {
    pub search: RawRange,
    pub campsites: Vec<Campsite>,
    pub gap_rules: Vec<GapRule>,
    pub reservations: Vec<RawReservation>,
}

/// A normalized search document, ready to query.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub search: DateRange,
    pub campsites: Vec<Campsite>,
    pub gap_rules: GapRules,
    pub reservations: Vec<Reservation>,
}

impl Query {
    /// Parse a JSON document and normalize its dates.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawQuery = serde_json::from_str(json)?;
        normalize(&raw)
    }

    /// Campsites that can accept the search, in input order.
    pub fn available_sites(&self) -> Vec<&Campsite> {
        availability::available_sites(
            &self.search,
            &self.campsites,
            &self.gap_rules,
            &self.reservations,
        )
    }

    /// Verdict for every campsite, in input order.
    pub fn evaluate(&self) -> Vec<SiteReport<'_>> {
        availability::evaluate_sites(
            &self.search,
            &self.campsites,
            &self.gap_rules,
            &self.reservations,
        )
    }
}

/// Convert every date string in `raw` into a calendar date.
///
/// # Errors
/// Returns `GapError::InvalidDate` for a date not in strict `YYYY-MM-DD` form
/// or not on the calendar, and `GapError::InvertedRange` for a range whose end
/// precedes its start. The first offending field is reported.
pub fn normalize(raw: &RawQuery) -> Result<Query> {
    let search = parse_range("search", &raw.search.start_date, &raw.search.end_date)?;

    let reservations = raw
        .reservations
        .iter()
        .enumerate()
        .map(|(i, r)| -> Result<Reservation> {
            let range = parse_range(&format!("reservations[{}]", i), &r.start_date, &r.end_date)?;
            Ok(Reservation {
                campsite_id: r.campsite_id,
                range,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Query {
        search,
        campsites: raw.campsites.clone(),
        gap_rules: GapRules::new(&raw.gap_rules),
        reservations,
    })
}

/// Parse a strict `YYYY-MM-DD` date. `field` names the value in errors.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    let invalid = || GapError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    };

    // chrono accepts unpadded and signed fields; the document format does not.
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

fn parse_range(field: &str, start: &str, end: &str) -> Result<DateRange> {
    let start_date = parse_date(&format!("{}.startDate", field), start)?;
    let end_date = parse_date(&format!("{}.endDate", field), end)?;
    DateRange::checked(field, start_date, end_date)
}
