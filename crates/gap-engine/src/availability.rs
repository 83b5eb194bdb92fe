//! Decide which campsites can take a new booking for a search window.
//!
//! For every campsite the search is placed between that site's adjacent
//! reservations and both resulting gaps are checked. A site is rejected when
//! the search overlaps a reservation or leaves a gap of a forbidden size.
//! Gap rules are global and apply to every site alike.
//!
//! Sites are evaluated independently and reported in input order. Reservations
//! referencing a campsite that is not in the list are never looked at.

use std::fmt;

use tracing::debug;

use crate::adjacency::{adjacent_reservations, Adjacent};
use crate::gap::{gap, Gap, GapRules};
use crate::model::{Campsite, DateRange, Reservation};

/// Which side of the search window a rejection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Before,
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Before => f.write_str("before"),
            Side::After => f.write_str("after"),
        }
    }
}

/// Outcome of checking one campsite against a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The search fits without overlap or forbidden gaps.
    Admitted,
    /// The search overlaps the adjacent reservation on `side`.
    Overlap { side: Side },
    /// The search would leave a forbidden gap of `days` on `side`.
    ForbiddenGap { side: Side, days: i64 },
}

impl Verdict {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Verdict::Admitted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Admitted => f.write_str("available"),
            Verdict::Overlap { side } => write!(f, "overlaps reservation {}", side),
            Verdict::ForbiddenGap { side, days } => {
                write!(f, "leaves forbidden {}-day gap {}", days, side)
            }
        }
    }
}

/// Full evaluation of one campsite: adjacency, both gaps and the verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteReport<'a> {
    pub campsite: &'a Campsite,
    pub adjacent: Adjacent<'a>,
    pub gap_before: Gap,
    pub gap_after: Gap,
    pub verdict: Verdict,
}

impl SiteReport<'_> {
    pub fn is_admitted(&self) -> bool {
        self.verdict.is_admitted()
    }
}

/// Evaluate a single campsite against `search`.
///
/// Only reservations whose `campsite_id` matches the site are considered.
/// The side before the search is checked first, so when both sides fail the
/// verdict names the earlier one.
pub fn evaluate_site<'a>(
    search: &DateRange,
    campsite: &'a Campsite,
    rules: &GapRules,
    reservations: &'a [Reservation],
) -> SiteReport<'a> {
    let adjacent = adjacent_reservations(
        search,
        reservations.iter().filter(|r| r.campsite_id == campsite.id),
    );

    let gap_before = gap(Some(search), adjacent.prev.map(|r| &r.range));
    let gap_after = gap(Some(search), adjacent.next.map(|r| &r.range));

    let verdict = judge(gap_before, Side::Before, rules)
        .or_else(|| judge(gap_after, Side::After, rules))
        .unwrap_or(Verdict::Admitted);

    debug!(
        campsite_id = campsite.id,
        search = %search,
        gap_before = %gap_before,
        gap_after = %gap_after,
        verdict = %verdict,
        "evaluated campsite"
    );

    SiteReport {
        campsite,
        adjacent,
        gap_before,
        gap_after,
        verdict,
    }
}

/// Evaluate every campsite, preserving input order.
pub fn evaluate_sites<'a>(
    search: &DateRange,
    campsites: &'a [Campsite],
    rules: &GapRules,
    reservations: &'a [Reservation],
) -> Vec<SiteReport<'a>> {
    campsites
        .iter()
        .map(|site| evaluate_site(search, site, rules, reservations))
        .collect()
}

/// Campsites that can accept `search`, in input order.
pub fn available_sites<'a>(
    search: &DateRange,
    campsites: &'a [Campsite],
    rules: &GapRules,
    reservations: &'a [Reservation],
) -> Vec<&'a Campsite> {
    evaluate_sites(search, campsites, rules, reservations)
        .into_iter()
        .filter(|report| report.is_admitted())
        .map(|report| report.campsite)
        .collect()
}

/// Rejection caused by the gap on one side, if any.
fn judge(gap: Gap, side: Side, rules: &GapRules) -> Option<Verdict> {
    match gap {
        Gap::Overlap => Some(Verdict::Overlap { side }),
        Gap::Days(days) if rules.forbids(gap) => Some(Verdict::ForbiddenGap { side, days }),
        Gap::Days(_) | Gap::Unbounded => None,
    }
}
