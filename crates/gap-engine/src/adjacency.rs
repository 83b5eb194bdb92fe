//! Find the reservations on either side of a search window.
//!
//! Only start dates are compared. The preceding reservation may therefore
//! overlap or even contain the search window; [`crate::gap`] reports that as
//! an overlap later on.

use tracing::trace;

use crate::model::{DateRange, Reservation};

/// The nearest reservations before and after a search's start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjacent<'a> {
    /// Latest-starting reservation with `start_date <= search.start_date`.
    pub prev: Option<&'a Reservation>,
    /// Earliest-starting reservation with `start_date > search.start_date`.
    pub next: Option<&'a Reservation>,
}

/// Find the reservations adjacent to `search` among `reservations`.
///
/// The candidates are stably sorted by start date, so the result does not
/// depend on input order except among reservations sharing a start date:
/// `prev` is then the last of them in input order and `next` the first.
pub fn adjacent_reservations<'a, I>(search: &DateRange, reservations: I) -> Adjacent<'a>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    let mut sorted: Vec<&'a Reservation> = reservations.into_iter().collect();
    sorted.sort_by_key(|r| r.range.start_date);

    // First index whose reservation starts strictly after the search does.
    let split = sorted.partition_point(|r| r.range.start_date <= search.start_date);

    let adjacent = Adjacent {
        prev: split
            .checked_sub(1)
            .and_then(|i| sorted.get(i).copied()),
        next: sorted.get(split).copied(),
    };

    trace!(
        search = %search,
        candidates = sorted.len(),
        prev = ?adjacent.prev.map(|r| r.range),
        next = ?adjacent.next.map(|r| r.range),
        "found adjacent reservations"
    );

    adjacent
}
