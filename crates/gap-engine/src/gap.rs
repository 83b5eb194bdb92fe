//! Measure the idle days left between two date ranges.
//!
//! The gap between two disjoint ranges is the number of whole calendar days
//! strictly between the end of the earlier one and the start of the later one.
//! Ranges that share a day, or where one ends on the day the other starts,
//! overlap and have no gap.

use std::fmt;

use crate::model::{DateRange, GapRule};

/// Result of measuring the gap between two ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gap {
    /// The ranges are disjoint with this many idle days between them.
    Days(i64),
    /// The ranges share at least one calendar day.
    Overlap,
    /// One side has no range at all, so nothing constrains it.
    Unbounded,
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gap::Days(1) => f.write_str("1 day"),
            Gap::Days(days) => write!(f, "{} days", days),
            Gap::Overlap => f.write_str("overlap"),
            Gap::Unbounded => f.write_str("none"),
        }
    }
}

/// Gap between two ranges that may be absent.
///
/// Returns [`Gap::Unbounded`] when either side is `None`, otherwise defers to
/// [`gap_between`].
pub fn gap(a: Option<&DateRange>, b: Option<&DateRange>) -> Gap {
    match (a, b) {
        (Some(a), Some(b)) => gap_between(a, b),
        _ => Gap::Unbounded,
    }
}

/// Gap between two ranges, in either order.
///
/// `gap_between(a, b) == gap_between(b, a)` for all inputs.
pub fn gap_between(a: &DateRange, b: &DateRange) -> Gap {
    if a.start_date > b.end_date {
        Gap::Days(a.start_date.signed_duration_since(b.end_date).num_days() - 1)
    } else if b.start_date > a.end_date {
        Gap::Days(b.start_date.signed_duration_since(a.end_date).num_days() - 1)
    } else {
        Gap::Overlap
    }
}

/// The global set of forbidden gap sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapRules {
    sizes: Vec<i64>,
}

impl GapRules {
    pub fn new(rules: &[GapRule]) -> Self {
        rules.iter().copied().collect()
    }

    /// Whether `gap` is a configured forbidden size.
    ///
    /// Only [`Gap::Days`] can match. Overlaps and unbounded sides never do,
    /// even when a negative size is configured.
    pub fn forbids(&self, gap: Gap) -> bool {
        match gap {
            Gap::Days(days) => self.sizes.contains(&days),
            Gap::Overlap | Gap::Unbounded => false,
        }
    }

    pub fn sizes(&self) -> &[i64] {
        &self.sizes
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl FromIterator<GapRule> for GapRules {
    fn from_iter<I: IntoIterator<Item = GapRule>>(iter: I) -> Self {
        Self {
            sizes: iter.into_iter().map(|rule| rule.gap_size).collect(),
        }
    }
}
