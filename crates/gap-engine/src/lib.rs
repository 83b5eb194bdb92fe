//! # gap-engine
//!
//! Campsite availability search with gap-rule enforcement.
//!
//! Given a requested date range, the engine decides which campsites can take
//! the booking. A site is rejected when the request overlaps one of its
//! existing reservations, or when it would leave an idle gap of a forbidden
//! size (a "gap rule") next to one.
//!
//! ## Modules
//!
//! - [`model`] — Date ranges, campsites, reservations and gap rules
//! - [`gap`] — Idle-day gap between two ranges, and the gap rule set
//! - [`adjacency`] — Nearest reservations before and after a search
//! - [`availability`] — Per-site verdicts and the filtered site list
//! - [`query`] — JSON search documents and date normalization
//! - [`error`] — Error types

pub mod adjacency;
pub mod availability;
pub mod error;
pub mod gap;
pub mod model;
pub mod query;

pub use adjacency::{adjacent_reservations, Adjacent};
pub use availability::{available_sites, evaluate_site, evaluate_sites, Side, SiteReport, Verdict};
pub use error::GapError;
pub use gap::{gap, gap_between, Gap, GapRules};
pub use model::{Campsite, CampsiteId, DateRange, GapRule, Reservation};
pub use query::{normalize, parse_date, Query, RawQuery};
