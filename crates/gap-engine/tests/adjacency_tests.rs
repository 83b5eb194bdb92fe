//! Tests for finding the reservations adjacent to a search window.

use chrono::NaiveDate;
use gap_engine::{adjacent_reservations, DateRange, Reservation};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(date(start), date(end))
}

fn reservation(start: &str, end: &str) -> Reservation {
    Reservation {
        campsite_id: 1,
        range: range(start, end),
    }
}

#[test]
fn finds_nearest_before_and_after() {
    let reservations = vec![
        reservation("2017-01-01", "2017-01-02"),
        reservation("2017-01-03", "2017-01-05"),
        reservation("2017-01-10", "2017-01-20"),
        reservation("2017-02-01", "2017-02-10"),
    ];
    let search = range("2017-01-06", "2017-01-08");

    let adjacent = adjacent_reservations(&search, &reservations);

    assert_eq!(adjacent.prev, Some(&reservations[1]));
    assert_eq!(adjacent.next, Some(&reservations[2]));
}

#[test]
fn unordered_input_gives_same_neighbours() {
    let reservations = vec![
        reservation("2017-01-01", "2017-01-02"),
        reservation("2017-01-10", "2017-01-20"),
        reservation("2017-02-01", "2017-02-10"),
        reservation("2017-01-03", "2017-01-05"),
    ];
    let search = range("2017-01-06", "2017-01-08");

    let adjacent = adjacent_reservations(&search, &reservations);

    assert_eq!(adjacent.prev, Some(&reservations[3]));
    assert_eq!(adjacent.next, Some(&reservations[1]));
}

#[test]
fn reservation_starting_on_search_start_is_prev() {
    let reservations = vec![
        reservation("2017-01-01", "2017-01-02"),
        reservation("2017-01-06", "2017-01-07"),
    ];
    let search = range("2017-01-06", "2017-01-08");

    let adjacent = adjacent_reservations(&search, &reservations);

    assert_eq!(adjacent.prev, Some(&reservations[1]));
    assert_eq!(adjacent.next, None);
}

#[test]
fn containing_reservation_is_still_prev() {
    // Start dates alone decide adjacency, even when the reservation swallows the search.
    let reservations = vec![reservation("2017-01-01", "2017-01-31")];
    let search = range("2017-01-06", "2017-01-08");

    let adjacent = adjacent_reservations(&search, &reservations);

    assert_eq!(adjacent.prev, Some(&reservations[0]));
    assert_eq!(adjacent.next, None);
}

#[test]
fn only_later_reservations_give_no_prev() {
    let reservations = vec![
        reservation("2017-01-20", "2017-01-22"),
        reservation("2017-01-10", "2017-01-12"),
    ];
    let search = range("2017-01-06", "2017-01-08");

    let adjacent = adjacent_reservations(&search, &reservations);

    assert_eq!(adjacent.prev, None);
    assert_eq!(adjacent.next, Some(&reservations[1]));
}

#[test]
fn no_reservations_gives_no_neighbours() {
    let reservations: Vec<Reservation> = Vec::new();
    let search = range("2017-01-06", "2017-01-08");

    let adjacent = adjacent_reservations(&search, &reservations);

    assert_eq!(adjacent.prev, None);
    assert_eq!(adjacent.next, None);
}

#[test]
fn accepts_filtered_iterators() {
    let reservations = vec![
        Reservation {
            campsite_id: 1,
            range: range("2017-01-01", "2017-01-02"),
        },
        Reservation {
            campsite_id: 2,
            range: range("2017-01-04", "2017-01-05"),
        },
    ];
    let search = range("2017-01-06", "2017-01-08");

    let adjacent =
        adjacent_reservations(&search, reservations.iter().filter(|r| r.campsite_id == 1));

    assert_eq!(adjacent.prev, Some(&reservations[0]));
}

// ── Tie-breaking among equal start dates ────────────────────────────────────

#[test]
fn tied_prev_candidates_resolve_to_last_in_input_order() {
    let reservations = vec![
        reservation("2017-01-03", "2017-01-04"),
        reservation("2017-01-03", "2017-01-05"),
    ];
    let search = range("2017-01-06", "2017-01-08");

    let adjacent = adjacent_reservations(&search, &reservations);

    assert_eq!(
        adjacent.prev,
        Some(&reservations[1]),
        "the later of two equal start dates in input order wins"
    );
}

#[test]
fn tied_next_candidates_resolve_to_first_in_input_order() {
    let reservations = vec![
        reservation("2017-01-10", "2017-01-12"),
        reservation("2017-01-10", "2017-01-11"),
    ];
    let search = range("2017-01-06", "2017-01-08");

    let adjacent = adjacent_reservations(&search, &reservations);

    assert_eq!(adjacent.next, Some(&reservations[0]));
}
