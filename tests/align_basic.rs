use chrono::NaiveDate;
use isochron::{IsochronError, ReferenceAligner, SolveRecord};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, n).unwrap()
}

fn record(person: &str, time: f64, date: u32) -> SolveRecord {
    SolveRecord {
        person_id: person.to_string(),
        time,
        date: day(date),
    }
}

#[test]
fn aligns_two_competitors_on_the_interpolated_match() {
    // a: 50 on day 1, 40 on day 11; b: 45 on day 1, 30 on day 6.
    // a's interpolated curve holds 45 on day 6, so b shifts by +5 days.
    let records = vec![
        record("a", 50.0, 1),
        record("a", 40.0, 11),
        record("b", 45.0, 1),
        record("b", 30.0, 6),
    ];

    let (matrix, stats) = ReferenceAligner::new(records).unwrap().process().unwrap();

    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix.columns()[0].person_id, "a");
    assert_eq!(matrix.columns()[1].person_id, "b");

    let b = &matrix.columns()[1];
    assert_eq!(b.values.len(), 6);
    assert_eq!(b.values.get(&day(6)), Some(&45.0));
    assert_eq!(b.values.get(&day(11)), Some(&30.0));
    assert_eq!(b.values.get(&day(1)), None);

    let a = &matrix.columns()[0];
    assert_eq!(a.values.len(), 11);
    assert_eq!(a.values.get(&day(1)), Some(&50.0));
    assert_eq!(a.values.get(&day(11)), Some(&40.0));

    // union of both spans
    assert_eq!(matrix.dates(), (1..=11).map(day).collect::<Vec<_>>());

    assert_eq!(stats.aligned(), 1);
    assert_eq!(stats.discarded(), 0);
    assert_eq!(stats.case1_updates(), 0);
    assert_eq!(stats.case2_extensions(), 0);
}

#[test]
fn no_records_is_insufficient_data() {
    assert!(matches!(
        ReferenceAligner::new(Vec::new()),
        Err(IsochronError::InsufficientData)
    ));
}

#[test]
fn all_single_date_competitors_is_insufficient_data() {
    // both collapse to one point after date deduplication
    let records = vec![
        record("a", 50.0, 1),
        record("a", 45.0, 1),
        record("b", 40.0, 2),
        record("b", 38.0, 2),
    ];
    assert!(matches!(
        ReferenceAligner::new(records),
        Err(IsochronError::InsufficientData)
    ));
}

#[test]
fn unusable_seed_candidate_is_skipped_during_initialization() {
    // b starts higher but only has one usable date; a takes the reference
    let records = vec![
        record("a", 50.0, 1),
        record("a", 40.0, 11),
        record("b", 90.0, 1),
        record("b", 85.0, 1),
    ];

    let (matrix, stats) = ReferenceAligner::new(records).unwrap().process().unwrap();
    assert_eq!(matrix.len(), 1);
    assert_eq!(matrix.columns()[0].person_id, "a");
    assert_eq!(stats.discarded(), 0);
}

#[test]
fn unusable_competitor_is_skipped_mid_run() {
    let records = vec![
        record("a", 50.0, 1),
        record("a", 40.0, 11),
        record("b", 30.0, 2),
        record("b", 25.0, 2),
    ];

    let (matrix, stats) = ReferenceAligner::new(records).unwrap().process().unwrap();
    assert_eq!(matrix.len(), 1);
    assert_eq!(stats.discarded(), 1);
    assert_eq!(stats.aligned(), 0);
}

#[test]
fn no_competitor_appears_twice() {
    let records = vec![
        record("a", 50.0, 1),
        record("a", 40.0, 11),
        record("b", 45.0, 1),
        record("b", 30.0, 6),
        record("c", 42.0, 1),
        record("c", 41.0, 3),
    ];

    let (matrix, _) = ReferenceAligner::new(records).unwrap().process().unwrap();
    assert_eq!(matrix.len(), 3);
    let mut ids: Vec<&str> = matrix.columns().iter().map(|c| c.person_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn progress_hook_fires_once_per_competitor() {
    let records = vec![
        record("a", 50.0, 1),
        record("a", 40.0, 11),
        record("b", 45.0, 1),
        record("b", 30.0, 6),
        record("c", 30.0, 2),
        record("c", 28.0, 2),
    ];

    let mut calls = Vec::new();
    let aligner = ReferenceAligner::new(records).unwrap();
    assert_eq!(aligner.remaining(), 2);
    aligner
        .process_with(|done, total| calls.push((done, total)))
        .unwrap();
    // skipped competitors still tick
    assert_eq!(calls, vec![(1, 2), (2, 2)]);
}
