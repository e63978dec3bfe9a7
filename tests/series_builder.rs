use chrono::NaiveDate;
use isochron::{SeriesBuilder, SolveRecord};

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

fn sorted(mut records: Vec<SolveRecord>) -> Vec<SolveRecord> {
    records.sort_by(|a, b| a.person_id.cmp(&b.person_id).then(a.date.cmp(&b.date)));
    records
}

#[test]
fn queue_orders_by_first_time_descending() {
    // x's later solve is higher than its first one: the starting time is the
    // first record, not the group maximum
    let mut builder = SeriesBuilder::new(sorted(vec![
        record("x", 80.0, 1),
        record("x", 120.0, 2),
        record("y", 100.0, 1),
        record("y", 50.0, 2),
    ]));

    assert_eq!(builder.pop_front(), Some(("y".to_string(), 100.0)));
    assert_eq!(builder.pop_front(), Some(("x".to_string(), 80.0)));
    assert_eq!(builder.pop_front(), None);
}

#[test]
fn queue_breaks_ties_by_id() {
    let mut builder = SeriesBuilder::new(sorted(vec![
        record("b", 50.0, 1),
        record("b", 40.0, 2),
        record("a", 50.0, 1),
        record("a", 45.0, 2),
    ]));

    assert_eq!(builder.pop_front().unwrap().0, "a");
    assert_eq!(builder.pop_front().unwrap().0, "b");
}

#[test]
fn max_and_min_times_track_first_and_lowest() {
    let builder = SeriesBuilder::new(sorted(vec![
        record("x", 80.0, 1),
        record("x", 120.0, 2),
        record("x", 30.0, 3),
    ]));

    assert_eq!(builder.max_time("x"), Some(80.0));
    assert_eq!(builder.min_time("x"), Some(30.0));
    assert_eq!(builder.max_time("unknown"), None);
}

#[test]
fn build_keeps_best_result_per_date() {
    let builder = SeriesBuilder::new(sorted(vec![
        record("x", 50.0, 1),
        record("x", 47.0, 1),
        record("x", 40.0, 2),
    ]));

    let series = builder.build("x").unwrap();
    assert_eq!(series.points, vec![(day(1), 47.0), (day(2), 40.0)]);
}

#[test]
fn build_discards_single_date_competitors() {
    let builder = SeriesBuilder::new(sorted(vec![
        record("x", 50.0, 1),
        record("x", 40.0, 1),
    ]));
    assert!(builder.build("x").is_none());
}

#[test]
fn build_discards_non_improving_competitors() {
    let builder = SeriesBuilder::new(sorted(vec![
        record("x", 50.0, 1),
        record("x", 60.0, 2),
        record("x", 55.0, 3),
    ]));
    assert!(builder.build("x").is_none());
}

#[test]
fn discard_forgets_the_index_entries() {
    let mut builder = SeriesBuilder::new(sorted(vec![
        record("x", 50.0, 1),
        record("x", 40.0, 2),
    ]));
    builder.discard("x");
    assert_eq!(builder.max_time("x"), None);
    assert_eq!(builder.min_time("x"), None);
}
