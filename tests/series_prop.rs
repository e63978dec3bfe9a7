use chrono::{Duration, NaiveDate};
use isochron::series::remove_non_progressing;
use quickcheck::quickcheck;

fn to_points(times: &[u32]) -> Vec<(NaiveDate, f64)> {
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    times
        .iter()
        .enumerate()
        .map(|(i, &t)| (start + Duration::days(i as i64), t as f64))
        .collect()
}

quickcheck! {
    fn filtering_is_idempotent(times: Vec<u32>) -> bool {
        let once = remove_non_progressing(&to_points(&times));
        let twice = remove_non_progressing(&once);
        once == twice
    }

    fn filtered_times_strictly_decrease(times: Vec<u32>) -> bool {
        let kept = remove_non_progressing(&to_points(&times));
        kept.windows(2).all(|pair| pair[1].1 < pair[0].1)
    }

    fn first_entry_always_survives(times: Vec<u32>) -> bool {
        let points = to_points(&times);
        let kept = remove_non_progressing(&points);
        match points.first() {
            Some(first) => kept.first() == Some(first),
            None => kept.is_empty(),
        }
    }
}
