//! Per-competitor progression series and the processing-order index.

use std::collections::{BTreeMap, HashMap, VecDeque};

use chrono::NaiveDate;

use crate::filter::SolveRecord;

/// A competitor's strictly improving personal-best curve.
///
/// Dates are strictly increasing and times strictly decreasing; the
/// constructor in [`SeriesBuilder::build`] guarantees both.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionSeries {
    pub person_id: String,
    pub points: Vec<(NaiveDate, f64)>,
}

impl ProgressionSeries {
    pub fn first_date(&self) -> NaiveDate {
        self.points[0].0
    }
}

/// Groups the filtered results by competitor and fixes the processing order.
///
/// The queue holds each competitor's first-recorded time, descending, so the
/// competitor with the highest starting time is processed first. Since
/// non-improving results are removed later, that starting time is the first
/// record chronologically, not the group maximum.
pub struct SeriesBuilder {
    groups: HashMap<String, Vec<SolveRecord>>,
    queue: VecDeque<(String, f64)>,
    max_times: HashMap<String, f64>,
    min_times: HashMap<String, f64>,
}

impl SeriesBuilder {
    /// `records` must be sorted by competitor then date, as produced by
    /// [`crate::filter::filter_results`].
    pub fn new(records: Vec<SolveRecord>) -> Self {
        let mut groups: HashMap<String, Vec<SolveRecord>> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        for record in records {
            if !groups.contains_key(&record.person_id) {
                order.push(record.person_id.clone());
            }
            groups
                .entry(record.person_id.clone())
                .or_default()
                .push(record);
        }

        let mut max_times = HashMap::with_capacity(order.len());
        let mut min_times = HashMap::with_capacity(order.len());
        let mut queue: Vec<(String, f64)> = Vec::with_capacity(order.len());
        for person_id in order {
            let rows = &groups[&person_id];
            let first = rows[0].time;
            let lowest = rows.iter().map(|r| r.time).fold(f64::INFINITY, f64::min);
            max_times.insert(person_id.clone(), first);
            min_times.insert(person_id.clone(), lowest);
            queue.push((person_id, first));
        }
        // stable sort keeps the by-id input order between equal times
        queue.sort_by(|a, b| b.1.total_cmp(&a.1));
        debug_assert!(queue.windows(2).all(|w| w[0].1 >= w[1].1));

        Self {
            groups,
            queue: queue.into(),
            max_times,
            min_times,
        }
    }

    /// Competitors left to process, in descending starting-time order.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Pop the competitor with the highest remaining starting time.
    pub fn pop_front(&mut self) -> Option<(String, f64)> {
        self.queue.pop_front()
    }

    /// Forget a competitor whose series collapsed during reference seeding.
    pub fn discard(&mut self, person_id: &str) {
        self.max_times.remove(person_id);
        self.min_times.remove(person_id);
    }

    /// First-recorded (highest usable) time for a competitor.
    pub fn max_time(&self, person_id: &str) -> Option<f64> {
        self.max_times.get(person_id).copied()
    }

    /// Lowest raw time for a competitor, before any interpolation.
    pub fn min_time(&self, person_id: &str) -> Option<f64> {
        self.min_times.get(person_id).copied()
    }

    /// Build the progression series for one competitor.
    ///
    /// Returns `None` when fewer than two points survive deduplication and
    /// the non-progression filter; such competitors are skipped, not errors.
    pub fn build(&self, person_id: &str) -> Option<ProgressionSeries> {
        let rows = self.groups.get(person_id)?;

        // keep the best result per date
        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for record in rows {
            by_date
                .entry(record.date)
                .and_modify(|time| {
                    if record.time < *time {
                        *time = record.time;
                    }
                })
                .or_insert(record.time);
        }
        let deduplicated: Vec<(NaiveDate, f64)> = by_date.into_iter().collect();
        if deduplicated.len() < 2 {
            return None;
        }

        let points = remove_non_progressing(&deduplicated);
        if points.len() < 2 {
            return None;
        }
        Some(ProgressionSeries {
            person_id: person_id.to_string(),
            points,
        })
    }
}

/// Drop entries that do not strictly improve on the last retained time.
///
/// The first entry is always kept as the running baseline.
pub fn remove_non_progressing(points: &[(NaiveDate, f64)]) -> Vec<(NaiveDate, f64)> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut kept = Vec::with_capacity(points.len());
    kept.push(first);
    let mut previous = first.1;
    for &(date, time) in rest {
        if time < previous {
            kept.push((date, time));
            previous = time;
        }
    }
    kept
}
