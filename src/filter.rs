//! Relational filtering of the raw tables down to one event.
//!
//! Produces the three-column table the aligner consumes: competitor id,
//! time in seconds, competition date; sorted by competitor then date.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::IsochronError;
use crate::event::Event;
use crate::record::{RawData, RawResult};

/// Default minimum number of results a competitor must have to be kept.
pub const MIN_RESULTS_PER_PERSON: usize = 2;

/// One filtered result: a competitor's best single at a dated competition.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveRecord {
    pub person_id: String,
    /// Time in seconds.
    pub time: f64,
    pub date: NaiveDate,
}

/// Filter, join and sort the raw tables, retaining the given event only.
///
/// Competitors with fewer than `min_results` valid results are removed
/// entirely. Results whose competition is missing from the competitions
/// table are dropped by the join.
pub fn filter_results(
    raw: &RawData,
    event: Event,
    min_results: usize,
) -> Result<Vec<SolveRecord>, IsochronError> {
    let on_event: Vec<&RawResult> = raw
        .results
        .iter()
        .filter(|r| r.event_id == event.id())
        .filter(|r| r.best > 0)
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for result in &on_event {
        *counts.entry(result.person_id.as_str()).or_insert(0) += 1;
    }

    let dates = competition_dates(raw)?;

    let mut records = Vec::with_capacity(on_event.len());
    for result in on_event {
        if counts[result.person_id.as_str()] < min_results {
            continue;
        }
        let Some(&date) = dates.get(result.competition_id.as_str()) else {
            continue;
        };
        records.push(SolveRecord {
            person_id: result.person_id.clone(),
            // centiseconds to seconds; interpolation needs floats anyway
            time: result.best as f64 / 100.0,
            date,
        });
    }

    records.sort_by(|a, b| a.person_id.cmp(&b.person_id).then(a.date.cmp(&b.date)));
    Ok(records)
}

fn competition_dates(raw: &RawData) -> Result<HashMap<&str, NaiveDate>, IsochronError> {
    let mut dates = HashMap::with_capacity(raw.competitions.len());
    for competition in &raw.competitions {
        let date = NaiveDate::from_ymd_opt(competition.year, competition.month, competition.day)
            .ok_or_else(|| {
                IsochronError::Config(format!(
                    "invalid date {}-{}-{} for competition '{}'",
                    competition.year, competition.month, competition.day, competition.id
                ))
            })?;
        dates.insert(competition.id.as_str(), date);
    }
    Ok(dates)
}
