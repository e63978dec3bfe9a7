//! The stateful reference-based alignment engine.
//!
//! Competitors are processed one at a time in descending starting-time
//! order. The first usable competitor seeds the reference; every following
//! competitor is matched against the reference's value axis, shifted so its
//! starting time lands on the matched date, resampled daily and appended as
//! a matrix column. When an incoming starting time drops below what the
//! reference covers, the reference is swapped for a later column (Case 1)
//! or the lowest-reaching column is extended by one extrapolated point
//! (Case 2).

use chrono::{Duration, NaiveDate};

use crate::error::IsochronError;
use crate::filter::SolveRecord;
use crate::interp::{extend_to_reach, resample_daily, shift_by_days};
use crate::matrix::{AlignedMatrix, DailyColumn};
use crate::series::SeriesBuilder;
use crate::stats::AlignStats;

/// The current reference column's identity and value axis.
#[derive(Debug, Clone)]
struct ReferenceState {
    person_id: String,
    /// (time, date) pairs ascending by time, duplicates removed.
    values: Vec<(f64, NaiveDate)>,
}

/// Date of the reference value closest to `target`.
///
/// `values` must be ascending by time. An exact match returns its own date;
/// otherwise the nearer bracketing value wins, ties going to the later
/// (higher-time) bracket. `None` means the target falls outside the value
/// range, which the reference update is expected to have ruled out.
pub fn closest_date(values: &[(f64, NaiveDate)], target: f64) -> Option<NaiveDate> {
    let index = values.partition_point(|&(time, _)| time < target);
    if index == 0 {
        return match values.first() {
            Some(&(time, date)) if time == target => Some(date),
            _ => None,
        };
    }
    if index == values.len() {
        return None;
    }
    let (current, current_date) = values[index];
    let (previous, previous_date) = values[index - 1];
    if current - target <= target - previous {
        Some(current_date)
    } else {
        Some(previous_date)
    }
}

/// Aligns every competitor's progression onto a shared daily timeline.
///
/// Owns all run state: the remaining queue, the accumulated matrix and the
/// current reference. Processing is strictly sequential; each step consults
/// matrix state established by all prior steps.
pub struct ReferenceAligner {
    builder: SeriesBuilder,
    matrix: AlignedMatrix,
    pending: Vec<DailyColumn>,
    reference: ReferenceState,
    stats: AlignStats,
}

impl ReferenceAligner {
    /// Seed the aligner from the filtered results.
    ///
    /// The competitor with the highest starting time becomes the first
    /// matrix column and the initial reference. Candidates whose series
    /// collapse below two points are dropped and the next one is tried.
    pub fn new(records: Vec<SolveRecord>) -> Result<Self, IsochronError> {
        let mut builder = SeriesBuilder::new(records);
        let mut matrix = AlignedMatrix::new();
        let stats = AlignStats::new();

        let reference = loop {
            let (person_id, _) = builder
                .pop_front()
                .ok_or(IsochronError::InsufficientData)?;
            let Some(series) = builder.build(&person_id) else {
                builder.discard(&person_id);
                continue;
            };
            let column =
                DailyColumn::from_points(person_id.clone(), resample_daily(&series.points));
            let values = column.sorted_values();
            matrix.push(column);
            break ReferenceState { person_id, values };
        };

        Ok(Self {
            builder,
            matrix,
            pending: Vec::new(),
            reference,
            stats,
        })
    }

    /// Competitors still waiting to be aligned.
    pub fn remaining(&self) -> usize {
        self.builder.remaining()
    }

    /// Process every remaining competitor and return the finished matrix.
    pub fn process(self) -> Result<(AlignedMatrix, AlignStats), IsochronError> {
        self.process_with(|_, _| {})
    }

    /// Like [`ReferenceAligner::process`], invoking `progress(done, total)`
    /// after each competitor, skipped ones included. The hook is
    /// observational only.
    pub fn process_with<F>(
        mut self,
        mut progress: F,
    ) -> Result<(AlignedMatrix, AlignStats), IsochronError>
    where
        F: FnMut(usize, usize),
    {
        let total = self.builder.remaining();
        let mut done = 0usize;
        while let Some((person_id, target)) = self.builder.pop_front() {
            self.align_one(&person_id, target)?;
            done += 1;
            progress(done, total);
        }
        self.matrix.flush(&mut self.pending);
        Ok((self.matrix, self.stats))
    }

    /// Align a single competitor onto the current reference.
    fn align_one(&mut self, person_id: &str, target: f64) -> Result<(), IsochronError> {
        let Some(series) = self.builder.build(person_id) else {
            self.stats.tick_discarded();
            return Ok(());
        };

        // The descending queue order guarantees the reference starts at
        // least as high as any incoming competitor; a failure here means the
        // upstream table broke the ordering contract.
        let reference_max = self
            .builder
            .max_time(&self.reference.person_id)
            .ok_or_else(|| internal("reference missing from the max-times index"))?;
        if reference_max < target {
            return Err(IsochronError::OutOfRange {
                person: person_id.to_string(),
                time: target,
            });
        }

        self.update_reference(target)?;

        let matched = closest_date(&self.reference.values, target).ok_or_else(|| {
            IsochronError::InvariantViolation {
                person: person_id.to_string(),
                time: target,
                reference: self.reference.person_id.clone(),
            }
        })?;

        let offset = (matched - series.first_date()).num_days();
        let shifted = shift_by_days(&series.points, offset);
        self.pending.push(DailyColumn::from_points(
            person_id.to_string(),
            resample_daily(&shifted),
        ));
        self.stats.tick_aligned();
        Ok(())
    }

    /// Make sure the reference covers `target`, swapping or extending it
    /// when its lowest value is still above the incoming starting time.
    fn update_reference(&mut self, target: f64) -> Result<(), IsochronError> {
        if let Some(&(lowest, _)) = self.reference.values.first() {
            if lowest <= target {
                return Ok(());
            }
        }

        // later columns are about to be scanned: make them visible
        self.matrix.flush(&mut self.pending);
        let reference_index = self
            .matrix
            .position(&self.reference.person_id)
            .ok_or_else(|| internal("reference column missing from the matrix"))?;

        // Case 1: some column after the current reference already reaches
        // low enough. Raw minimum times are authoritative here; columns
        // after the reference have not been extended yet.
        for index in reference_index + 1..self.matrix.len() {
            if self.raw_min(index)? <= target {
                self.adopt_reference(index);
                self.stats.tick_case1();
                return Ok(());
            }
        }

        // Case 2: disjointed data, no column goes low enough. Extend the
        // column with the lowest raw minimum, from the current reference
        // onward. Raw minimums again, so a previously extended column is
        // not favoured over actual data.
        let mut lowest_index = reference_index;
        let mut lowest_min = f64::INFINITY;
        for index in reference_index..self.matrix.len() {
            let min = self.raw_min(index)?;
            if min < lowest_min {
                lowest_min = min;
                lowest_index = index;
            }
        }
        self.extend_column(lowest_index, target)?;
        self.adopt_reference(lowest_index);
        self.stats.tick_case2();
        Ok(())
    }

    /// Extend a column down to `target` with one synthetic point and
    /// re-interpolate the added span.
    fn extend_column(&mut self, index: usize, target: f64) -> Result<(), IsochronError> {
        let person_id = self.matrix.column(index).person_id.clone();
        // the raw progression carries wider-spaced points than the daily
        // column, giving a more precise slope
        let series = self
            .builder
            .build(&person_id)
            .ok_or_else(|| internal("matrix column no longer builds a series"))?;
        let n = series.points.len();
        let extension = extend_to_reach(series.points[n - 2], series.points[n - 1], target);

        let column = self.matrix.column_mut(index);
        // anchor on where the column holds the series' last raw value; the
        // column may have been shifted when it was aligned
        let last_raw_value = series.points[n - 1].1;
        let anchor = column
            .date_of_value(last_raw_value)
            .ok_or_else(|| internal("column lost its last raw value"))?;
        let new_date = anchor + Duration::days(extension.days_past_last);

        let mut points: Vec<(NaiveDate, f64)> = column
            .values
            .iter()
            .map(|(date, value)| (*date, *value))
            .collect();
        points.push((new_date, extension.value));
        // existing dates keep their values, only new days are added
        for (date, value) in resample_daily(&points) {
            column.values.entry(date).or_insert(value);
        }
        Ok(())
    }

    /// Switch the reference to a matrix column and rebuild its value axis.
    fn adopt_reference(&mut self, index: usize) {
        let column = self.matrix.column(index);
        self.reference = ReferenceState {
            person_id: column.person_id.clone(),
            values: column.sorted_values(),
        };
    }

    fn raw_min(&self, index: usize) -> Result<f64, IsochronError> {
        let person_id = &self.matrix.column(index).person_id;
        self.builder
            .min_time(person_id)
            .ok_or_else(|| internal("matrix column missing from the min-times index"))
    }
}

fn internal(msg: &str) -> IsochronError {
    IsochronError::Internal(msg.to_string())
}
