//! The shared date-aligned matrix and its outer-join assembly.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

/// One competitor's shifted, daily-resampled series as a matrix column.
#[derive(Debug, Clone)]
pub struct DailyColumn {
    pub person_id: String,
    /// Date-keyed values. Dates outside the competitor's span are absent,
    /// never zero-filled or forward-filled.
    pub values: BTreeMap<NaiveDate, f64>,
}

impl DailyColumn {
    pub fn from_points(person_id: String, points: Vec<(NaiveDate, f64)>) -> Self {
        Self {
            person_id,
            values: points.into_iter().collect(),
        }
    }

    /// First date holding exactly `value`, scanning in date order.
    pub fn date_of_value(&self, value: f64) -> Option<NaiveDate> {
        self.values
            .iter()
            .find(|&(_, held)| *held == value)
            .map(|(date, _)| *date)
    }

    /// The column's (time, date) pairs sorted ascending by time, duplicate
    /// times removed keeping the first.
    pub fn sorted_values(&self) -> Vec<(f64, NaiveDate)> {
        let mut pairs: Vec<(f64, NaiveDate)> =
            self.values.iter().map(|(date, value)| (*value, *date)).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        pairs.dedup_by(|a, b| a.0 == b.0);
        pairs
    }
}

/// Date-aligned matrix: one column per processed competitor.
///
/// Columns form an explicit sequence in competitor processing order; the
/// reference-update scans depend on that order, so a keyed map with its own
/// iteration order would not do.
#[derive(Debug, Clone, Default)]
pub struct AlignedMatrix {
    columns: Vec<DailyColumn>,
}

impl AlignedMatrix {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Append one finished column.
    pub fn push(&mut self, column: DailyColumn) {
        debug_assert!(self.position(&column.person_id).is_none());
        self.columns.push(column);
    }

    /// Outer-join concatenation: append all pending columns in order.
    ///
    /// Columns are date-keyed, so the join itself is implicit; flushing with
    /// nothing pending is a no-op, making the operation idempotent.
    pub fn flush(&mut self, pending: &mut Vec<DailyColumn>) {
        for column in pending.drain(..) {
            self.push(column);
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[DailyColumn] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> &DailyColumn {
        &self.columns[index]
    }

    pub(crate) fn column_mut(&mut self, index: usize) -> &mut DailyColumn {
        &mut self.columns[index]
    }

    /// Insertion-order position of a competitor's column.
    pub fn position(&self, person_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.person_id == person_id)
    }

    /// Union of all dates appearing in any column, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let union: BTreeSet<NaiveDate> = self
            .columns
            .iter()
            .flat_map(|c| c.values.keys().copied())
            .collect();
        union.into_iter().collect()
    }

    /// Value of one competitor on one date, if covered.
    pub fn value(&self, person_id: &str, date: NaiveDate) -> Option<f64> {
        let index = self.position(person_id)?;
        self.columns[index].values.get(&date).copied()
    }
}
