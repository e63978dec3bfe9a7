//! Run statistics for one alignment pass.

use std::time::Instant;

use serde::Serialize;

/// Counters collected while the aligner runs.
#[derive(Debug)]
pub struct AlignStats {
    start: Instant,
    aligned: usize,
    discarded: usize,
    case1_updates: usize,
    case2_extensions: usize,
}

impl AlignStats {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            aligned: 0,
            discarded: 0,
            case1_updates: 0,
            case2_extensions: 0,
        }
    }

    pub(crate) fn tick_aligned(&mut self) {
        self.aligned += 1;
    }

    pub(crate) fn tick_discarded(&mut self) {
        self.discarded += 1;
    }

    pub(crate) fn tick_case1(&mut self) {
        self.case1_updates += 1;
    }

    pub(crate) fn tick_case2(&mut self) {
        self.case2_extensions += 1;
    }

    pub fn aligned(&self) -> usize {
        self.aligned
    }

    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn case1_updates(&self) -> usize {
        self.case1_updates
    }

    pub fn case2_extensions(&self) -> usize {
        self.case2_extensions
    }

    /// Snapshot for reporting; `columns` is the finished matrix width.
    pub fn summary(&self, columns: usize) -> RunSummary {
        RunSummary {
            columns,
            aligned: self.aligned,
            discarded: self.discarded,
            case1_updates: self.case1_updates,
            case2_extensions: self.case2_extensions,
            elapsed_ms: self.start.elapsed().as_millis(),
        }
    }

    /// Short human-readable report on stderr.
    pub fn report(&self, columns: usize) {
        eprintln!(
            "{} columns ({} aligned, {} discarded), reference updates: {} swaps, {} extensions, {:.2?}",
            columns,
            self.aligned,
            self.discarded,
            self.case1_updates,
            self.case2_extensions,
            self.start.elapsed()
        );
    }
}

impl Default for AlignStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable run summary for `--json` output.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub columns: usize,
    pub aligned: usize,
    pub discarded: usize,
    pub case1_updates: usize,
    pub case2_extensions: usize,
    pub elapsed_ms: u128,
}
