//! Align competitors' personal-best progression curves onto a shared daily
//! timeline.
//!
//! Every competitor improves on their own sparse calendar of competition
//! dates, so there is no common clock to plot curves against. The crate
//! synthesizes one: each progression is resampled to one value per day and
//! shifted so that its starting time lands on the date where a reference
//! competitor held the same time. The reference is swapped, or extended by
//! linear extrapolation, whenever an incoming competitor starts below what
//! the current reference ever reached.

pub mod aligner;
pub mod cli_util;
pub mod error;
pub mod event;
pub mod export;
pub mod filter;
pub mod interp;
pub mod matrix;
pub mod record;
pub mod series;
pub mod stats;

pub use crate::aligner::ReferenceAligner;
pub use crate::error::IsochronError;
pub use crate::event::Event;
pub use crate::filter::{filter_results, SolveRecord, MIN_RESULTS_PER_PERSON};
pub use crate::interp::{resample_daily, shift_by_days};
pub use crate::matrix::{AlignedMatrix, DailyColumn};
pub use crate::record::RawData;
pub use crate::series::{ProgressionSeries, SeriesBuilder};
pub use crate::stats::{AlignStats, RunSummary};
