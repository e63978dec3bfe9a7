use thiserror::Error;

#[derive(Error, Debug)]
pub enum IsochronError {
    /// No competitor with at least two usable results remains to seed the
    /// reference.
    #[error("not enough data to work on")]
    InsufficientData,

    /// An incoming competitor starts above everything the current reference
    /// ever reached. The descending processing order makes this unreachable
    /// for well-formed input.
    #[error("time {time} for '{person}' is above the reference max time")]
    OutOfRange { person: String, time: f64 },

    /// The nearest-value search fell outside the reference bounds even
    /// though the reference update was supposed to guarantee coverage.
    #[error(
        "could not find a matching date for '{person}' at time {time} (reference '{reference}')"
    )]
    InvariantViolation {
        person: String,
        time: f64,
        reference: String,
    },

    /// Invalid configuration (unknown event id, bad threshold).
    #[error("config error: {0}")]
    Config(String),

    /// Malformed row in one of the raw CSV tables.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch all for states the algorithm cannot reach.
    #[error("internal error: {0}")]
    Internal(String),
}
