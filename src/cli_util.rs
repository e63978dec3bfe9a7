//! CLI-side error wrapping with actionable hints.

use std::fmt;

use crate::error::IsochronError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert an isochron library error into a CLI error with a hint.
pub fn isochron_cli_error(context: &str, err: IsochronError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an isochron error variant.
pub fn cli_hint(err: &IsochronError) -> String {
    use IsochronError::*;
    match err {
        InsufficientData => {
            "No competitor has two improving results. Check the event id and thresholds."
                .to_string()
        }
        OutOfRange { .. } => format!("{err}. The results table is not ordered as expected."),
        InvariantViolation { .. } => format!("{err}. This is a bug."),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Csv(e) => format!("{e}. Verify the table headers and column types."),
        Io(io) => {
            format!("{io}. Check that the file exists and the path is correct.")
        }
        Internal(msg) => format!("{msg}. This is a bug."),
    }
}
