// File: crates/scenario-plot/src/error.rs
// Summary: Error taxonomy for the plotting pipeline; every variant names what triggered it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("unknown scenario '{key}' (expected one of: {known})")]
    UnknownScenario { key: String, known: String },

    #[error("data file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table {}{}: {message}", path.display(), line.map(|l| format!(" (line {l})")).unwrap_or_default())]
    Parse { path: PathBuf, line: Option<u64>, message: String },

    #[error("table {} does not fit: {message}", path.display())]
    Schema { path: PathBuf, message: String },

    #[error("scenario '{scenario}' needs column '{column}', which the loaded table lacks")]
    Render { scenario: String, column: String },

    #[error("could not display scenario '{scenario}': {message}")]
    Display { scenario: String, message: String },
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;
