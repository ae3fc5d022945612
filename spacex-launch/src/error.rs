/// Error types for loading the launch dataset
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the launch dataset. All of them are fatal at
/// startup; there is no partial-load fallback.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset file could not be opened
    #[error("Failed to open dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header row
    #[error("Dataset is missing required column: {0:?}")]
    MissingColumn(String),

    /// Malformed CSV or a field that does not parse as its column type
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed but holds a value outside its domain
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// Header row present but no launch records
    #[error("Dataset contains no launch records")]
    Empty,
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
