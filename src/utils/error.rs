use crate::domain::model::Row;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("IO error reading {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error in {}: {source}", .path.display())]
    CsvError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Unknown domain: {name}")]
    UnknownDomain { name: String },

    #[error("Stack not supported: {name}")]
    UnsupportedStack { name: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// A load that stopped early. `rows` holds every record read before `error`.
#[derive(Debug)]
pub struct LoadFailure {
    pub rows: Vec<Row>,
    pub error: SearchError,
}

impl LoadFailure {
    pub fn new(rows: Vec<Row>, error: SearchError) -> Self {
        Self { rows, error }
    }
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (after {} rows)", self.error, self.rows.len())
    }
}

impl std::error::Error for LoadFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

pub type LoadResult = std::result::Result<Vec<Row>, LoadFailure>;
