use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which coordinate column failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Latitude => write!(f, "Latitude"),
            Coordinate::Longitude => write!(f, "Longitude"),
        }
    }
}

/// Errors that abort a dataset load. No partial index is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("error while reading dataset {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("error while reading dataset: {0}")]
    Read(#[source] io::Error),

    #[error("line {line} has {fields} fields, expected 12")]
    MalformedRecord { line: u64, fields: usize },

    #[error("line {line}: error while converting {value} to {coordinate}")]
    NumericFormat {
        line: u64,
        coordinate: Coordinate,
        value: String,
    },

    #[error("country must be a 2 character ISO country code, got '{value}'")]
    InvalidCountry { value: String },

    #[error("line {line} is not valid UTF-8")]
    Encoding { line: u64 },
}

impl LoadError {
    /// True for failures of the underlying source rather than its content
    pub fn is_io(&self) -> bool {
        matches!(self, LoadError::Io { .. } | LoadError::Read(_))
    }

    pub(crate) fn with_path(self, path: PathBuf) -> Self {
        match self {
            LoadError::Read(source) => LoadError::Io { path, source },
            other => other,
        }
    }
}
