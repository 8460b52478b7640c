use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or reshaping a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{source_name}:{line}: expected {expected} fields, found {found}")]
    FieldCount {
        source_name: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{source_name}:{line}: column {column}: '{token}' is not a number")]
    InvalidNumber {
        source_name: String,
        line: usize,
        column: String,
        token: String,
    },

    #[error("column '{0}' not present in catalog")]
    MissingColumn(String),

    #[error("column '{column}' has {found} values but the catalog has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("I/O error reading catalog")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Whether this is a malformed-record error (as opposed to a missing file or I/O failure).
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            CatalogError::FieldCount { .. } | CatalogError::InvalidNumber { .. }
        )
    }
}
