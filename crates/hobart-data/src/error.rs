//! Error types for table loading.

use thiserror::Error;

/// Result type for table loading.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading return tables.
///
/// Every variant is fatal: a table either loads completely or the whole
/// load step fails.
#[derive(Debug, Error)]
pub enum DataError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A date cell could not be parsed as day-month-year
    #[error("table \"{table}\" row {row}: unparseable date \"{value}\"")]
    BadDate {
        /// Table being loaded
        table: String,
        /// 1-based source row (the header is row 1)
        row: usize,
        /// The offending cell text
        value: String,
    },

    /// A return cell was neither blank nor a number
    #[error("table \"{table}\" row {row}, column \"{column}\": unparseable return \"{value}\"")]
    BadValue {
        /// Table being loaded
        table: String,
        /// 1-based source row (the header is row 1)
        row: usize,
        /// Column the cell belongs to
        column: String,
        /// The offending cell text
        value: String,
    },

    /// The header declares no return columns
    #[error("table \"{table}\" has no return columns")]
    NoReturnColumns {
        /// Table being loaded
        table: String,
    },

    /// Series construction error (duplicate dates)
    #[error("series error: {0}")]
    Series(#[from] hobart_returns::SeriesError),

    /// Table assembly error (duplicate column names)
    #[error("table error: {0}")]
    Table(#[from] hobart_returns::TableError),
}
