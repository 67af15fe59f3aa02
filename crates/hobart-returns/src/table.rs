//! Load-once tables of named return series.

use crate::series::DatedSeries;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when assembling a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Two columns share one name.
    #[error("duplicate column \"{column}\" in table \"{table}\"")]
    DuplicateColumn {
        /// Table name.
        table: String,

        /// The repeated column name.
        column: String,
    },
}

/// An immutable collection of return series sharing one declared calendar.
///
/// Column order is preserved as declared by the source, so a selection
/// surface can present choices in their original order. Each column keeps
/// its own subset of valid dates. A table is constructed once per load and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnTable {
    name: String,
    columns: Vec<DatedSeries>,
}

impl ReturnTable {
    /// Assemble a table from its columns. Column names must be unique.
    pub fn new(name: impl Into<String>, columns: Vec<DatedSeries>) -> Result<Self, TableError> {
        let name = name.into();
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name() == column.name()) {
                return Err(TableError::DuplicateColumn {
                    table: name,
                    column: column.name().to_string(),
                });
            }
        }
        Ok(Self { name, columns })
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names in declared order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(DatedSeries::name).collect()
    }

    /// Look up a series by column name.
    pub fn series(&self, column: &str) -> Option<&DatedSeries> {
        self.columns.iter().find(|c| c.name() == column)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
