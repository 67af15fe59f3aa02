//! CSV parsing into return tables.

use crate::error::{DataError, Result};
use chrono::NaiveDate;
use hobart_returns::{DatedSeries, ReturnTable};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Date format of the input tables: day-month-year.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse one return table from CSV.
///
/// The first header cell names the date column (its text is ignored); every
/// remaining header cell names a return series, in declared order. Blank
/// cells and cells that parse to a non-finite float are missing
/// observations. An unparseable date or return cell aborts the load of the
/// whole table.
pub fn read_return_table<R: Read>(reader: R, table_name: &str) -> Result<ReturnTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.len() < 2 {
        return Err(DataError::NoReturnColumns {
            table: table_name.to_string(),
        });
    }
    let column_names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

    let mut observations: Vec<Vec<(NaiveDate, Option<f64>)>> =
        vec![Vec::new(); column_names.len()];
    let mut rows = 0usize;

    for (record_idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = record_idx + 2;

        let raw_date = record.get(0).unwrap_or("");
        let date =
            NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|_| DataError::BadDate {
                table: table_name.to_string(),
                row,
                value: raw_date.to_string(),
            })?;

        for (col_idx, column) in column_names.iter().enumerate() {
            let cell = record.get(col_idx + 1).unwrap_or("");
            let value = parse_cell(cell).map_err(|_| DataError::BadValue {
                table: table_name.to_string(),
                row,
                column: column.clone(),
                value: cell.to_string(),
            })?;
            observations[col_idx].push((date, value));
        }
        rows += 1;
    }

    let mut columns = Vec::with_capacity(column_names.len());
    for (name, cells) in column_names.into_iter().zip(observations) {
        columns.push(DatedSeries::new(name, cells)?);
    }
    let table = ReturnTable::new(table_name, columns)?;

    tracing::debug!(
        table = table_name,
        columns = table.len(),
        rows,
        "loaded return table"
    );
    Ok(table)
}

/// Load one return table from a CSV file on disk.
pub fn load_return_table(path: &Path, table_name: &str) -> Result<ReturnTable> {
    let file = File::open(path)?;
    read_return_table(file, table_name)
}

/// Load the basket universe and the benchmark universe tables.
pub fn load_universes(
    basket_path: &Path,
    benchmark_path: &Path,
) -> Result<(ReturnTable, ReturnTable)> {
    let baskets = load_return_table(basket_path, "baskets")?;
    let benchmarks = load_return_table(benchmark_path, "benchmarks")?;
    Ok((baskets, benchmarks))
}

/// Blank cells are missing; parsed non-finite values are treated the same
/// way, mirroring a drop-NaN source.
fn parse_cell(cell: &str) -> std::result::Result<Option<f64>, std::num::ParseFloatError> {
    if cell.is_empty() {
        return Ok(None);
    }
    let value: f64 = cell.parse()?;
    Ok(value.is_finite().then_some(value))
}
