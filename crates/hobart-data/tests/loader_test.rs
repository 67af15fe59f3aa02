//! Integration tests for CSV table loading.

use chrono::NaiveDate;
use hobart_data::{DataError, read_return_table};
use rstest::rstest;

fn date(day: u32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

#[test]
fn test_full_table_load() {
    let csv = "\
Date,Momentum,Value
02-01-2024,0.0112,-0.0008
03-01-2024,,0.0041
04-01-2024,0.0013,0.0022
";

    let table = read_return_table(csv.as_bytes(), "baskets").unwrap();

    assert_eq!(table.name(), "baskets");
    assert_eq!(table.column_names(), vec!["Momentum", "Value"]);

    let momentum = table.series("Momentum").unwrap();
    assert_eq!(
        momentum.dates().collect::<Vec<_>>(),
        vec![date(2, 1), date(4, 1)]
    );
    assert_eq!(momentum.points()[0].1, 0.0112);

    let value = table.series("Value").unwrap();
    assert_eq!(value.len(), 3);
}

#[test]
fn test_day_month_year_parsing() {
    let csv = "Date,Momentum\n31-12-2024,0.01\n";

    let table = read_return_table(csv.as_bytes(), "baskets").unwrap();

    assert_eq!(
        table.series("Momentum").unwrap().first_date(),
        Some(date(31, 12))
    );
}

#[rstest]
#[case::iso_order("2024-01-02")]
#[case::slashes("02/01/2024")]
#[case::text("yesterday")]
#[case::blank("")]
fn test_unparseable_date_aborts_load(#[case] raw: &str) {
    let csv = format!("Date,Momentum\n{raw},0.01\n");

    let err = read_return_table(csv.as_bytes(), "baskets").unwrap_err();

    match err {
        DataError::BadDate { table, row, value } => {
            assert_eq!(table, "baskets");
            assert_eq!(row, 2);
            assert_eq!(value, raw);
        }
        other => panic!("expected BadDate, got {other:?}"),
    }
}

#[test]
fn test_unparseable_value_aborts_load() {
    let csv = "Date,Momentum,Value\n02-01-2024,0.01,n/a\n";

    let err = read_return_table(csv.as_bytes(), "baskets").unwrap_err();

    match err {
        DataError::BadValue { row, column, value, .. } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Value");
            assert_eq!(value, "n/a");
        }
        other => panic!("expected BadValue, got {other:?}"),
    }
}

#[test]
fn test_non_finite_cells_treated_as_missing() {
    let csv = "Date,Momentum\n02-01-2024,NaN\n03-01-2024,0.01\n";

    let table = read_return_table(csv.as_bytes(), "baskets").unwrap();

    let momentum = table.series("Momentum").unwrap();
    assert_eq!(momentum.dates().collect::<Vec<_>>(), vec![date(3, 1)]);
}

#[test]
fn test_duplicate_date_rejected() {
    let csv = "Date,Momentum\n02-01-2024,0.01\n02-01-2024,0.02\n";

    let err = read_return_table(csv.as_bytes(), "baskets").unwrap_err();

    assert!(matches!(err, DataError::Series(_)));
}

#[test]
fn test_duplicate_column_rejected() {
    let csv = "Date,Momentum,Momentum\n02-01-2024,0.01,0.02\n";

    let err = read_return_table(csv.as_bytes(), "baskets").unwrap_err();

    assert!(matches!(err, DataError::Table(_)));
}

#[test]
fn test_table_without_return_columns_rejected() {
    let csv = "Date\n02-01-2024\n";

    let err = read_return_table(csv.as_bytes(), "baskets").unwrap_err();

    assert!(matches!(err, DataError::NoReturnColumns { .. }));
}

#[test]
fn test_header_only_table_has_empty_series() {
    let csv = "Date,Momentum,Value\n";

    let table = read_return_table(csv.as_bytes(), "baskets").unwrap();

    assert_eq!(table.len(), 2);
    assert!(table.series("Momentum").unwrap().is_empty());
}

#[test]
fn test_whitespace_trimmed() {
    let csv = "Date, Momentum\n02-01-2024 , 0.01 \n";

    let table = read_return_table(csv.as_bytes(), "baskets").unwrap();

    let momentum = table.series("Momentum").unwrap();
    assert_eq!(momentum.points(), &[(date(2, 1), 0.01)]);
}
