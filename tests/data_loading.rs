//! Integration tests for loading the historical data file from disk.

mod common;

use common::write_csv;
use indoc::indoc;
use medcost::data::{load_historical, DataView};
use medcost::errors::Error;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_full_file_loads_table_and_scatter() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(
        temp.path(),
        "Regression.csv",
        indoc! {"
            age,sex,bmi,children,smoker,region,predicted_cost
            19,0,27.9,0,1,3,6590.0
            33,1,22.7,0,0,1,6770.0
            58,0,38.0,2,0,0,16400.0
        "},
    );

    let view = DataView::load(&path);
    assert!(view.error.is_none());
    let table = view.table.as_ref().unwrap();
    assert_eq!(table.headers().len(), 7);
    assert_eq!(table.rows().len(), 3);

    let scatter = view.scatter.as_ref().unwrap();
    assert_eq!(scatter.len(), 3);
    assert_eq!(scatter[2].age, 58.0);
    assert_eq!(scatter[2].bmi, Some(38.0));
}

#[test]
fn test_missing_file_message() {
    let temp = TempDir::new().unwrap();
    let view = DataView::load(&temp.path().join("Regression.csv"));

    assert!(view.table.is_none());
    assert_eq!(
        view.error_message().unwrap(),
        "File 'Regression.csv' was not found. Make sure it is in the same directory as the application."
    );
}

#[test]
fn test_missing_columns_message_and_no_points() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(temp.path(), "Regression.csv", "age,bmi\n30,25.0\n");

    let view = DataView::load(&path);
    assert!(view.table.is_some());
    assert!(view.scatter.is_none());
    match &view.error {
        Some(Error::MissingColumns { columns, .. }) => {
            assert_eq!(columns, &vec!["predicted_cost".to_string()]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        view.error_message().unwrap(),
        "Column 'age' or 'predicted_cost' was not found in the data."
    );
}

#[test]
fn test_bmi_column_is_optional() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(temp.path(), "data.csv", "age,predicted_cost\n30,8500\n");

    let points = load_historical(&path).unwrap().scatter_points().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].bmi, None);
}

#[test]
fn test_ragged_rows_are_a_load_error() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(
        temp.path(),
        "Regression.csv",
        "age,predicted_cost\n30,8500\n40\n",
    );

    let err = load_historical(&path).unwrap_err();
    assert!(matches!(err, Error::DataLoad { .. }));
    assert!(err
        .to_string()
        .starts_with("An error occurred while loading the data: "));
}

#[test]
fn test_non_numeric_cost_reported_with_row() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(
        temp.path(),
        "Regression.csv",
        "age,predicted_cost\n30,8500\n41,lots\n",
    );

    let view = DataView::load(&path);
    assert!(view.scatter.is_none());
    let message = view.error_message().unwrap();
    assert!(message.contains("row 2"), "{}", message);
    assert!(message.contains("'lots'"), "{}", message);
}

#[test]
fn test_directory_instead_of_file_is_not_fatal() {
    let temp = TempDir::new().unwrap();
    let view = DataView::load(temp.path());
    assert!(view.table.is_none());
    assert!(view.error.is_some());
}
