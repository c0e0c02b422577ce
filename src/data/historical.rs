//! Loader for the historical predictions CSV.
//!
//! The table is kept as raw strings for display. Typed scatter points are
//! extracted separately, so a file without the chart columns can still be
//! shown as a table.

use crate::errors::{Error, Result, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

/// One point of the age vs predicted cost scatter chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub age: f64,
    pub predicted_cost: f64,
    /// Colour and size channel; absent when the file has no `bmi` column.
    pub bmi: Option<f64>,
}

/// Raw contents of the data file.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalTable {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl HistoricalTable {
    /// Parse CSV text from any reader.
    pub fn from_reader<R: Read>(path: impl Into<PathBuf>, reader: R) -> Result<Self> {
        let path = path.into();
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::data_load(&path, e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let rows = csv_reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
                    .map_err(|e| Error::data_load(&path, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(columns = headers.len(), rows = rows.len(), "Parsed data file");
        Ok(Self {
            path,
            headers,
            rows,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Required columns absent from the header row.
    pub fn missing_required_columns(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|c| self.column_index(c).is_none())
            .map(|c| c.to_string())
            .collect()
    }

    /// Extract scatter points.
    ///
    /// Rows with an empty age or cost cell are skipped. Non-numeric cells are
    /// a load error.
    pub fn scatter_points(&self) -> Result<Vec<ScatterPoint>> {
        let missing = self.missing_required_columns();
        let (Some(age_idx), Some(cost_idx)) = (
            self.column_index("age"),
            self.column_index("predicted_cost"),
        ) else {
            return Err(Error::MissingColumns {
                path: self.path.clone(),
                columns: missing,
            });
        };
        let bmi_idx = self.column_index("bmi");

        let mut points = Vec::with_capacity(self.rows.len());
        for (line, row) in self.rows.iter().enumerate() {
            let age = self.parse_cell(row, age_idx, "age", line)?;
            let cost = self.parse_cell(row, cost_idx, "predicted_cost", line)?;
            let bmi = match bmi_idx {
                Some(idx) => self.parse_cell(row, idx, "bmi", line)?,
                None => None,
            };

            if let (Some(age), Some(predicted_cost)) = (age, cost) {
                points.push(ScatterPoint {
                    age,
                    predicted_cost,
                    bmi,
                });
            }
        }
        Ok(points)
    }

    fn parse_cell(
        &self,
        row: &[String],
        idx: usize,
        column: &str,
        line: usize,
    ) -> Result<Option<f64>> {
        let Some(cell) = row.get(idx).filter(|c| !c.is_empty()) else {
            return Ok(None);
        };
        cell.parse::<f64>().map(Some).map_err(|_| {
            Error::data_load(
                &self.path,
                format!("row {}: invalid {} value '{}'", line + 1, column, cell),
            )
        })
    }
}

/// Load the data file at `path`.
pub fn load_historical(path: &Path) -> Result<HistoricalTable> {
    let _span = info_span!("load_historical", path = %path.display()).entered();

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::DataFileMissing {
            path: path.to_path_buf(),
        },
        _ => Error::data_load(path, e.to_string()),
    })?;

    HistoricalTable::from_reader(path, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn table(csv: &str) -> Result<HistoricalTable> {
        HistoricalTable::from_reader("Regression.csv", csv.as_bytes())
    }

    #[test]
    fn test_parses_headers_and_rows() {
        let t = table(indoc! {"
            age,bmi,predicted_cost,region
            30,25.0,8500,0
            45, 31.2 ,12120,2
        "})
        .unwrap();
        assert_eq!(t.headers(), ["age", "bmi", "predicted_cost", "region"]);
        assert_eq!(t.rows().len(), 2);
        assert_eq!(t.rows()[1][1], "31.2");
    }

    #[test]
    fn test_scatter_points_with_bmi() {
        let t = table("age,bmi,predicted_cost\n30,25.0,8500\n40,,9000\n").unwrap();
        let points = t.scatter_points().unwrap();
        assert_eq!(
            points,
            vec![
                ScatterPoint {
                    age: 30.0,
                    predicted_cost: 8500.0,
                    bmi: Some(25.0)
                },
                ScatterPoint {
                    age: 40.0,
                    predicted_cost: 9000.0,
                    bmi: None
                },
            ]
        );
    }

    #[test]
    fn test_missing_columns_reported() {
        let t = table("age,bmi\n30,25.0\n").unwrap();
        match t.scatter_points() {
            Err(Error::MissingColumns { columns, .. }) => {
                assert_eq!(columns, vec!["predicted_cost".to_string()])
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_required_cell_skips_row() {
        let t = table("age,predicted_cost\n,8500\n50,11000\n").unwrap();
        let points = t.scatter_points().unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].bmi, None);
    }

    #[test]
    fn test_non_numeric_cell_is_load_error() {
        let t = table("age,predicted_cost\nthirty,8500\n").unwrap();
        let err = t.scatter_points().unwrap_err();
        assert!(matches!(err, Error::DataLoad { .. }));
        assert!(err.to_string().contains("invalid age value 'thirty'"));
    }

    #[test]
    fn test_ragged_rows_are_load_error() {
        let err = table("age,predicted_cost\n30,8500,extra\n").unwrap_err();
        assert!(matches!(err, Error::DataLoad { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_historical(Path::new("/definitely/not/here/Regression.csv")).unwrap_err();
        assert!(matches!(err, Error::DataFileMissing { .. }));
    }
}
