//! Data behind the User Data page: the optional historical file and the
//! simulated cost distribution.

pub mod distribution;
pub mod historical;
pub mod simulated;

pub use distribution::{density_curve, scott_bandwidth, Histogram};
pub use historical::{load_historical, HistoricalTable, ScatterPoint};
pub use simulated::{normal_samples, SimulatedDistribution};

use crate::errors::Error;
use std::path::Path;
use tracing::warn;

/// Outcome of loading the data file for display.
///
/// A missing file leaves `table` empty. Missing chart columns keep the table
/// but leave `scatter` empty. Either way `error` holds the user message.
#[derive(Debug)]
pub struct DataView {
    pub table: Option<HistoricalTable>,
    pub scatter: Option<Vec<ScatterPoint>>,
    pub error: Option<Error>,
}

impl DataView {
    pub fn load(path: &Path) -> Self {
        let table = match load_historical(path) {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Data file unavailable");
                return Self {
                    table: None,
                    scatter: None,
                    error: Some(e),
                };
            }
        };

        match table.scatter_points() {
            Ok(points) => Self {
                table: Some(table),
                scatter: Some(points),
                error: None,
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Scatter chart unavailable");
                Self {
                    table: Some(table),
                    scatter: None,
                    error: Some(e),
                }
            }
        }
    }

    /// Message to show in place of the scatter chart.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_view() {
        let temp = TempDir::new().unwrap();
        let view = DataView::load(&temp.path().join("Regression.csv"));
        assert!(view.table.is_none());
        assert!(view.scatter.is_none());
        assert!(matches!(view.error, Some(Error::DataFileMissing { .. })));
    }

    #[test]
    fn test_missing_columns_keeps_table() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Regression.csv");
        fs::write(&path, "age,bmi\n30,25\n").unwrap();

        let view = DataView::load(&path);
        assert_eq!(view.table.as_ref().map(|t| t.rows().len()), Some(1));
        assert!(view.scatter.is_none());
        assert!(matches!(view.error, Some(Error::MissingColumns { .. })));
    }

    #[test]
    fn test_complete_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Regression.csv");
        fs::write(&path, "age,bmi,predicted_cost\n30,25,8500\n").unwrap();

        let view = DataView::load(&path);
        assert!(view.error.is_none());
        assert_eq!(view.scatter.map(|p| p.len()), Some(1));
    }
}
