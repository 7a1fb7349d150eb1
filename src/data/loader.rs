//! CSV Data Loader Module
//! Handles CSV file loading and the bundled-sample fallback using Polars.

use anyhow::Context;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sample dataset shipped with the app, used when nothing was uploaded.
const SAMPLE_CSV_PATH: &str = "assets/sample_data.csv";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// Holds the one dataset the app works on at a time.
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Locate the bundled sample CSV. Errors when the app ships without one,
    /// in which case the viewer halts until the user picks a file.
    pub fn find_sample_csv() -> anyhow::Result<PathBuf> {
        let path = PathBuf::from(SAMPLE_CSV_PATH);
        std::fs::metadata(&path)
            .with_context(|| format!("bundled sample not found at {}", path.display()))?;
        Ok(path)
    }

    /// Load a CSV file using Polars.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Set DataFrame directly (used for async loading)
    pub fn set_dataframe(&mut self, df: DataFrame) {
        self.df = Some(df);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_bundled_sample() {
        let path = DataLoader::find_sample_csv().unwrap();
        let mut loader = DataLoader::new();
        let df = loader.load_csv(&path).unwrap();
        assert_eq!(df.height(), 20);

        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        for required in ["Category", "Value", "Year", "Latitude", "Longitude"] {
            assert!(columns.iter().any(|c| c == required), "missing {required}");
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut loader = DataLoader::new();
        let result = loader.load_csv(Path::new("assets/no_such_file.csv"));
        assert!(result.is_err());
        assert!(loader.get_dataframe().is_none());
    }

    #[test]
    fn sample_fallback_is_discoverable() {
        let path = DataLoader::find_sample_csv().unwrap();
        assert!(path.ends_with("sample_data.csv"));
    }
}
