//! CSV loading and saving utilities

use crate::error::{BinclassError, Result};
use polars::prelude::*;
use std::fs::File;

/// CSV data loader
pub struct DataLoader;

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    /// Create a new data loader
    pub fn new() -> Self {
        Self
    }

    /// Load a CSV file with a header row and inferred schema
    pub fn load_csv(&self, path: &str) -> Result<DataFrame> {
        let file = File::open(path).map_err(|e| BinclassError::DataError(e.to_string()))?;

        let reader = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .into_reader_with_file_handle(file);

        reader
            .finish()
            .map_err(|e| BinclassError::DataError(e.to_string()))
    }

    /// Load a CSV file with specific parse options
    pub fn load_csv_with_options(
        &self,
        path: &str,
        delimiter: u8,
        has_header: bool,
        skip_rows: usize,
    ) -> Result<DataFrame> {
        let file = File::open(path).map_err(|e| BinclassError::DataError(e.to_string()))?;

        let parse_opts = CsvParseOptions::default().with_separator(delimiter);

        let reader = CsvReadOptions::default()
            .with_has_header(has_header)
            .with_skip_rows(skip_rows)
            .with_infer_schema_length(Some(100))
            .with_parse_options(parse_opts)
            .into_reader_with_file_handle(file);

        reader
            .finish()
            .map_err(|e| BinclassError::DataError(e.to_string()))
    }
}

/// CSV data saver
pub struct DataSaver;

impl DataSaver {
    /// Save a DataFrame to CSV
    pub fn save_csv(df: &mut DataFrame, path: &str) -> Result<()> {
        let mut file = File::create(path).map_err(|e| BinclassError::DataError(e.to_string()))?;

        CsvWriter::new(&mut file)
            .finish(df)
            .map_err(|e| BinclassError::DataError(e.to_string()))
    }
}
