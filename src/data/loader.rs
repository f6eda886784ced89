//! CSV Data Loader Module
//! Handles loading the movie CSV into a Polars DataFrame and checking its header.

use super::schema;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to parse CSV {path}: {source}")]
    Csv { path: PathBuf, source: PolarsError },
    #[error("CSV header is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Handles CSV file loading with Polars; owns the raw frame it loaded.
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

    /// Load a CSV file using Polars and verify the retained columns are present.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }

        let csv_error = |source| LoaderError::Csv {
            path: file_path.to_path_buf(),
            source,
        };
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()
            .map_err(csv_error)?
            .collect()
            .map_err(csv_error)?;

        Self::check_header(&df)?;
        info!(
            "Loaded {} rows x {} columns from {}",
            df.height(),
            df.width(),
            file_path.display()
        );

        Ok(self.df.insert(df))
    }

    /// Every retained column must be present; dropped columns are optional.
    fn check_header(df: &DataFrame) -> Result<(), LoaderError> {
        let present = df.get_column_names();
        let missing: Vec<String> = schema::retained_columns()
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| !present.iter().any(|p| p.as_str() == *name))
            .map(str::to_string)
            .collect();

        let absent: Vec<&str> = schema::DROPPED_COLUMNS
            .iter()
            .copied()
            .filter(|name| !present.iter().any(|p| p.as_str() == *name))
            .collect();
        if !absent.is_empty() {
            warn!("Header lacks columns that cleaning would drop: {:?}", absent);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            debug!("Header columns: {:?}", present);
            Err(LoaderError::MissingColumns(missing))
        }
    }
}
