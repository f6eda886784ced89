//! Error Types
//! Crate-level error folding the per-module loader, cleaner and exporter errors.

use crate::data::{CleanerError, LoaderError};
use crate::report::ExportError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Output path is not a directory: {0}")]
    OutputNotDirectory(PathBuf),

    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error(transparent)]
    Cleaner(#[from] CleanerError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
