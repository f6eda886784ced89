//! Movie Insights - cleaning and exploratory analysis of the TMDB movie dataset.
//!
//! The pipeline loads the CSV with Polars, cleans and types it, derives profit,
//! and answers a fixed set of questions as serializable aggregates.

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use config::RunSettings;
pub use error::{AnalysisError, Result};
pub use pipeline::{Pipeline, PreparedData};
pub use report::{AnalysisReport, ExportManifest, ReportExporter};
