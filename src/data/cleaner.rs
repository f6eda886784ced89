//! Data Cleaner Module
//! Prunes, types, deduplicates and filters the raw movie frame.
//!
//! Step order is fixed: duplicates are removed before zero budgets/revenues
//! are turned into nulls, and nulls are dropped last.

use super::schema::{self, BUDGET_ADJ, REVENUE_ADJ};
use polars::prelude::*;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Column '{column}' could not be cast to {dtype}: {source}")]
    Cast {
        column: String,
        dtype: String,
        source: PolarsError,
    },
    #[error("No rows left after the {step} step")]
    EmptyResult { step: CleaningStep },
    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },
    #[error("Invalid release date '{value}' at row {row}")]
    InvalidDate { row: usize, value: String },
}

/// Cleaning step that can leave the table empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningStep {
    Load,
    DropMissing,
}

impl fmt::Display for CleaningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CleaningStep::Load => "load",
            CleaningStep::DropMissing => "drop-missing",
        };
        f.write_str(name)
    }
}

/// Row counts recorded while cleaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleaningReport {
    pub raw_rows: usize,
    pub dropped_columns: Vec<String>,
    pub duplicate_rows: usize,
    pub zero_budget_rows: usize,
    pub zero_revenue_rows: usize,
    pub rows_with_missing: usize,
    pub cleaned_rows: usize,
}

/// Handles the frame-level cleaning steps.
pub struct DataCleaner;

impl DataCleaner {
    /// Run every frame-level cleaning step and report row counts.
    pub fn clean(raw: &DataFrame) -> Result<(DataFrame, CleaningReport), CleanerError> {
        let mut report = CleaningReport {
            raw_rows: raw.height(),
            ..Default::default()
        };
        Self::ensure_rows(raw, CleaningStep::Load)?;

        report.dropped_columns = schema::DROPPED_COLUMNS
            .iter()
            .filter(|name| raw.column(name).is_ok())
            .map(|name| name.to_string())
            .collect();
        let typed = Self::prune_and_cast(raw)?;

        let deduped = Self::drop_duplicates(&typed)?;
        report.duplicate_rows = typed.height() - deduped.height();
        if report.duplicate_rows > 0 {
            warn!("Removed {} duplicate rows", report.duplicate_rows);
        }

        report.zero_budget_rows = Self::count_zeros(&deduped, BUDGET_ADJ)?;
        report.zero_revenue_rows = Self::count_zeros(&deduped, REVENUE_ADJ)?;
        let cleaned = Self::drop_missing(&deduped)?;
        report.rows_with_missing = deduped.height() - cleaned.height();
        report.cleaned_rows = cleaned.height();

        info!(
            "Cleaned {} -> {} rows ({} duplicates, {} with missing or zero values)",
            report.raw_rows, report.cleaned_rows, report.duplicate_rows, report.rows_with_missing
        );
        debug!("Cleaning report: {:?}", report);

        Self::ensure_rows(&cleaned, CleaningStep::DropMissing)?;
        Ok((cleaned, report))
    }

    /// Keep only the retained columns, strictly cast to their typed schema.
    pub fn prune_and_cast(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        let mut pruned = df.select(schema::retained_columns().iter().map(|(name, _)| *name))?;

        for (name, dtype) in schema::retained_columns() {
            let column = pruned.column(name)?;
            if column.dtype() == &dtype {
                continue;
            }
            let cast = column
                .as_materialized_series()
                .strict_cast(&dtype)
                .map_err(|source| CleanerError::Cast {
                    column: name.to_string(),
                    dtype: dtype.to_string(),
                    source,
                })?;
            pruned.with_column(cast)?;
        }

        Ok(pruned)
    }

    /// Remove exact-duplicate rows, keeping the first occurrence.
    pub fn drop_duplicates(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        Ok(df.unique_stable(None, UniqueKeepStrategy::First, None)?)
    }

    /// Treat zero adjusted budget/revenue as missing, then drop rows with any null.
    pub fn drop_missing(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        let cleaned = df
            .clone()
            .lazy()
            .with_columns([Self::zero_as_null(BUDGET_ADJ), Self::zero_as_null(REVENUE_ADJ)])
            .drop_nulls(None)
            .collect()?;
        Ok(cleaned)
    }

    fn zero_as_null(name: &str) -> Expr {
        when(col(name).eq(lit(0.0)))
            .then(lit(NULL).cast(DataType::Float64))
            .otherwise(col(name))
            .alias(name)
    }

    fn count_zeros(df: &DataFrame, name: &str) -> Result<usize, CleanerError> {
        let values = df.column(name)?.as_materialized_series().f64()?;
        Ok(values.into_iter().filter(|v| *v == Some(0.0)).count())
    }

    fn ensure_rows(df: &DataFrame, step: CleaningStep) -> Result<(), CleanerError> {
        if df.height() == 0 {
            Err(CleanerError::EmptyResult { step })
        } else {
            Ok(())
        }
    }
}
