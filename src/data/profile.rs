//! Raw Data Profile
//! General properties of the loaded frame before any cleaning.

use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub numeric: bool,
    pub null_count: usize,
}

/// Shape, per-column null counts and duplicate count of a raw frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataProfile {
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
    pub duplicate_rows: usize,
}

impl DataProfile {
    pub fn from_raw(df: &DataFrame) -> PolarsResult<Self> {
        let columns = df
            .get_columns()
            .iter()
            .map(|col| ColumnProfile {
                name: col.name().to_string(),
                dtype: col.dtype().to_string(),
                numeric: is_numeric(col.dtype()),
                null_count: col.null_count(),
            })
            .collect();

        let unique = df.unique_stable(None, UniqueKeepStrategy::First, None)?;

        Ok(Self {
            rows: df.height(),
            columns,
            duplicate_rows: df.height() - unique.height(),
        })
    }

    /// Names of the numeric columns.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.numeric)
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn total_nulls(&self) -> usize {
        self.columns.iter().map(|c| c.null_count).sum()
    }
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}
