//! Correlation Module
//! Pairwise Pearson correlation between the numeric movie columns.

use super::StatsCalculator;
use crate::data::{schema::NUMERIC_COLUMNS, MovieRecord};
use rayon::prelude::*;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Symmetric correlation matrix; `values[i][j]` pairs `columns[i]` with `columns[j]`.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlate every pair of numeric columns.
    pub fn compute(records: &[MovieRecord]) -> Self {
        let data: Vec<Vec<f64>> = NUMERIC_COLUMNS
            .iter()
            .map(|column| StatsCalculator::column_values(records, column))
            .collect();
        let n = data.len();

        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i..n).map(move |j| (i, j)))
            .collect();
        let coefficients: Vec<(usize, usize, f64)> = pairs
            .par_iter()
            .map(|&(i, j)| {
                let r = if i == j {
                    self_correlation(&data[i])
                } else {
                    pearson(&data[i], &data[j])
                };
                (i, j, r)
            })
            .collect();

        let mut values = vec![vec![f64::NAN; n]; n];
        for (i, j, r) in coefficients {
            values[i][j] = r;
            values[j][i] = r;
        }

        Self {
            columns: NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect(),
            values,
        }
    }

    /// Coefficient for a pair of columns by name.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }
}

/// Pearson correlation coefficient; NaN when either side has no variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }
    let sx = x.std_dev();
    let sy = y.std_dev();
    if !(sx > 0.0 && sy > 0.0) {
        return f64::NAN;
    }
    (x.covariance(y) / (sx * sy)).clamp(-1.0, 1.0)
}

fn self_correlation(x: &[f64]) -> f64 {
    if x.len() > 1 && x.variance() > 0.0 {
        1.0
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pearson_of_linear_relations() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert!((pearson(&x, &[2.0, 4.0, 6.0, 8.0]) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &[8.0, 6.0, 4.0, 2.0]) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_column_has_no_correlation() {
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(self_correlation(&[5.0, 5.0]).is_nan());
    }

    #[test]
    fn mismatched_or_short_inputs_are_nan() {
        assert!(pearson(&[1.0], &[1.0]).is_nan());
        assert!(pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_nan());
    }
}
