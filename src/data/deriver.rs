//! Derived Columns
//! Adds the profit metric to the cleaned frame.

use super::schema::{BUDGET_ADJ, PROFIT, REVENUE_ADJ};
use polars::prelude::*;

pub struct Deriver;

impl Deriver {
    /// `profit = revenue_adj - budget_adj` for every row.
    pub fn add_profit(df: &DataFrame) -> PolarsResult<DataFrame> {
        df.clone()
            .lazy()
            .with_column((col(REVENUE_ADJ) - col(BUDGET_ADJ)).alias(PROFIT))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profit_is_revenue_minus_budget() {
        let df = df!(
            "budget_adj" => [10.0, 50.0, 0.1],
            "revenue_adj" => [100.0, 30.0, 0.3]
        )
        .unwrap();

        let derived = Deriver::add_profit(&df).unwrap();
        let profit: Vec<f64> = derived
            .column(PROFIT)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();

        assert_eq!(profit, vec![90.0, -20.0, 0.3 - 0.1]);
        assert_eq!(derived.width(), 3);
    }
}
