//! Stats module - Aggregations, descriptive statistics and correlation

mod aggregator;
mod calculator;
mod correlation;

pub use aggregator::{
    tokens, Aggregator, CategoryField, DirectorPopularity, ProfitExtremes, TitleProfit,
    TokenCount, YearlyCount, YearlyValue,
};
pub use calculator::{ColumnSummary, StatsCalculator};
pub use correlation::{pearson, CorrelationMatrix};
