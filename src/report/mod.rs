//! Report module - Aggregate results and their export

mod exporter;

pub use exporter::{ExportError, ExportManifest, ReportExporter};

use crate::data::{CleaningReport, DataProfile};
use crate::stats::{
    ColumnSummary, CorrelationMatrix, DirectorPopularity, ProfitExtremes, TitleProfit,
    TokenCount, YearlyCount, YearlyValue,
};
use serde::Serialize;

/// Everything one run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub top_n: usize,
    pub profile: DataProfile,
    pub cleaning: CleaningReport,
    pub summary: Vec<ColumnSummary>,
    pub yearly_mean_budget: Vec<YearlyValue>,
    pub profit_extremes: ProfitExtremes,
    pub top_profit: Vec<TitleProfit>,
    pub keyword_frequency: Vec<TokenCount>,
    pub correlation: CorrelationMatrix,
    pub yearly_counts: Vec<YearlyCount>,
    pub genre_frequency: Vec<TokenCount>,
    pub production_company_frequency: Vec<TokenCount>,
    pub director_popularity: Vec<DirectorPopularity>,
}
