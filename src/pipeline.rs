//! Analysis Pipeline
//! Load -> clean -> derive -> aggregate, ending in an `AnalysisReport`.

use crate::config::RunSettings;
use crate::data::{
    CleanerError, CleaningReport, CleaningStep, DataCleaner, DataLoader, DataProfile, Deriver,
    MovieTable,
};
use crate::error::Result;
use crate::report::AnalysisReport;
use crate::stats::{Aggregator, CategoryField, CorrelationMatrix, StatsCalculator};
use std::path::Path;
use tracing::{debug, info};

/// Cleaned table plus what was learned while building it.
pub struct PreparedData {
    pub profile: DataProfile,
    pub cleaning: CleaningReport,
    pub table: MovieTable,
}

pub struct Pipeline;

impl Pipeline {
    /// Load the raw file and profile it without cleaning.
    pub fn profile(input: &Path) -> Result<DataProfile> {
        let mut loader = DataLoader::new();
        let raw = loader.load_csv(input)?;
        Ok(DataProfile::from_raw(raw)?)
    }

    /// Load, clean, derive profit and materialize the typed table.
    pub fn prepare(input: &Path) -> Result<PreparedData> {
        let mut loader = DataLoader::new();
        let raw = loader.load_csv(input)?;
        let profile = DataProfile::from_raw(raw)?;
        debug!(
            "Raw profile: {} rows, {} nulls, {} duplicates",
            profile.rows,
            profile.total_nulls(),
            profile.duplicate_rows
        );

        let (cleaned, cleaning) = DataCleaner::clean(raw)?;
        let derived = Deriver::add_profit(&cleaned)?;
        let table = MovieTable::from_frame(&derived)?;
        info!("Prepared {} movies for analysis", table.records().len());

        Ok(PreparedData {
            profile,
            cleaning,
            table,
        })
    }

    /// Answer every question over the prepared table.
    pub fn analyze(prepared: PreparedData, source: &Path, top_n: usize) -> Result<AnalysisReport> {
        let records = prepared.table.records();
        let profit_extremes = Aggregator::profit_extremes(records).ok_or(
            CleanerError::EmptyResult {
                step: CleaningStep::DropMissing,
            },
        )?;

        let ((summary, correlation), (rankings, frequencies)) = rayon::join(
            || {
                rayon::join(
                    || StatsCalculator::describe(records),
                    || CorrelationMatrix::compute(records),
                )
            },
            || {
                rayon::join(
                    || {
                        (
                            Aggregator::top_profit(records, top_n),
                            Aggregator::director_popularity(records, top_n),
                        )
                    },
                    || {
                        (
                            Aggregator::keyword_frequency(records),
                            Aggregator::category_frequency(records, CategoryField::Genres),
                            Aggregator::category_frequency(
                                records,
                                CategoryField::ProductionCompanies,
                            ),
                        )
                    },
                )
            },
        );
        let (top_profit, director_popularity) = rankings;
        let (keyword_frequency, genre_frequency, production_company_frequency) = frequencies;
        let yearly_counts = Aggregator::yearly_counts(records);

        info!(
            "Aggregated {} years, {} genres, {} companies, {} keywords",
            yearly_counts.len(),
            genre_frequency.len(),
            production_company_frequency.len(),
            keyword_frequency.len()
        );

        Ok(AnalysisReport {
            source: source.display().to_string(),
            top_n,
            profile: prepared.profile,
            cleaning: prepared.cleaning,
            summary,
            yearly_mean_budget: Aggregator::yearly_mean_budget(records),
            profit_extremes,
            top_profit,
            keyword_frequency,
            correlation,
            yearly_counts,
            genre_frequency,
            production_company_frequency,
            director_popularity,
        })
    }

    /// Full run: validate settings, prepare and analyze.
    pub fn run(settings: &RunSettings) -> Result<AnalysisReport> {
        settings.validate()?;
        let prepared = Self::prepare(&settings.input)?;
        Self::analyze(prepared, &settings.input, settings.top_n)
    }
}
