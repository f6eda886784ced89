//! Report Exporter
//! Writes the analysis report as JSON plus one CSV per aggregate.

use super::AnalysisReport;
use crate::data::MovieRecord;
use crate::stats::TokenCount;
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV export error: {0}")]
    Polars(#[from] PolarsError),
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub output_dir: PathBuf,
    pub files: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ReportExporter {
    output_dir: PathBuf,
    pretty: bool,
}

impl ReportExporter {
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Result<Self, ExportError> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| ExportError::Io {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir, pretty })
    }

    /// Write `report.json` and every aggregate CSV.
    pub fn export(&self, report: &AnalysisReport) -> Result<ExportManifest, ExportError> {
        info!("Exporting report to {}", self.output_dir.display());
        let mut files = vec![self.write_json("report.json", report)?];

        files.push(self.write_csv(
            "yearly_mean_budget.csv",
            vec![
                Column::new(
                    "release_year".into(),
                    report.yearly_mean_budget.iter().map(|y| y.year).collect::<Vec<_>>(),
                ),
                Column::new(
                    "mean_budget_adj".into(),
                    report.yearly_mean_budget.iter().map(|y| y.value).collect::<Vec<_>>(),
                ),
            ],
        )?);

        let extremes = [
            ("most", &report.profit_extremes.most),
            ("least", &report.profit_extremes.least),
        ];
        files.push(self.write_csv("profit_extremes.csv", movie_columns(&extremes))?);

        files.push(self.write_csv(
            "top_profit.csv",
            vec![
                Column::new(
                    "rank".into(),
                    (1..=report.top_profit.len() as u64).collect::<Vec<_>>(),
                ),
                Column::new(
                    "original_title".into(),
                    report.top_profit.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
                ),
                Column::new(
                    "profit".into(),
                    report.top_profit.iter().map(|t| t.profit).collect::<Vec<_>>(),
                ),
            ],
        )?);

        files.push(self.write_csv(
            "keyword_frequency.csv",
            token_columns("keyword", &report.keyword_frequency),
        )?);

        let mut correlation = vec![Column::new(
            "column".into(),
            report.correlation.columns.clone(),
        )];
        for (j, name) in report.correlation.columns.iter().enumerate() {
            let values: Vec<f64> = report.correlation.values.iter().map(|row| row[j]).collect();
            correlation.push(Column::new(name.as_str().into(), values));
        }
        files.push(self.write_csv("correlation.csv", correlation)?);

        files.push(self.write_csv(
            "yearly_movie_counts.csv",
            vec![
                Column::new(
                    "release_year".into(),
                    report.yearly_counts.iter().map(|y| y.year).collect::<Vec<_>>(),
                ),
                Column::new(
                    "movie_count".into(),
                    report
                        .yearly_counts
                        .iter()
                        .map(|y| y.count as u64)
                        .collect::<Vec<_>>(),
                ),
            ],
        )?);

        files.push(self.write_csv(
            "genre_frequency.csv",
            token_columns("genre", &report.genre_frequency),
        )?);
        files.push(self.write_csv(
            "production_company_frequency.csv",
            token_columns("production_company", &report.production_company_frequency),
        )?);

        files.push(self.write_csv(
            "director_popularity.csv",
            vec![
                Column::new(
                    "director".into(),
                    report
                        .director_popularity
                        .iter()
                        .map(|d| d.director.as_str())
                        .collect::<Vec<_>>(),
                ),
                Column::new(
                    "popularity".into(),
                    report
                        .director_popularity
                        .iter()
                        .map(|d| d.popularity)
                        .collect::<Vec<_>>(),
                ),
            ],
        )?);

        info!("Export complete: {} files", files.len());
        Ok(ExportManifest {
            output_dir: self.output_dir.clone(),
            files,
        })
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<String, ExportError> {
        let path = self.output_dir.join(name);
        let file = File::create(&path).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        let writer = BufWriter::new(file);
        if self.pretty {
            serde_json::to_writer_pretty(writer, value)?;
        } else {
            serde_json::to_writer(writer, value)?;
        }
        debug!("Wrote {}", path.display());
        Ok(name.to_string())
    }

    fn write_csv(&self, name: &str, columns: Vec<Column>) -> Result<String, ExportError> {
        let mut df = DataFrame::new(columns)?;
        let path = self.output_dir.join(name);
        let file = File::create(&path).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        CsvWriter::new(file).include_header(true).finish(&mut df)?;
        debug!("Wrote {} ({} rows)", path.display(), df.height());
        Ok(name.to_string())
    }
}

fn token_columns(label: &str, counts: &[TokenCount]) -> Vec<Column> {
    vec![
        Column::new(
            label.into(),
            counts.iter().map(|c| c.token.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            "count".into(),
            counts.iter().map(|c| c.count as u64).collect::<Vec<_>>(),
        ),
    ]
}

fn movie_columns(rows: &[(&str, &MovieRecord)]) -> Vec<Column> {
    vec![
        Column::new("kind".into(), rows.iter().map(|(k, _)| *k).collect::<Vec<_>>()),
        Column::new("id".into(), rows.iter().map(|(_, m)| m.id).collect::<Vec<_>>()),
        Column::new(
            "original_title".into(),
            rows.iter()
                .map(|(_, m)| m.original_title.as_str())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "director".into(),
            rows.iter().map(|(_, m)| m.director.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            "release_date".into(),
            rows.iter()
                .map(|(_, m)| m.release_date.to_string())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "budget_adj".into(),
            rows.iter().map(|(_, m)| m.budget_adj).collect::<Vec<_>>(),
        ),
        Column::new(
            "revenue_adj".into(),
            rows.iter().map(|(_, m)| m.revenue_adj).collect::<Vec<_>>(),
        ),
        Column::new(
            "profit".into(),
            rows.iter().map(|(_, m)| m.profit).collect::<Vec<_>>(),
        ),
    ]
}
