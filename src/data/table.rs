//! Movie Table
//! Typed, immutable rows materialized from the cleaned and derived frame.

use super::cleaner::CleanerError;
use super::schema::*;
use chrono::NaiveDate;
use polars::prelude::*;
use serde::Serialize;

/// One cleaned movie row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    pub id: i64,
    pub original_title: String,
    pub director: String,
    pub keywords: String,
    pub genres: String,
    pub production_companies: String,
    pub release_date: NaiveDate,
    pub release_year: i32,
    pub popularity: f64,
    pub budget_adj: f64,
    pub revenue_adj: f64,
    pub profit: f64,
}

impl MovieRecord {
    /// Value of a numeric column by name.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            ID => Some(self.id as f64),
            POPULARITY => Some(self.popularity),
            RELEASE_YEAR => Some(self.release_year as f64),
            BUDGET_ADJ => Some(self.budget_adj),
            REVENUE_ADJ => Some(self.revenue_adj),
            PROFIT => Some(self.profit),
            _ => None,
        }
    }
}

/// The analysis table: built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct MovieTable {
    records: Vec<MovieRecord>,
}

impl MovieTable {
    /// Materialize typed records, parsing `release_date` along the way.
    pub fn from_frame(df: &DataFrame) -> Result<Self, CleanerError> {
        let ids = series(df, ID)?.i64()?;
        let titles = series(df, ORIGINAL_TITLE)?.str()?;
        let directors = series(df, DIRECTOR)?.str()?;
        let keywords = series(df, KEYWORDS)?.str()?;
        let genres = series(df, GENRES)?.str()?;
        let companies = series(df, PRODUCTION_COMPANIES)?.str()?;
        let dates = series(df, RELEASE_DATE)?.str()?;
        let years = series(df, RELEASE_YEAR)?.i64()?;
        let popularity = series(df, POPULARITY)?.f64()?;
        let budgets = series(df, BUDGET_ADJ)?.f64()?;
        let revenues = series(df, REVENUE_ADJ)?.f64()?;
        let profits = series(df, PROFIT)?.f64()?;

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let release_year = required(years.get(row), RELEASE_YEAR, row)? as i32;
            let raw_date = required(dates.get(row), RELEASE_DATE, row)?;
            let release_date = parse_release_date(raw_date, release_year).ok_or_else(|| {
                CleanerError::InvalidDate {
                    row,
                    value: raw_date.to_string(),
                }
            })?;

            records.push(MovieRecord {
                id: required(ids.get(row), ID, row)?,
                original_title: required(titles.get(row), ORIGINAL_TITLE, row)?.to_string(),
                director: required(directors.get(row), DIRECTOR, row)?.to_string(),
                keywords: required(keywords.get(row), KEYWORDS, row)?.to_string(),
                genres: required(genres.get(row), GENRES, row)?.to_string(),
                production_companies: required(companies.get(row), PRODUCTION_COMPANIES, row)?
                    .to_string(),
                release_date,
                release_year,
                popularity: required(popularity.get(row), POPULARITY, row)?,
                budget_adj: required(budgets.get(row), BUDGET_ADJ, row)?,
                revenue_adj: required(revenues.get(row), REVENUE_ADJ, row)?,
                profit: required(profits.get(row), PROFIT, row)?,
            });
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }
}

fn series<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series, CleanerError> {
    Ok(df.column(name)?.as_materialized_series())
}

fn required<T>(value: Option<T>, column: &str, row: usize) -> Result<T, CleanerError> {
    value.ok_or_else(|| CleanerError::MissingValue {
        column: column.to_string(),
        row,
    })
}

/// Parse a release date in `M/D/YY`, `M/D/YYYY` or `YYYY-MM-DD` form.
///
/// Two-digit years take the century of `release_year` when the last two
/// digits agree, otherwise they pivot at 69 (`00..=68` is 20xx).
pub fn parse_release_date(value: &str, release_year: i32) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    let mut parts = value.split('/');
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let year_part = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let year = match year_part.len() {
        4 => year_part.parse().ok()?,
        2 => {
            let short: i32 = year_part.parse().ok()?;
            if release_year.rem_euclid(100) == short {
                release_year
            } else if short < 69 {
                2000 + short
            } else {
                1900 + short
            }
        }
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}
