//! Movie Dataset Schema
//! Column names of the TMDB export and the typed shape of the cleaned table.

use polars::prelude::DataType;

pub const ID: &str = "id";
pub const POPULARITY: &str = "popularity";
pub const ORIGINAL_TITLE: &str = "original_title";
pub const DIRECTOR: &str = "director";
pub const KEYWORDS: &str = "keywords";
pub const GENRES: &str = "genres";
pub const PRODUCTION_COMPANIES: &str = "production_companies";
pub const RELEASE_DATE: &str = "release_date";
pub const RELEASE_YEAR: &str = "release_year";
pub const BUDGET_ADJ: &str = "budget_adj";
pub const REVENUE_ADJ: &str = "revenue_adj";

/// Derived column, added after cleaning.
pub const PROFIT: &str = "profit";

/// Columns irrelevant to the analysis.
pub const DROPPED_COLUMNS: [&str; 10] = [
    "imdb_id",
    "budget",
    "revenue",
    "cast",
    "homepage",
    "tagline",
    "overview",
    "vote_count",
    "vote_average",
    "runtime",
];

/// Columns kept after pruning, in output order, with their cleaned dtype.
pub fn retained_columns() -> [(&'static str, DataType); 11] {
    [
        (ID, DataType::Int64),
        (POPULARITY, DataType::Float64),
        (ORIGINAL_TITLE, DataType::String),
        (DIRECTOR, DataType::String),
        (KEYWORDS, DataType::String),
        (GENRES, DataType::String),
        (PRODUCTION_COMPANIES, DataType::String),
        (RELEASE_DATE, DataType::String),
        (RELEASE_YEAR, DataType::Int64),
        (BUDGET_ADJ, DataType::Float64),
        (REVENUE_ADJ, DataType::Float64),
    ]
}

/// Numeric columns of the analysis table, in correlation-matrix order.
pub const NUMERIC_COLUMNS: [&str; 6] = [
    ID,
    POPULARITY,
    RELEASE_YEAR,
    BUDGET_ADJ,
    REVENUE_ADJ,
    PROFIT,
];
