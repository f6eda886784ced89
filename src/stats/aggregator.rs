//! Aggregator Module
//! One read-only query per analysis question over the cleaned movie table.
//!
//! Rankings use stable sorts, so ties keep table order (or first-seen order
//! for grouped keys).

use crate::data::MovieRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Pipe-delimited multi-valued column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Genres,
    Keywords,
    ProductionCompanies,
}

impl CategoryField {
    pub fn value<'a>(&self, record: &'a MovieRecord) -> &'a str {
        match self {
            CategoryField::Genres => &record.genres,
            CategoryField::Keywords => &record.keywords,
            CategoryField::ProductionCompanies => &record.production_companies,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyValue {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleProfit {
    pub title: String,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorPopularity {
    pub director: String,
    pub popularity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitExtremes {
    pub most: MovieRecord,
    pub least: MovieRecord,
}

/// Split a multi-valued field into its non-empty tokens.
pub fn tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split('|').filter(|t| !t.is_empty())
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

pub struct Aggregator;

impl Aggregator {
    /// Mean adjusted budget per release year, ascending by year.
    pub fn yearly_mean_budget(records: &[MovieRecord]) -> Vec<YearlyValue> {
        let mut by_year: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
        for record in records {
            let entry = by_year.entry(record.release_year).or_insert((0.0, 0));
            entry.0 += record.budget_adj;
            entry.1 += 1;
        }

        by_year
            .into_iter()
            .map(|(year, (sum, count))| YearlyValue {
                year,
                value: sum / count as f64,
            })
            .collect()
    }

    /// Rows with the highest and lowest profit; first occurrence wins ties.
    pub fn profit_extremes(records: &[MovieRecord]) -> Option<ProfitExtremes> {
        let first = records.first()?;
        let mut most = first;
        let mut least = first;
        for record in &records[1..] {
            if record.profit > most.profit {
                most = record;
            }
            if record.profit < least.profit {
                least = record;
            }
        }

        Some(ProfitExtremes {
            most: most.clone(),
            least: least.clone(),
        })
    }

    /// First `n` titles of the stable descending sort by profit.
    pub fn top_profit(records: &[MovieRecord], n: usize) -> Vec<TitleProfit> {
        let mut ranked: Vec<&MovieRecord> = records.iter().collect();
        ranked.sort_by(|a, b| descending(a.profit, b.profit));

        ranked
            .into_iter()
            .take(n)
            .map(|r| TitleProfit {
                title: r.original_title.clone(),
                profit: r.profit,
            })
            .collect()
    }

    /// Exploded keyword multiset, most frequent first.
    pub fn keyword_frequency(records: &[MovieRecord]) -> Vec<TokenCount> {
        Self::category_frequency(records, CategoryField::Keywords)
    }

    /// Number of movies per release year, ascending by year.
    pub fn yearly_counts(records: &[MovieRecord]) -> Vec<YearlyCount> {
        let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
        for record in records {
            *by_year.entry(record.release_year).or_default() += 1;
        }

        by_year
            .into_iter()
            .map(|(year, count)| YearlyCount { year, count })
            .collect()
    }

    /// Token counts of a multi-valued column, most frequent first.
    pub fn category_frequency(records: &[MovieRecord], field: CategoryField) -> Vec<TokenCount> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<TokenCount> = Vec::new();

        for record in records {
            for token in tokens(field.value(record)) {
                match index.get(token) {
                    Some(&i) => counts[i].count += 1,
                    None => {
                        index.insert(token, counts.len());
                        counts.push(TokenCount {
                            token: token.to_string(),
                            count: 1,
                        });
                    }
                }
            }
        }

        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Directors ranked by summed popularity, top `n`.
    pub fn director_popularity(records: &[MovieRecord], n: usize) -> Vec<DirectorPopularity> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<DirectorPopularity> = Vec::new();

        for record in records {
            match index.get(record.director.as_str()) {
                Some(&i) => totals[i].popularity += record.popularity,
                None => {
                    index.insert(&record.director, totals.len());
                    totals.push(DirectorPopularity {
                        director: record.director.clone(),
                        popularity: record.popularity,
                    });
                }
            }
        }

        totals.sort_by(|a, b| descending(a.popularity, b.popularity));
        totals.truncate(n);
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn movie(title: &str, year: i32, budget: f64, revenue: f64) -> MovieRecord {
        MovieRecord {
            id: year as i64,
            original_title: title.to_string(),
            director: "Nobody".to_string(),
            keywords: String::new(),
            genres: String::new(),
            production_companies: String::new(),
            release_date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            release_year: year,
            popularity: 1.0,
            budget_adj: budget,
            revenue_adj: revenue,
            profit: revenue - budget,
        }
    }

    fn with_genres(mut record: MovieRecord, genres: &str) -> MovieRecord {
        record.genres = genres.to_string();
        record
    }

    fn with_director(mut record: MovieRecord, director: &str, popularity: f64) -> MovieRecord {
        record.director = director.to_string();
        record.popularity = popularity;
        record
    }

    #[test]
    fn profit_extremes_pick_first_and_second() {
        let records = vec![movie("A", 2000, 10.0, 100.0), movie("B", 2001, 50.0, 30.0)];
        let extremes = Aggregator::profit_extremes(&records).unwrap();
        assert_eq!(extremes.most.original_title, "A");
        assert_eq!(extremes.most.profit, 90.0);
        assert_eq!(extremes.least.original_title, "B");
        assert_eq!(extremes.least.profit, -20.0);
    }

    #[test]
    fn profit_extremes_ties_keep_first_occurrence() {
        let records = vec![
            movie("A", 2000, 10.0, 20.0),
            movie("B", 2000, 10.0, 20.0),
        ];
        let extremes = Aggregator::profit_extremes(&records).unwrap();
        assert_eq!(extremes.most.original_title, "A");
        assert_eq!(extremes.least.original_title, "A");
        assert!(Aggregator::profit_extremes(&[]).is_none());
    }

    #[test]
    fn top_profit_is_a_stable_prefix() {
        let records = vec![
            movie("Low", 2000, 10.0, 5.0),
            movie("TieA", 2000, 10.0, 20.0),
            movie("High", 2000, 10.0, 90.0),
            movie("TieB", 2000, 10.0, 20.0),
        ];

        let all = Aggregator::top_profit(&records, 10);
        let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["High", "TieA", "TieB", "Low"]);

        let top2 = Aggregator::top_profit(&records, 2);
        assert_eq!(top2, all[..2].to_vec());
        assert!(Aggregator::top_profit(&records, 0).is_empty());
    }

    #[test]
    fn yearly_aggregates_are_sorted_by_year() {
        let records = vec![
            movie("A", 2001, 30.0, 40.0),
            movie("B", 1999, 10.0, 40.0),
            movie("C", 2001, 10.0, 40.0),
        ];

        assert_eq!(
            Aggregator::yearly_mean_budget(&records),
            vec![
                YearlyValue {
                    year: 1999,
                    value: 10.0
                },
                YearlyValue {
                    year: 2001,
                    value: 20.0
                },
            ]
        );
        assert_eq!(
            Aggregator::yearly_counts(&records),
            vec![
                YearlyCount {
                    year: 1999,
                    count: 1
                },
                YearlyCount {
                    year: 2001,
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn genre_frequency_counts_exploded_tokens() {
        let records = vec![
            with_genres(movie("A", 2000, 1.0, 2.0), "Action|Drama"),
            with_genres(movie("B", 2000, 1.0, 2.0), "Drama"),
            with_genres(movie("C", 2000, 1.0, 2.0), ""),
        ];

        let counts = Aggregator::category_frequency(&records, CategoryField::Genres);
        assert_eq!(
            counts,
            vec![
                TokenCount {
                    token: "Drama".to_string(),
                    count: 2
                },
                TokenCount {
                    token: "Action".to_string(),
                    count: 1
                },
            ]
        );

        let occurrences: usize = records.iter().map(|r| tokens(&r.genres).count()).sum();
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), occurrences);
    }

    #[test]
    fn empty_segments_contribute_no_tokens() {
        assert_eq!(tokens("a||b|").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(tokens("").count(), 0);
    }

    #[test]
    fn keyword_frequency_ties_keep_first_seen_order() {
        let mut a = movie("A", 2000, 1.0, 2.0);
        a.keywords = "space|robot".to_string();
        let mut b = movie("B", 2000, 1.0, 2.0);
        b.keywords = "robot|space|alien".to_string();

        let tokens: Vec<(String, usize)> = Aggregator::keyword_frequency(&[a, b])
            .into_iter()
            .map(|t| (t.token, t.count))
            .collect();
        assert_eq!(
            tokens,
            vec![
                ("space".to_string(), 2),
                ("robot".to_string(), 2),
                ("alien".to_string(), 1),
            ]
        );
    }

    #[test]
    fn director_popularity_sums_and_truncates() {
        let records = vec![
            with_director(movie("A", 2000, 1.0, 2.0), "Nolan", 5.0),
            with_director(movie("B", 2000, 1.0, 2.0), "Bay", 2.0),
            with_director(movie("C", 2000, 1.0, 2.0), "Nolan", 4.0),
            with_director(movie("D", 2000, 1.0, 2.0), "Lee", 2.0),
        ];

        let ranked = Aggregator::director_popularity(&records, 2);
        assert_eq!(
            ranked,
            vec![
                DirectorPopularity {
                    director: "Nolan".to_string(),
                    popularity: 9.0
                },
                DirectorPopularity {
                    director: "Bay".to_string(),
                    popularity: 2.0
                },
            ]
        );
        assert!(Aggregator::director_popularity(&records, 0).is_empty());
    }
}
