//! Read queries over the cached title set.
//!
//! Provides summary statistics, grouped counts, and substring search. All
//! functions are pure over a title slice; acquiring and caching that slice
//! is the data crate's job.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use streamlens_catalog::CatalogTitle;

/// Hard cap on search results.
pub const SEARCH_CAP: usize = 25;

// ── Summary ─────────────────────────────────────────────────────────────────

/// Overall catalog statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total_titles: usize,
    pub movies: usize,
    pub tv_shows: usize,
    pub earliest_release_year: Option<i32>,
    pub latest_release_year: Option<i32>,
    pub first_added_date: Option<NaiveDate>,
    pub last_added_date: Option<NaiveDate>,
}

/// Compute overall statistics.
///
/// Titles whose category label is neither "movie" nor "tv show" count
/// toward `total_titles` but neither sub-count. Year and date extremes
/// consider only titles where the value is present.
pub fn summary(titles: &[CatalogTitle]) -> CatalogSummary {
    let mut movies = 0;
    let mut tv_shows = 0;
    let mut earliest: Option<i32> = None;
    let mut latest: Option<i32> = None;
    let mut first_added: Option<NaiveDate> = None;
    let mut last_added: Option<NaiveDate> = None;

    for title in titles {
        if title.is_movie() {
            movies += 1;
        } else if title.is_series() {
            tv_shows += 1;
        }
        if let Some(year) = title.release_year {
            earliest = Some(earliest.map_or(year, |e| e.min(year)));
            latest = Some(latest.map_or(year, |l| l.max(year)));
        }
        if let Some(date) = title.date_added {
            first_added = Some(first_added.map_or(date, |d| d.min(date)));
            last_added = Some(last_added.map_or(date, |d| d.max(date)));
        }
    }

    CatalogSummary {
        total_titles: titles.len(),
        movies,
        tv_shows,
        earliest_release_year: earliest,
        latest_release_year: latest,
        first_added_date: first_added,
        last_added_date: last_added,
    }
}

// ── Grouped Counts ──────────────────────────────────────────────────────────

/// One value of a multi-valued field with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCount {
    pub name: String,
    pub count: u64,
}

/// Top countries by title count.
///
/// A title contributes to every country it lists; a title listing none
/// contributes to nothing. The `top` bound is validated at the CLI
/// boundary (range 1..=50).
pub fn count_by_country(titles: &[CatalogTitle], top: usize) -> Vec<FieldCount> {
    count_values(titles.iter().flat_map(|t| t.countries.iter()), top)
}

/// Top genres by title count (CLI boundary range 1..=100).
pub fn count_by_genre(titles: &[CatalogTitle], top: usize) -> Vec<FieldCount> {
    count_values(titles.iter().flat_map(|t| t.genres.iter()), top)
}

/// Count occurrences, sort descending, truncate to `top`.
///
/// Ties keep first-encountered order: entries are created in dataset order
/// and the sort is stable.
fn count_values<'a>(values: impl Iterator<Item = &'a String>, top: usize) -> Vec<FieldCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<FieldCount> = Vec::new();

    for value in values {
        match index.get(value.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(value.as_str(), counts.len());
                counts.push(FieldCount {
                    name: value.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top);
    counts
}

// ── By Year ─────────────────────────────────────────────────────────────────

/// Title count for a single release year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
}

/// Titles per release year, ascending, with an optional inclusive range
/// filter. Years with no matching titles are omitted, not zero-filled.
pub fn count_by_year(
    titles: &[CatalogTitle],
    start: Option<i32>,
    end: Option<i32>,
) -> Vec<YearCount> {
    let mut years: BTreeMap<i32, u64> = BTreeMap::new();

    for title in titles {
        let Some(year) = title.release_year else {
            continue;
        };
        if start.is_some_and(|s| year < s) || end.is_some_and(|e| year > e) {
            continue;
        }
        *years.entry(year).or_insert(0) += 1;
    }

    years
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

// ── Search ──────────────────────────────────────────────────────────────────

/// Fixed projection returned by [`search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub country: String,
    pub release_year: Option<i32>,
    pub rating: String,
    pub duration: String,
    pub listed_in: String,
    pub date_added: Option<NaiveDate>,
    pub description: String,
}

impl SearchHit {
    fn from_title(t: &CatalogTitle) -> Self {
        Self {
            id: t.id.clone(),
            title: t.title.clone(),
            kind: t.kind.clone(),
            country: t.country.clone(),
            release_year: t.release_year,
            rating: t.rating.clone(),
            duration: t.duration.clone(),
            listed_in: t.listed_in.clone(),
            date_added: t.date_added,
            description: t.description.clone(),
        }
    }
}

/// Substring search over title, director, cast, genres, and description,
/// optionally restricted to one category label.
///
/// Both filters, when present, are ANDed. The category must match exactly
/// (case-insensitive); the query matches as a case-folded substring of the
/// concatenated text fields. Dataset order is preserved and iteration
/// stops once [`SEARCH_CAP`] matches are collected.
pub fn search(titles: &[CatalogTitle], query: &str, kind: Option<&str>) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    let mut hits = Vec::new();

    for title in titles {
        if let Some(kind) = kind {
            if !title.kind_matches(kind) {
                continue;
            }
        }
        if !needle.is_empty() {
            let haystack = format!(
                "{} {} {} {} {}",
                title.title, title.director, title.cast, title.listed_in, title.description
            )
            .to_lowercase();
            if !haystack.contains(&needle) {
                continue;
            }
        }
        hits.push(SearchHit::from_title(title));
        if hits.len() >= SEARCH_CAP {
            break;
        }
    }

    hits
}
