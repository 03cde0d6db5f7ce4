//! Catalog record types.
//!
//! `RawTitleRow` mirrors the source CSV columns verbatim; `CatalogTitle` is
//! the normalized record everything downstream works with.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::field;

/// One row of the source CSV, keyed by header name.
///
/// Every column is an optional free-text string; absent columns default to
/// empty so a short row never rejects the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTitleRow {
    #[serde(default)]
    pub show_id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub date_added: String,
    #[serde(default)]
    pub release_year: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub listed_in: String,
    #[serde(default)]
    pub description: String,
}

/// A normalized catalog entry.
///
/// String fields are stored as they appeared in the source (missing values
/// become empty strings). `date_added` and `release_year` are valid or
/// absent — never a sentinel like zero or an empty string.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogTitle {
    pub id: String,
    /// Free-text category label; "movie" and "tv show" are the values the
    /// aggregate logic recognizes, compared case-insensitively.
    pub kind: String,
    pub title: String,
    pub director: String,
    pub cast: String,
    /// Raw country column as it appeared in the source.
    pub country: String,
    pub date_added: Option<NaiveDate>,
    pub release_year: Option<i32>,
    pub rating: String,
    pub duration: String,
    /// Raw genre column as it appeared in the source.
    pub listed_in: String,
    pub description: String,
    /// `country` split on commas, trimmed, empties dropped, order kept.
    pub countries: Vec<String>,
    /// `listed_in` split the same way.
    pub genres: Vec<String>,
}

impl CatalogTitle {
    /// Normalize one raw CSV row.
    ///
    /// Malformed values degrade to their default/absent form; a row is
    /// never rejected here.
    pub fn from_row(row: RawTitleRow) -> Self {
        let countries = field::split_list(&row.country);
        let genres = field::split_list(&row.listed_in);
        Self {
            id: row.show_id,
            kind: row.kind,
            title: row.title,
            director: row.director,
            cast: row.cast,
            date_added: field::parse_date(&row.date_added),
            release_year: field::parse_year(&row.release_year),
            rating: row.rating,
            duration: row.duration,
            description: row.description,
            country: row.country,
            listed_in: row.listed_in,
            countries,
            genres,
        }
    }

    /// True when the category label is "movie", ignoring case and padding.
    pub fn is_movie(&self) -> bool {
        self.kind.trim().eq_ignore_ascii_case("movie")
    }

    /// True when the category label is "tv show", ignoring case and padding.
    pub fn is_series(&self) -> bool {
        self.kind.trim().eq_ignore_ascii_case("tv show")
    }

    /// True when the category label equals `kind` (exact match, not
    /// substring), ignoring case and padding.
    pub fn kind_matches(&self, kind: &str) -> bool {
        self.kind.trim().eq_ignore_ascii_case(kind.trim())
    }
}

impl From<RawTitleRow> for CatalogTitle {
    fn from(row: RawTitleRow) -> Self {
        Self::from_row(row)
    }
}
