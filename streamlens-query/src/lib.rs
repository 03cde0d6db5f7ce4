//! Read-only analytical queries over the normalized catalog.

pub mod queries;

pub use queries::{
    CatalogSummary, FieldCount, SEARCH_CAP, SearchHit, YearCount, count_by_country,
    count_by_genre, count_by_year, search, summary,
};
