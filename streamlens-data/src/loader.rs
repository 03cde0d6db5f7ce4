//! Dataset loading.
//!
//! Resolution order: a local CSV file if it exists, otherwise each remote
//! fallback source in sequence until one responds. The raw text is then
//! parsed into normalized titles, preserving source row order.

use std::fs;
use std::path::Path;
use std::time::Duration;

use streamlens_catalog::{CatalogTitle, RawTitleRow};

use crate::error::{DataError, SourceFailure};

/// Remote copies of the dataset, tried in order when no local file exists.
pub const FALLBACK_SOURCES: &[&str] = &[
    "https://raw.githubusercontent.com/erikgregorywebb/datasets/master/netflix_titles.csv",
    "https://raw.githubusercontent.com/ashishpatel26/EDA-on-Netflix-Dataset/master/netflix_titles.csv",
    "https://raw.githubusercontent.com/singhaniatanay/Netflix-Data-Analysis/master/netflix_titles.csv",
];

/// Per-source request timeout. A source is never retried; the next one in
/// the list is attempted instead.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Load and normalize the full dataset.
///
/// Reads `csv_path` in full if it exists, otherwise walks the remote
/// fallback list. Fails only when the local file is absent and every
/// remote source fails.
pub fn load_titles(csv_path: &Path) -> Result<Vec<CatalogTitle>, DataError> {
    let text = if csv_path.exists() {
        fs::read_to_string(csv_path)?
    } else {
        log::info!(
            "No local dataset at {}, trying remote sources",
            csv_path.display()
        );
        fetch_remote(FALLBACK_SOURCES, FETCH_TIMEOUT)?
    };
    parse_catalog_csv(&text)
}

/// Fetch raw CSV text from the first source in `sources` that responds
/// with a success status.
pub fn fetch_remote(sources: &[&str], timeout: Duration) -> Result<String, DataError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    let mut attempts = Vec::new();
    for &url in sources {
        let reason = match client.get(url).send() {
            Ok(response) => match response.error_for_status() {
                Ok(response) => match response.text() {
                    Ok(text) => return Ok(text),
                    Err(e) => e.to_string(),
                },
                Err(e) => e.to_string(),
            },
            Err(e) => e.to_string(),
        };
        log::warn!("Dataset source {url} failed: {reason}");
        attempts.push(SourceFailure {
            source: url.to_string(),
            reason,
        });
    }

    Err(DataError::unavailable(attempts))
}

/// Parse CSV text with a header row into normalized titles.
///
/// Rows are processed independently: a malformed value in one field
/// degrades that field to its default, and a structurally unreadable row
/// is skipped with a warning rather than failing the load.
pub fn parse_catalog_csv(text: &str) -> Result<Vec<CatalogTitle>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut titles = Vec::new();
    for result in reader.deserialize::<RawTitleRow>() {
        match result {
            Ok(row) => titles.push(CatalogTitle::from_row(row)),
            Err(e) => log::warn!("Skipping malformed catalog row: {e}"),
        }
    }

    Ok(titles)
}
