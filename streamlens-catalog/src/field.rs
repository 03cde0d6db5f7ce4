//! Per-field coercion for raw catalog rows.
//!
//! All tolerance for messy source data lives here. A value that cannot be
//! coerced degrades to its default/absent form; the query engine only ever
//! sees typed, valid-or-absent values.

use chrono::NaiveDate;

/// Date formats accepted for the date-added column, tried in order.
/// The first format that matches wins; ambiguous inputs take that reading.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Parse a calendar date against the accepted format list.
///
/// Empty or non-matching input yields `None`.
pub fn parse_date(val: &str) -> Option<NaiveDate> {
    if val.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(val, fmt).ok())
}

/// Defensively parse a release year.
///
/// Unparseable or non-positive values yield `None` — zero is a placeholder
/// in the source data, never a real year.
pub fn parse_year(val: &str) -> Option<i32> {
    val.trim().parse::<i32>().ok().filter(|y| *y > 0)
}

/// Split a comma-delimited multi-value field into trimmed, non-empty pieces.
///
/// Order is preserved and duplicates are kept.
pub fn split_list(val: &str) -> Vec<String> {
    val.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
