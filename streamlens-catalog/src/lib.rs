//! Data model for the streaming title catalog.
//!
//! Defines the raw CSV row shape, the normalized title record, and the
//! per-field coercion helpers that turn one into the other.

pub mod field;
pub mod types;

pub use types::{CatalogTitle, RawTitleRow};
