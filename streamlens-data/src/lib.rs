//! Dataset acquisition and the process-wide title store.
//!
//! The loader reads the catalog CSV from a local path or an ordered list of
//! remote fallback sources; the store caches the parsed result for the
//! process lifetime.

pub mod error;
pub mod loader;
pub mod settings;
pub mod store;

pub use error::{DataError, SourceFailure};
pub use loader::{FALLBACK_SOURCES, FETCH_TIMEOUT, load_titles, parse_catalog_csv};
pub use store::TitleStore;
