//! Process-wide, load-once title store.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use streamlens_catalog::CatalogTitle;

use crate::error::DataError;
use crate::loader;

/// Holds the dataset for the process lifetime.
///
/// The store is populated lazily on first access. Concurrent first-time
/// loads are serialized by a guard so the remote fallback sequence runs at
/// most once; after population, reads take no lock and always return the
/// same slice. There is no invalidation or refresh.
#[derive(Debug)]
pub struct TitleStore {
    csv_path: PathBuf,
    titles: OnceLock<Vec<CatalogTitle>>,
    load_guard: Mutex<()>,
}

impl TitleStore {
    /// Create an empty store that will load from `csv_path` (or the remote
    /// fallback list) on first access.
    pub fn new(csv_path: PathBuf) -> Self {
        Self {
            csv_path,
            titles: OnceLock::new(),
            load_guard: Mutex::new(()),
        }
    }

    /// The dataset path this store loads from.
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Whether the dataset has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.titles.get().is_some()
    }

    /// Return the cached dataset, loading it on first call.
    ///
    /// A failed load leaves the store empty; the next call starts a fresh
    /// load attempt.
    pub fn titles(&self) -> Result<&[CatalogTitle], DataError> {
        if let Some(titles) = self.titles.get() {
            return Ok(titles);
        }

        let _guard = self
            .load_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished the load while we waited.
        if let Some(titles) = self.titles.get() {
            return Ok(titles);
        }

        let loaded = loader::load_titles(&self.csv_path)?;
        Ok(self.titles.get_or_init(|| loaded))
    }
}
