use std::fmt;

/// One failed attempt against a remote dataset source.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    pub source: String,
    pub reason: String,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.reason)
    }
}

/// Errors that can occur while acquiring or parsing the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The local file was absent and every remote source failed.
    #[error("dataset unavailable: {summary}")]
    Unavailable {
        /// Attempted sources in order, each with its failure reason.
        attempts: Vec<SourceFailure>,
        summary: String,
    },
}

impl DataError {
    /// Build an `Unavailable` error from the chain of failed attempts.
    /// The summary names the last underlying failure.
    pub fn unavailable(attempts: Vec<SourceFailure>) -> Self {
        let summary = match attempts.last() {
            Some(last) => format!(
                "all {} sources failed, last error: {last}",
                attempts.len()
            ),
            None => "no sources configured".to_string(),
        };
        Self::Unavailable { attempts, summary }
    }
}
