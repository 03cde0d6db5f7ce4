use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset acquisition or parse failure
    #[error("Data error: {0}")]
    Data(String),
}

impl CliError {
    pub(crate) fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
