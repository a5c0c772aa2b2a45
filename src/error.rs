// src/error.rs
use thiserror::Error;

/// Run-level failures. Any of these short-circuits the pipeline and nothing is written.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Input did not look like a profile URL.
    #[error("Could not find profile")]
    ProfileNotFound,

    /// The server answered, but not with 200.
    #[error("Failed to access profile. Status code: {0}")]
    Status(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

/// A single field that was present on the page but could not be read.
/// Never propagated; handed to a `Report` and the field is left unset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct FieldIssue {
    pub field: &'static str,
    pub reason: String,
}

impl FieldIssue {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self { field, reason: reason.into() }
    }
}
