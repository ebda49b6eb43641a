// src/error.rs
//! Error taxonomy for a scrape run.
//!
//! Only [`ConfigError`] is fatal. Fetch, parse and write failures are scoped to
//! a year, a block or a category file; the runner logs them, records them in the
//! run summary and keeps going.

use std::path::PathBuf;

use thiserror::Error;

/// Bad or missing configuration. Aborts the run before any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credentials: set {0}")]
    MissingCredentials(String),

    #[error("invalid year range: start {start} is after end {end}")]
    InvalidYearRange { start: u16, end: u16 },

    #[error("invalid delay: {0} (must be a finite number of seconds >= 0)")]
    InvalidDelay(f64),

    #[error("invalid timeout: must be at least 1 second")]
    InvalidTimeout,

    #[error("could not read environment configuration: {0}")]
    Environment(#[from] config::ConfigError),

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// One ceremony year could not be fetched.
#[derive(Debug, Error)]
#[error("fetch failed for {year}: {cause}")]
pub struct FetchError {
    pub year: u16,
    pub cause: FetchCause,
}

#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("page reports an error: {0}")]
    ErrorPage(String),

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    pub fn new(year: u16, cause: impl Into<FetchCause>) -> Self {
        Self { year, cause: cause.into() }
    }
}

/// A ceremony page, or one block of it, could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The "Winners & Nominees" section is not on the page at all.
    #[error("no Winners & Nominees section on the page")]
    SectionAbsent,

    /// The section exists, but one block in it is unusable.
    #[error("malformed block{}: {reason}", label.as_deref().map(|l| format!(" '{l}'")).unwrap_or_default())]
    MalformedBlock {
        label: Option<String>,
        reason: String,
    },
}

/// One category file could not be written.
#[derive(Debug, Error)]
#[error("could not write category {category_key} to {}: {cause}", path.display())]
pub struct WriteError {
    pub category_key: String,
    pub path: PathBuf,
    #[source]
    pub cause: std::io::Error,
}

/// Reasons the runner stops without completing the year range.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("aborted: {0}")]
    Aborted(#[from] ConfigError),

    #[error("could not prepare output directory {}: {cause}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}
