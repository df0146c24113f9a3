//! Tabelog-Harvest: entity extraction for a hierarchical restaurant directory
//!
//! This crate classifies discovered links into crawl actions and parses matched
//! pages into typed business, review and reviewer records. Fetching, scheduling,
//! deduplication and politeness belong to the external crawl engine that drives
//! the classifier and page handlers.

pub mod config;
pub mod extract;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod seed;
pub mod url;

use thiserror::Error;

/// Main error type for Tabelog-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Extraction failed for {url}: {source}")]
    Extract { url: String, source: ExtractError },

    #[error("Gave up on {url} after {attempts} challenge pages")]
    RefetchLimitExceeded { url: String, attempts: u32 },

    #[error("No handler registered for {url}")]
    NotDispatched { url: String },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid link pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] ::url::ParseError),

    #[error("URL does not have the expected {expected} shape: {url}")]
    Shape { expected: &'static str, url: String },
}

/// Errors raised while turning a page (or one node of it) into entities
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Required field `{field}` is missing")]
    MissingField { field: &'static str },

    #[error("{meal} rating block has {found} sub-scores, expected 5")]
    IncompleteStarBreakdown {
        meal: model::Meal,
        found: usize,
    },

    #[error(transparent)]
    Url(#[from] UrlError),
}

/// Result type alias for Tabelog-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

/// Result type alias for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{handle_page, FetchedPage, PageOutcome, RefetchRequest};
pub use model::{Business, Entity, Review, User};
pub use pipeline::Harvester;
pub use url::{Handler, LinkAction, LinkClassifier};
