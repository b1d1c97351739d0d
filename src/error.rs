//! Error types for listing_matcher
//!
//! Matching itself never fails: missing or malformed listing data maps to
//! sentinel values. Only loading configuration, taxonomies and candidate
//! files can return an error.

use thiserror::Error;

/// Unified error type for loading and validating matcher inputs
#[derive(Debug, Error)]
pub enum MatchError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse a JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to read a CSV candidate file
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Scoring weights or thresholds break a scoring invariant
    #[error("Invalid matcher config: {0}")]
    InvalidConfig(String),
    /// Variant registry is malformed
    #[error("Invalid variant taxonomy: {0}")]
    InvalidTaxonomy(String),
    /// Command-line input that cannot be processed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias for listing_matcher operations
pub type Result<T> = std::result::Result<T, MatchError>;
