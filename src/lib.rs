//! Listing Matcher - card variant disambiguation
//!
//! Matches free-text marketplace titles to the right catalog variant
//! (1st Edition, Shadowless, Gold Star, ...) and picks the fair value for the
//! listing's grade.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fair_value;
pub mod identity;
pub mod io;
pub mod matcher;
pub mod models;
pub mod pool;
pub mod scoring;
pub mod screening;
pub mod taxonomy;
pub mod title;

// Re-export commonly used items
pub use catalog::{parse_catalog_name, ParsedCatalogName};
pub use config::{ConfidenceThresholds, MatcherConfig, ScoringWeights, MAX_WEIGHT};
pub use error::{MatchError, Result};
pub use fair_value::{select_fair_value, FairValue};
pub use identity::{catalog_identity, CatalogIdentity};
pub use io::{read_candidates, read_titles};
pub use matcher::{
    assess_listing, assess_listings, find_best_match, find_best_match_parsed, match_titles,
    Confidence, ListingAssessment, MatchResult,
};
pub use models::{CandidateEntry, PriceTable};
pub use pool::candidate_pool;
pub use scoring::{score_match, MatchScore};
pub use screening::{screen_listing, sealed_product_keyword, ListingScreen};
pub use taxonomy::{DetectedVariants, VariantKind, VariantTag, VariantTaxonomy};
pub use title::{parse_title, GradingCompany, ParsedTitle};
