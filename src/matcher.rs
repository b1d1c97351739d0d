//! Best-candidate selection, confidence tiers and listing assessment

use crate::catalog::parse_catalog_name;
use crate::config::{ConfidenceThresholds, MatcherConfig, ScoringWeights};
use crate::fair_value::{select_fair_value, FairValue};
use crate::models::CandidateEntry;
use crate::scoring::{score_match, MatchScore};
use crate::screening::{screen_listing, ListingScreen};
use crate::taxonomy::VariantTaxonomy;
use crate::title::{parse_title, ParsedTitle};
use rayon::prelude::*;
use serde::Serialize;
use std::borrow::Borrow;

/// How far a match can be trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    None,
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Map a score onto the configured tiers
    pub fn from_score(score: i32, thresholds: &ConfidenceThresholds) -> Self {
        if score >= thresholds.high {
            Confidence::High
        } else if score >= thresholds.medium {
            Confidence::Medium
        } else if score >= thresholds.low {
            Confidence::Low
        } else {
            Confidence::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::None => "none",
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// High and medium matches are good enough to price a listing
    pub fn is_trusted(&self) -> bool {
        matches!(self, Confidence::High | Confidence::Medium)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Winning candidate for one title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// `None` when nothing could be scored
    pub candidate_id: Option<String>,
    pub score: i32,
    pub reasons: Vec<String>,
    pub confidence: Confidence,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self {
            candidate_id: None,
            score: 0,
            reasons: Vec::new(),
            confidence: Confidence::None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.candidate_id.is_some()
    }
}

/// Screen, match and price one listing title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingAssessment {
    pub title: String,
    pub screen: ListingScreen,
    pub match_result: MatchResult,
    /// Only set for accepted listings whose match tier is above none
    pub fair_value: Option<FairValue>,
    pub condition: String,
}

/// Find the candidate that best explains `title`.
///
/// Candidates are expected to be pre-filtered to the same card; this does
/// no filtering of its own. Entries whose names cannot be parsed are
/// skipped. Equal best scores go to the lowest candidate id.
pub fn find_best_match<C>(
    taxonomy: &VariantTaxonomy,
    config: &MatcherConfig,
    title: &str,
    candidates: &[C],
) -> MatchResult
where
    C: Borrow<CandidateEntry>,
{
    match parse_title(taxonomy, title) {
        Some(parsed) => find_best_match_parsed(taxonomy, config, &parsed, candidates),
        None => MatchResult::no_match(),
    }
}

/// Same as [`find_best_match`] for a title that is already parsed
pub fn find_best_match_parsed<C>(
    taxonomy: &VariantTaxonomy,
    config: &MatcherConfig,
    title: &ParsedTitle,
    candidates: &[C],
) -> MatchResult
where
    C: Borrow<CandidateEntry>,
{
    match best_candidate(taxonomy, &config.weights, title, candidates) {
        Some((entry, scored)) => to_result(entry, scored, &config.thresholds),
        None => MatchResult::no_match(),
    }
}

fn to_result(
    entry: &CandidateEntry,
    scored: MatchScore,
    thresholds: &ConfidenceThresholds,
) -> MatchResult {
    MatchResult {
        candidate_id: Some(entry.id.clone()),
        confidence: Confidence::from_score(scored.score, thresholds),
        score: scored.score,
        reasons: scored.reasons,
    }
}

fn best_candidate<'a, C>(
    taxonomy: &VariantTaxonomy,
    weights: &ScoringWeights,
    title: &ParsedTitle,
    candidates: &'a [C],
) -> Option<(&'a CandidateEntry, MatchScore)>
where
    C: Borrow<CandidateEntry>,
{
    let mut best: Option<(&CandidateEntry, MatchScore)> = None;

    for entry in candidates.iter().map(|c| c.borrow()) {
        let Some(catalog) = parse_catalog_name(taxonomy, &entry.name) else {
            log::warn!("Skipping candidate {} with unparseable name '{}'", entry.id, entry.name);
            continue;
        };
        let scored = score_match(title, &catalog, weights);
        log::debug!("Candidate {} '{}' scored {}", entry.id, entry.name, scored.score);

        let better = match &best {
            None => true,
            Some((current, current_score)) => {
                scored.score > current_score.score
                    || (scored.score == current_score.score && entry.id < current.id)
            }
        };
        if better {
            best = Some((entry, scored));
        }
    }

    best
}

/// Screen, match and price one title.
///
/// Rejected listings are not matched. A fair value is only selected when the
/// match tier is above none.
pub fn assess_listing<C>(
    taxonomy: &VariantTaxonomy,
    config: &MatcherConfig,
    title: &str,
    candidates: &[C],
) -> ListingAssessment
where
    C: Borrow<CandidateEntry>,
{
    let screen = screen_listing(title);
    let parsed = parse_title(taxonomy, title);
    let condition = parsed
        .as_ref()
        .map(|p| p.condition_label())
        .unwrap_or_else(|| "Ungraded".to_string());

    let mut assessment = ListingAssessment {
        title: title.to_string(),
        screen,
        match_result: MatchResult::no_match(),
        fair_value: None,
        condition,
    };

    let Some(parsed) = parsed else {
        return assessment;
    };
    if !assessment.screen.is_accepted() {
        return assessment;
    }

    if let Some((entry, scored)) = best_candidate(taxonomy, &config.weights, &parsed, candidates) {
        let result = to_result(entry, scored, &config.thresholds);
        if result.confidence != Confidence::None {
            assessment.fair_value = Some(select_fair_value(entry, Some(&parsed)));
        }
        assessment.match_result = result;
    }

    assessment
}

/// Match many titles against one candidate pool in parallel.
/// Results are in input order.
pub fn match_titles<S, C>(
    taxonomy: &VariantTaxonomy,
    config: &MatcherConfig,
    titles: &[S],
    candidates: &[C],
) -> Vec<MatchResult>
where
    S: AsRef<str> + Sync,
    C: Borrow<CandidateEntry> + Sync,
{
    titles
        .par_iter()
        .map(|title| find_best_match(taxonomy, config, title.as_ref(), candidates))
        .collect()
}

/// Parallel [`assess_listing`] over many titles, in input order
pub fn assess_listings<S, C>(
    taxonomy: &VariantTaxonomy,
    config: &MatcherConfig,
    titles: &[S],
    candidates: &[C],
) -> Vec<ListingAssessment>
where
    S: AsRef<str> + Sync,
    C: Borrow<CandidateEntry> + Sync,
{
    let assessments: Vec<ListingAssessment> = titles
        .par_iter()
        .map(|title| assess_listing(taxonomy, config, title.as_ref(), candidates))
        .collect();

    let priced = assessments.iter().filter(|a| a.fair_value.is_some()).count();
    log::info!("Assessed {} titles, {} priced", assessments.len(), priced);
    assessments
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
