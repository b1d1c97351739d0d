//! Scoring one parsed title against one parsed catalog name
//!
//! Rules, in evaluation order:
//! 1. the first word of the catalog base name must appear in the title,
//!    otherwise the candidate gets the fixed gate score and nothing else runs
//! 2. card numbers are compared only when both sides have one
//! 3. value variants: shared keys are rewarded, a key on only one side costs
//!    more than a name and number match earn together
//! 4. cosmetic variants: same structure, smaller weights
//!
//! Every applied rule leaves one reason string, in evaluation order.

use crate::catalog::ParsedCatalogName;
use crate::config::ScoringWeights;
use crate::title::{strip_leading_zeros, ParsedTitle};
use serde::Serialize;

/// Score for one candidate plus the audit trail that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    pub score: i32,
    pub reasons: Vec<String>,
}

impl MatchScore {
    fn add(&mut self, points: i32, reason: String) {
        self.score = self.score.saturating_add(points);
        self.reasons.push(reason);
    }
}

/// Score a title against a catalog entry. Pure; same inputs, same output.
pub fn score_match(
    title: &ParsedTitle,
    catalog: &ParsedCatalogName,
    weights: &ScoringWeights,
) -> MatchScore {
    let mut scored = MatchScore {
        score: 0,
        reasons: Vec::new(),
    };

    let base_lower = catalog.base_name.to_lowercase();
    let first_word = base_lower.split_whitespace().next().unwrap_or("");
    if first_word.is_empty() || !title.title_lower.contains(first_word) {
        return MatchScore {
            score: weights.name_gate_score,
            reasons: vec![format!(
                "{} name '{}' not found in title",
                weights.name_gate_score, first_word
            )],
        };
    }
    scored.add(
        weights.base_name_reward,
        format!("+{} name '{}'", weights.base_name_reward, first_word),
    );

    if let (Some(catalog_number), Some(title_number)) = (&catalog.item_number, &title.item_number) {
        let catalog_number = strip_leading_zeros(catalog_number);
        let title_number = strip_leading_zeros(title_number);

        if catalog_number.to_lowercase() == title_number.to_lowercase() {
            scored.add(
                weights.number_match_reward,
                format!("+{} number '{}'", weights.number_match_reward, catalog_number),
            );
        } else {
            scored.add(
                weights.number_mismatch_penalty.saturating_neg(),
                format!(
                    "-{} number mismatch: catalog '{}' vs title '{}'",
                    weights.number_mismatch_penalty, catalog_number, title_number
                ),
            );
        }
    }

    compare_variants(
        &mut scored,
        "value variant",
        &title.value_variants,
        &catalog.value_variants,
        weights.value_match_reward,
        weights.value_mismatch_penalty,
    );
    compare_variants(
        &mut scored,
        "cosmetic variant",
        &title.cosmetic_variants,
        &catalog.cosmetic_variants,
        weights.cosmetic_match_reward,
        weights.cosmetic_mismatch_penalty,
    );

    scored
}

fn compare_variants(
    scored: &mut MatchScore,
    label: &str,
    title_keys: &[String],
    catalog_keys: &[String],
    reward: i32,
    penalty: i32,
) {
    for key in catalog_keys.iter().filter(|k| title_keys.contains(k)) {
        scored.add(reward, format!("+{reward} {label} '{key}' matches"));
    }
    for key in catalog_keys.iter().filter(|k| !title_keys.contains(k)) {
        scored.add(
            penalty.saturating_neg(),
            format!("-{penalty} catalog has {label} '{key}' but title does not"),
        );
    }
    for key in title_keys.iter().filter(|k| !catalog_keys.contains(k)) {
        scored.add(
            penalty.saturating_neg(),
            format!("-{penalty} title has {label} '{key}' but catalog does not"),
        );
    }
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod tests;
