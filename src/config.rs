//! Scoring weights and confidence thresholds
//!
//! The defaults are the production values. A JSON file may override any
//! subset of them; every loaded config is validated before use.

use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on any weight or threshold magnitude
pub const MAX_WEIGHT: i32 = 10_000;

/// Points awarded or deducted per scoring rule.
///
/// Rewards and penalties are magnitudes; penalties are subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Catalog base name found in the title
    pub base_name_reward: i32,
    /// Fixed score when the base name is missing from the title
    pub name_gate_score: i32,
    pub number_match_reward: i32,
    pub number_mismatch_penalty: i32,
    pub value_match_reward: i32,
    pub value_mismatch_penalty: i32,
    pub cosmetic_match_reward: i32,
    pub cosmetic_mismatch_penalty: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_name_reward: 20,
            name_gate_score: -100,
            number_match_reward: 15,
            number_mismatch_penalty: 20,
            value_match_reward: 10,
            value_mismatch_penalty: 50,
            cosmetic_match_reward: 3,
            cosmetic_mismatch_penalty: 10,
        }
    }
}

/// Minimum score for each confidence tier; anything below `low` is "none"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceThresholds {
    pub high: i32,
    pub medium: i32,
    pub low: i32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 35,
            medium: 20,
            low: 0,
        }
    }
}

/// Complete matcher configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub weights: ScoringWeights,
    pub thresholds: ConfidenceThresholds,
}

impl MatcherConfig {
    /// Parse and validate a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded matcher config from {}", path.display());
        Ok(config)
    }

    /// Check the invariants the scorer relies on.
    ///
    /// A single unexplained value variant must outweigh a name and number
    /// match together, cosmetic weights stay below value weights, and the
    /// name gate score sits below every confidence tier. Every magnitude is
    /// capped at [`MAX_WEIGHT`] so a full score stays far from `i32` limits.
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        let t = &self.thresholds;

        let magnitudes = [
            ("base_name_reward", w.base_name_reward),
            ("number_match_reward", w.number_match_reward),
            ("number_mismatch_penalty", w.number_mismatch_penalty),
            ("value_match_reward", w.value_match_reward),
            ("value_mismatch_penalty", w.value_mismatch_penalty),
            ("cosmetic_match_reward", w.cosmetic_match_reward),
            ("cosmetic_mismatch_penalty", w.cosmetic_mismatch_penalty),
        ];
        if let Some((name, value)) = magnitudes.iter().find(|(_, value)| *value < 0) {
            return Err(invalid(format!("{name} must not be negative (got {value})")));
        }
        if let Some((name, value)) = magnitudes.iter().find(|(_, value)| *value > MAX_WEIGHT) {
            return Err(invalid(format!(
                "{name} must not exceed {MAX_WEIGHT} (got {value})"
            )));
        }
        let bounded = [
            ("name_gate_score", w.name_gate_score),
            ("thresholds.high", t.high),
            ("thresholds.medium", t.medium),
            ("thresholds.low", t.low),
        ];
        if let Some((name, value)) = bounded
            .iter()
            .find(|(_, value)| !(-MAX_WEIGHT..=MAX_WEIGHT).contains(value))
        {
            return Err(invalid(format!(
                "{name} must lie within ±{MAX_WEIGHT} (got {value})"
            )));
        }

        if w.value_mismatch_penalty <= w.base_name_reward + w.number_match_reward {
            return Err(invalid(format!(
                "value_mismatch_penalty ({}) must exceed base_name_reward + number_match_reward ({})",
                w.value_mismatch_penalty,
                w.base_name_reward + w.number_match_reward
            )));
        }
        if w.cosmetic_mismatch_penalty >= w.value_mismatch_penalty {
            return Err(invalid(
                "cosmetic_mismatch_penalty must be smaller than value_mismatch_penalty".into(),
            ));
        }
        if w.cosmetic_match_reward >= w.value_match_reward {
            return Err(invalid(
                "cosmetic_match_reward must be smaller than value_match_reward".into(),
            ));
        }

        if !(t.high > t.medium && t.medium > t.low) {
            return Err(invalid(format!(
                "thresholds must satisfy high > medium > low (got {}, {}, {})",
                t.high, t.medium, t.low
            )));
        }
        if w.name_gate_score >= 0 || w.name_gate_score >= t.low {
            return Err(invalid(format!(
                "name_gate_score ({}) must be negative and below the low threshold ({})",
                w.name_gate_score, t.low
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> MatchError {
    MatchError::InvalidConfig(message)
}
