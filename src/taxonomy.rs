//! Variant registries for listing titles and catalog names
//!
//! Two ordered registries: value variants define a financially distinct card
//! (a 1st Edition Charizard is not the same product as an unlimited one),
//! cosmetic variants only separate printings of the same card.
//!
//! Registry order is part of the contract. Detection walks the value registry
//! and then the cosmetic registry, and every key claims the text its alias
//! matched, so a later key can never re-use text an earlier key consumed.
//! `prerelease staff` is therefore registered before `prerelease` and `staff`.

use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Value variants in detection order: (canonical key, aliases)
const VALUE_VARIANTS: &[(&str, &[&str])] = &[
    ("1st edition", &["1st edition", "1st ed.", "1st ed", "first edition"]),
    ("gold star", &["gold star", "goldstar", "gold ★", " ★ "]),
    ("shadowless", &["shadowless", "shadow less"]),
    ("1999-2000", &["1999-2000", "1999 2000", "uk print", "4th print"]),
    ("black dot error", &["black dot error", "black dot"]),
    ("double holo error", &["double holo error", "double holo"]),
    ("tekno", &["tekno", "techno"]),
    ("sparkle", &["sparkle", "spectra"]),
    ("for position only", &["for position only", "fpo", "test print"]),
    ("trainer deck a", &["trainer deck a"]),
    ("trainer deck b", &["trainer deck b"]),
    (
        "prerelease staff",
        &["prerelease staff", "pre-release staff", "staff prerelease"],
    ),
    ("prerelease", &["prerelease", "pre-release", "pre release"]),
    ("regional championship staff", &["regional championship staff"]),
    ("staff", &["staff"]),
    ("stadium challenge", &["stadium challenge"]),
    (
        "cosmos professor program",
        &["cosmos professor program", "cosmos professor"],
    ),
    ("professor program", &["professor program", "professor promo"]),
    ("championships", &["championships", "championship", "worlds"]),
    ("quarter-finalist", &["quarter-finalist", "quarter finalist", "qf"]),
    ("semi-finalist", &["semi-finalist", "semi finalist", "sf"]),
    ("top thirty-two", &["top thirty-two", "top 32", "top thirty two"]),
    ("top 8", &["top 8", "top eight"]),
    ("ultra ball league", &["ultra ball league"]),
    ("premier ball league", &["premier ball league"]),
    ("error", &["error", "misprint"]),
];

/// Cosmetic variants in detection order: (canonical key, aliases)
const COSMETIC_VARIANTS: &[(&str, &[&str])] = &[
    (
        "reverse holo",
        &["reverse holographic", "reverse holo", "rev holo", "reverse"],
    ),
    ("non-holo", &["non-holo", "non holo", "nonholo"]),
    ("holo", &["holographic", "holofoil", "holo"]),
    ("rainbow foil", &["rainbow foil", "rainbow"]),
    ("foil", &["foil"]),
];

/// When the first key is detected, the listed keys are dropped
const SUPERSEDES: &[(&str, &[&str])] = &[("reverse holo", &["holo"])];

/// Which registry a tag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Value,
    Cosmetic,
}

/// A canonical variant key with its aliases in match order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantTag {
    pub key: String,
    pub aliases: Vec<String>,
    /// Keys dropped from a detection result whenever this key is detected
    #[serde(default)]
    pub supersedes: Vec<String>,
}

impl VariantTag {
    pub fn new(key: &str, aliases: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            supersedes: Vec::new(),
        }
    }

    pub fn superseding(mut self, keys: &[&str]) -> Self {
        self.supersedes = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    fn lowercased(self) -> Self {
        Self {
            key: self.key.to_lowercase(),
            aliases: self.aliases.iter().map(|a| a.to_lowercase()).collect(),
            supersedes: self.supersedes.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

/// Variant keys detected in one piece of text, in registry order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectedVariants {
    pub value: Vec<String>,
    pub cosmetic: Vec<String>,
}

impl DetectedVariants {
    pub fn contains(&self, key: &str) -> bool {
        self.value.iter().chain(&self.cosmetic).any(|k| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.cosmetic.is_empty()
    }
}

/// Immutable pair of ordered variant registries.
///
/// Built once and passed by reference into every parse; it holds no interior
/// mutability and can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantTaxonomy {
    #[serde(default)]
    value: Vec<VariantTag>,
    #[serde(default)]
    cosmetic: Vec<VariantTag>,
}

impl Default for VariantTaxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

impl VariantTaxonomy {
    /// The built-in trading card registry
    pub fn standard() -> Self {
        let build = |table: &[(&str, &[&str])]| -> Vec<VariantTag> {
            table
                .iter()
                .map(|(key, aliases)| {
                    let supersedes = SUPERSEDES
                        .iter()
                        .find(|(winner, _)| winner == key)
                        .map(|(_, dropped)| *dropped)
                        .unwrap_or(&[]);
                    VariantTag::new(key, aliases).superseding(supersedes)
                })
                .collect()
        };

        Self {
            value: build(VALUE_VARIANTS),
            cosmetic: build(COSMETIC_VARIANTS),
        }
    }

    /// Build a taxonomy from explicit ordered registries.
    ///
    /// Keys and aliases are lowercased; the result is validated.
    pub fn new(value: Vec<VariantTag>, cosmetic: Vec<VariantTag>) -> Result<Self> {
        let taxonomy = Self {
            value: value.into_iter().map(VariantTag::lowercased).collect(),
            cosmetic: cosmetic.into_iter().map(VariantTag::lowercased).collect(),
        };
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Load a taxonomy from a JSON document of the form
    /// `{ "value": [{ "key", "aliases", "supersedes" }], "cosmetic": [...] }`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Self = serde_json::from_str(json)?;
        Self::new(raw.value, raw.cosmetic)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let taxonomy = Self::from_json(&content)?;
        log::info!(
            "Loaded variant taxonomy from {} ({} value, {} cosmetic)",
            path.display(),
            taxonomy.value.len(),
            taxonomy.cosmetic.len()
        );
        Ok(taxonomy)
    }

    pub fn value_tags(&self) -> &[VariantTag] {
        &self.value
    }

    pub fn cosmetic_tags(&self) -> &[VariantTag] {
        &self.cosmetic
    }

    pub fn tags(&self, kind: VariantKind) -> &[VariantTag] {
        match kind {
            VariantKind::Value => &self.value,
            VariantKind::Cosmetic => &self.cosmetic,
        }
    }

    /// Detect variant keys in free text (case-insensitive substring match).
    ///
    /// For each key in registry order the first alias with an unclaimed
    /// occurrence wins and claims all of its unclaimed occurrences. Keys named
    /// in a detected key's `supersedes` list are dropped afterwards.
    pub fn detect(&self, text: &str) -> DetectedVariants {
        let text = text.to_lowercase();
        let mut claimed = vec![false; text.len()];

        let mut detected = DetectedVariants {
            value: detect_in(&self.value, &text, &mut claimed),
            cosmetic: detect_in(&self.cosmetic, &text, &mut claimed),
        };
        self.apply_supersedes(&mut detected);
        detected
    }

    /// Classify a catalog bracket tag such as `1st Edition`.
    ///
    /// Value keys are tried first in registry order, cosmetic keys only when
    /// no value key is contained in the tag.
    pub fn classify_tag(&self, tag: &str) -> Option<(VariantKind, &str)> {
        let tag = tag.to_lowercase();

        first_key_in(&self.value, &tag)
            .map(|key| (VariantKind::Value, key))
            .or_else(|| first_key_in(&self.cosmetic, &tag).map(|key| (VariantKind::Cosmetic, key)))
    }

    fn apply_supersedes(&self, detected: &mut DetectedVariants) {
        let dropped: Vec<&str> = self
            .value
            .iter()
            .chain(&self.cosmetic)
            .filter(|tag| detected.contains(&tag.key))
            .flat_map(|tag| tag.supersedes.iter().map(String::as_str))
            .collect();

        if dropped.is_empty() {
            return;
        }
        detected.value.retain(|k| !dropped.contains(&k.as_str()));
        detected.cosmetic.retain(|k| !dropped.contains(&k.as_str()));
    }

    fn validate(&self) -> Result<()> {
        let mut keys = HashSet::new();

        for tag in self.value.iter().chain(&self.cosmetic) {
            if tag.key.trim().is_empty() {
                return Err(MatchError::InvalidTaxonomy("empty variant key".into()));
            }
            if !keys.insert(tag.key.as_str()) {
                return Err(MatchError::InvalidTaxonomy(format!(
                    "duplicate variant key '{}'",
                    tag.key
                )));
            }
            if tag.aliases.is_empty() || tag.aliases.iter().any(|a| a.is_empty()) {
                return Err(MatchError::InvalidTaxonomy(format!(
                    "variant '{}' needs at least one non-empty alias",
                    tag.key
                )));
            }
        }

        for tag in self.value.iter().chain(&self.cosmetic) {
            for dropped in &tag.supersedes {
                if dropped == &tag.key || !keys.contains(dropped.as_str()) {
                    return Err(MatchError::InvalidTaxonomy(format!(
                        "variant '{}' supersedes unknown key '{}'",
                        tag.key, dropped
                    )));
                }
            }
        }

        Ok(())
    }
}

fn first_key_in<'a>(tags: &'a [VariantTag], text: &str) -> Option<&'a str> {
    tags.iter()
        .find(|t| text.contains(t.key.as_str()))
        .map(|t| t.key.as_str())
}

fn detect_in(tags: &[VariantTag], text: &str, claimed: &mut [bool]) -> Vec<String> {
    let mut found = Vec::new();
    for tag in tags {
        if tag.aliases.iter().any(|alias| claim(text, alias, claimed)) {
            found.push(tag.key.clone());
        }
    }
    found
}

/// Marks every unclaimed occurrence of `alias` as claimed.
/// Returns false if there was none.
fn claim(text: &str, alias: &str, claimed: &mut [bool]) -> bool {
    if alias.is_empty() {
        return false;
    }

    let mut hit = false;
    for (start, matched) in text.match_indices(alias) {
        let span = start..start + matched.len();
        if claimed[span.clone()].iter().any(|&c| c) {
            continue;
        }
        claimed[span].iter_mut().for_each(|c| *c = true);
        hit = true;
    }
    hit
}

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod tests;
