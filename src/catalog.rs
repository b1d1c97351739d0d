//! Catalog display name parsing
//!
//! Catalog names carry variants as bracketed tags and the card number as a
//! `#` suffix: `Charizard [1st Edition] #4`, `Pikachu [Gold Star] #104`.

use crate::taxonomy::{VariantKind, VariantTaxonomy};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref BRACKET_TAG_RE: Regex = Regex::new(r"\[(.*?)\]").unwrap();
    static ref NUMBER_SUFFIX_RE: Regex = Regex::new(r"#(\S+)").unwrap();
}

/// Structured view of one catalog display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCatalogName {
    pub base_name: String,
    pub item_number: Option<String>,
    pub value_variants: Vec<String>,
    pub cosmetic_variants: Vec<String>,
    /// Bracket texts as written, e.g. "1st Edition"
    pub tags: Vec<String>,
}

/// Parse a catalog display name. Returns `None` for an empty name.
///
/// Each bracket tag maps to at most one variant key; tags that match no key
/// are kept in `tags` but ignored for scoring.
pub fn parse_catalog_name(taxonomy: &VariantTaxonomy, name: &str) -> Option<ParsedCatalogName> {
    if name.trim().is_empty() {
        return None;
    }

    let tags: Vec<String> = BRACKET_TAG_RE
        .captures_iter(name)
        .map(|caps| caps[1].trim().to_string())
        .collect();

    let mut value_variants: Vec<String> = Vec::new();
    let mut cosmetic_variants: Vec<String> = Vec::new();
    for tag in &tags {
        let (keys, key) = match taxonomy.classify_tag(tag) {
            Some((VariantKind::Value, key)) => (&mut value_variants, key),
            Some((VariantKind::Cosmetic, key)) => (&mut cosmetic_variants, key),
            None => {
                log::debug!("Unrecognised catalog tag '{}' in '{}'", tag, name);
                continue;
            }
        };
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }

    let without_tags = BRACKET_TAG_RE.replace_all(name, " ");
    let item_number = NUMBER_SUFFIX_RE
        .captures(&without_tags)
        .map(|caps| caps[1].to_string());
    let base_name = NUMBER_SUFFIX_RE
        .replace_all(&without_tags, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    Some(ParsedCatalogName {
        base_name,
        item_number,
        value_variants,
        cosmetic_variants,
        tags,
    })
}
