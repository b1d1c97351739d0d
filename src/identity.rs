//! Catalog identity and marketplace search query for one catalog entry

use crate::catalog::parse_catalog_name;
use crate::taxonomy::{VariantKind, VariantTaxonomy};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref SET_PREFIX_RE: Regex = Regex::new(r"(?i)^pokemon\s+").unwrap();
}

/// What a catalog entry is, plus the query used to find listings for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIdentity {
    pub base_name: String,
    pub item_number: Option<String>,
    pub value_variants: Vec<String>,
    pub cosmetic_variants: Vec<String>,
    /// Set name without a leading "Pokemon "
    pub set_name: String,
    pub search_query: String,
}

/// Build the identity of a catalog entry. Returns `None` for an empty name.
///
/// The query keeps value variants in their catalog spelling ("Gold Star",
/// not "gold star") since that is how sellers write them; cosmetic variants
/// are left out.
pub fn catalog_identity(
    taxonomy: &VariantTaxonomy,
    display_name: &str,
    set_name: &str,
) -> Option<CatalogIdentity> {
    let parsed = parse_catalog_name(taxonomy, display_name)?;
    let set_name = SET_PREFIX_RE.replace(set_name.trim(), "").trim().to_string();

    let mut parts: Vec<&str> = vec!["Pokemon", parsed.base_name.as_str()];
    let mut used_keys: Vec<&str> = Vec::new();
    for tag in &parsed.tags {
        if let Some((VariantKind::Value, key)) = taxonomy.classify_tag(tag) {
            if !used_keys.contains(&key) {
                used_keys.push(key);
                parts.push(tag);
            }
        }
    }
    if !set_name.is_empty() {
        parts.push(&set_name);
    }
    if let Some(number) = &parsed.item_number {
        parts.push(number);
    }

    let search_query = parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");

    Some(CatalogIdentity {
        base_name: parsed.base_name,
        item_number: parsed.item_number,
        value_variants: parsed.value_variants,
        cosmetic_variants: parsed.cosmetic_variants,
        set_name,
        search_query,
    })
}
