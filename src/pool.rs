//! Candidate pool assembly
//!
//! Collects every catalog entry that could be the same card as a seed entry
//! (same set, same base name) so the matcher can pick between its variants.

use crate::catalog::parse_catalog_name;
use crate::models::CandidateEntry;
use crate::screening::sealed_product_keyword;
use crate::taxonomy::VariantTaxonomy;

/// Entries in `catalog` sharing the seed's set and base name (case-insensitive).
///
/// Sealed products are never candidates. When nothing in `catalog` matches,
/// the pool is the seed alone. An unparseable or sealed seed yields an empty
/// pool.
pub fn candidate_pool<'a>(
    taxonomy: &VariantTaxonomy,
    seed: &'a CandidateEntry,
    catalog: &'a [CandidateEntry],
) -> Vec<&'a CandidateEntry> {
    if let Some(keyword) = sealed_product_keyword(&seed.name) {
        log::debug!("Seed '{}' is a sealed product ({})", seed.name, keyword);
        return Vec::new();
    }
    let Some(seed_name) = parse_catalog_name(taxonomy, &seed.name) else {
        return Vec::new();
    };
    let base_name = seed_name.base_name.to_lowercase();

    let mut pool: Vec<&CandidateEntry> = catalog
        .iter()
        .filter(|entry| entry.set_name.eq_ignore_ascii_case(&seed.set_name))
        .filter(|entry| sealed_product_keyword(&entry.name).is_none())
        .filter(|entry| {
            parse_catalog_name(taxonomy, &entry.name)
                .map(|parsed| parsed.base_name.to_lowercase() == base_name)
                .unwrap_or(false)
        })
        .collect();

    if pool.is_empty() {
        pool.push(seed);
    }

    log::debug!(
        "Candidate pool for '{}' ({}): {} entries",
        seed.name,
        seed.set_name,
        pool.len()
    );
    pool
}
