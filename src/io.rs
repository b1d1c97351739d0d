use crate::error::Result;
use crate::models::{CandidateEntry, PriceTable};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One row of a candidate CSV: `id,name,set,ungraded,grade9,grade10`
#[derive(Debug, Deserialize)]
struct CandidateRow {
    id: String,
    name: String,
    #[serde(default)]
    set: String,
    #[serde(default)]
    ungraded: Option<i64>,
    #[serde(default)]
    grade9: Option<i64>,
    #[serde(default)]
    grade10: Option<i64>,
}

impl From<CandidateRow> for CandidateEntry {
    fn from(row: CandidateRow) -> Self {
        CandidateEntry::new(
            &row.id,
            &row.name,
            PriceTable::new(row.ungraded, row.grade9, row.grade10),
        )
        .with_set(&row.set)
    }
}

/// Read a candidate pool, JSON for `.json` files and CSV otherwise
pub fn read_candidates(path: &Path) -> Result<Vec<CandidateEntry>> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let candidates = if is_json {
        read_candidates_json(path)?
    } else {
        read_candidates_csv(path)?
    };
    log::info!("Loaded {} candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}

pub fn read_candidates_csv(path: &Path) -> Result<Vec<CandidateEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut candidates = Vec::new();

    for result in rdr.deserialize() {
        let row: CandidateRow = result?;
        if row.name.is_empty() {
            log::warn!("Skipping candidate {} without a name", row.id);
            continue;
        }
        candidates.push(CandidateEntry::from(row));
    }

    Ok(candidates)
}

pub fn read_candidates_json(path: &Path) -> Result<Vec<CandidateEntry>> {
    let content = fs::read_to_string(path)?;
    let candidates: Vec<CandidateEntry> = serde_json::from_str(&content)?;
    Ok(candidates)
}

/// One title per line; blank lines are skipped
pub fn read_titles(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
