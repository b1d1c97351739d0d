//! Listing title parsing
//!
//! Pulls grading info, the card number and variant keys out of a free-text
//! marketplace title like
//! `"Pokemon Pikachu Gold Star 104/115 Holon Phantoms PSA 10 GEM MINT"`.

use crate::taxonomy::VariantTaxonomy;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref GRADE_RE: Regex =
        Regex::new(r"(?i)\b(PSA|CGC|BGS|SGC|ACE|AGS|TAG|GMA|MNT)\s*(\d+\.?\d*)\b").unwrap();
    static ref GRADED_RE: Regex = Regex::new(r"\bgraded\b").unwrap();
    static ref FRACTION_NUMBER_RE: Regex = Regex::new(r"(\d{1,4})\s*/\s*\d{1,4}").unwrap();
    static ref HASH_NUMBER_RE: Regex = Regex::new(r"#\s*([A-Za-z]*\d+[A-Za-z]*)").unwrap();
}

/// Grading companies recognised in listing titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GradingCompany {
    Psa,
    Cgc,
    Bgs,
    Sgc,
    Ace,
    Ags,
    Tag,
    Gma,
    Mnt,
}

impl GradingCompany {
    /// Returns the uppercase company token (e.g., "PSA", "BGS")
    pub fn as_str(&self) -> &'static str {
        match self {
            GradingCompany::Psa => "PSA",
            GradingCompany::Cgc => "CGC",
            GradingCompany::Bgs => "BGS",
            GradingCompany::Sgc => "SGC",
            GradingCompany::Ace => "ACE",
            GradingCompany::Ags => "AGS",
            GradingCompany::Tag => "TAG",
            GradingCompany::Gma => "GMA",
            GradingCompany::Mnt => "MNT",
        }
    }

    /// Parse a company token, case-insensitive
    pub fn parse(token: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|company| company.as_str().eq_ignore_ascii_case(token.trim()))
    }

    /// Returns all recognised companies
    pub fn all() -> &'static [GradingCompany] {
        &[
            GradingCompany::Psa,
            GradingCompany::Cgc,
            GradingCompany::Bgs,
            GradingCompany::Sgc,
            GradingCompany::Ace,
            GradingCompany::Ags,
            GradingCompany::Tag,
            GradingCompany::Gma,
            GradingCompany::Mnt,
        ]
    }
}

impl std::fmt::Display for GradingCompany {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured view of one listing title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedTitle {
    pub title_lower: String,
    pub grading_company: Option<GradingCompany>,
    pub grade: Option<f64>,
    pub is_graded: bool,
    pub item_number: Option<String>,
    pub value_variants: Vec<String>,
    pub cosmetic_variants: Vec<String>,
}

impl ParsedTitle {
    /// Company and grade as written on a slab label, e.g. "PSA 9.5"
    pub fn grade_label(&self) -> Option<String> {
        match (self.grading_company, self.grade) {
            (Some(company), Some(grade)) => Some(format!("{} {}", company, grade)),
            _ => None,
        }
    }

    /// Listing condition: "PSA 10", "Graded" or "Ungraded"
    pub fn condition_label(&self) -> String {
        match self.grade_label() {
            Some(label) if self.is_graded => label,
            _ if self.is_graded => "Graded".to_string(),
            _ => "Ungraded".to_string(),
        }
    }
}

/// Parse a listing title. Returns `None` for an empty title.
///
/// Unknown grading companies are not an error: a "CGA 10" slab parses as
/// ungraded and is priced as raw.
pub fn parse_title(taxonomy: &VariantTaxonomy, title: &str) -> Option<ParsedTitle> {
    if title.trim().is_empty() {
        return None;
    }

    let title_lower = title.to_lowercase();
    let (grading_company, grade, is_graded) = extract_grading(title, &title_lower);
    let item_number = extract_item_number(title);
    let variants = taxonomy.detect(&title_lower);

    let parsed = ParsedTitle {
        title_lower,
        grading_company,
        grade,
        is_graded,
        item_number,
        value_variants: variants.value,
        cosmetic_variants: variants.cosmetic,
    };
    log::debug!(
        "Parsed title '{}': condition={}, number={:?}, value={:?}, cosmetic={:?}",
        title,
        parsed.condition_label(),
        parsed.item_number,
        parsed.value_variants,
        parsed.cosmetic_variants
    );
    Some(parsed)
}

fn extract_grading(title: &str, title_lower: &str) -> (Option<GradingCompany>, Option<f64>, bool) {
    if let Some(caps) = GRADE_RE.captures(title) {
        let company = GradingCompany::parse(&caps[1]);
        let grade = caps[2].parse::<f64>().ok();
        if company.is_some() && grade.is_some() {
            return (company, grade, true);
        }
    }

    (None, None, GRADED_RE.is_match(title_lower))
}

/// Card number from a title. A "4/102" fraction always wins over "#XY176".
pub fn extract_item_number(title: &str) -> Option<String> {
    if let Some(caps) = FRACTION_NUMBER_RE.captures(title) {
        return Some(strip_leading_zeros(&caps[1]));
    }

    HASH_NUMBER_RE
        .captures(title)
        .map(|caps| caps[1].to_string())
}

/// "004" -> "4", "000" -> "0"
pub fn strip_leading_zeros(number: &str) -> String {
    let stripped = number.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}
