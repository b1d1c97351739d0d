use serde::{Deserialize, Serialize};

/// Reference prices for one catalog entry, in minor currency units (cents).
///
/// A missing or non-positive field means "no data" for that grade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    #[serde(default, alias = "raw", alias = "current_raw")]
    pub ungraded: Option<i64>,
    #[serde(default, alias = "grade9", alias = "current_psa9")]
    pub grade_9: Option<i64>,
    #[serde(default, alias = "grade10", alias = "current_psa10")]
    pub grade_10: Option<i64>,
}

impl PriceTable {
    pub fn new(ungraded: Option<i64>, grade_9: Option<i64>, grade_10: Option<i64>) -> Self {
        Self {
            ungraded,
            grade_9,
            grade_10,
        }
    }
}

/// One catalog entry in a candidate pool.
///
/// `name` follows the catalog convention `Charizard [1st Edition] #4`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEntry {
    #[serde(alias = "card_slug")]
    pub id: String,
    #[serde(alias = "card_name")]
    pub name: String,
    #[serde(default, alias = "set_name")]
    pub set_name: String,
    #[serde(default)]
    pub prices: PriceTable,
}

impl CandidateEntry {
    pub fn new(id: &str, name: &str, prices: PriceTable) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            set_name: String::new(),
            prices,
        }
    }

    pub fn with_set(mut self, set_name: &str) -> Self {
        self.set_name = set_name.to_string();
        self
    }
}
