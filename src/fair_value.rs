//! Picking the reference price for a matched card at the listing's grade

use crate::models::{CandidateEntry, PriceTable};
use crate::title::ParsedTitle;
use serde::Serialize;

pub const GRADED_ESTIMATE_LABEL: &str = "graded (estimate)";
pub const RAW_LABEL: &str = "raw";
pub const UNKNOWN_LABEL: &str = "unknown (no usable price)";

/// Reference price for a listing, or an explicit "no data".
///
/// A zero price and a missing price are different answers, so there is no
/// default amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FairValue {
    Known { amount: u64, label: String },
    Unknown { label: String },
}

impl FairValue {
    fn known(amount: u64, label: &str) -> Self {
        FairValue::Known {
            amount,
            label: label.to_string(),
        }
    }

    pub fn unknown() -> Self {
        FairValue::Unknown {
            label: UNKNOWN_LABEL.to_string(),
        }
    }

    /// Price in minor currency units, `None` when unknown
    pub fn amount(&self) -> Option<u64> {
        match self {
            FairValue::Known { amount, .. } => Some(*amount),
            FairValue::Unknown { .. } => None,
        }
    }

    /// Which price field (and fallback) produced the value
    pub fn label(&self) -> &str {
        match self {
            FairValue::Known { label, .. } | FairValue::Unknown { label } => label,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, FairValue::Known { .. })
    }
}

/// Select the fair value for a matched entry.
///
/// Graded 10 uses the grade 10 price, graded 9 and up the grade 9 price, any
/// other graded listing the grade 9 price as an estimate, and everything else
/// the ungraded price. Each step falls through when its field is missing or
/// not positive; when nothing is left the result is `FairValue::Unknown`.
pub fn select_fair_value(entry: &CandidateEntry, title: Option<&ParsedTitle>) -> FairValue {
    let prices = &entry.prices;

    if let Some(title) = title.filter(|t| t.is_graded) {
        if let (Some(grade), Some(label)) = (title.grade, title.grade_label()) {
            if grade >= 10.0 {
                if let Some(amount) = usable(prices.grade_10) {
                    return FairValue::known(amount, &label);
                }
            }
            if grade >= 9.0 {
                if let Some(amount) = usable(prices.grade_9) {
                    return FairValue::known(amount, &label);
                }
            }
        }
        if let Some(amount) = usable(prices.grade_9) {
            return FairValue::known(amount, GRADED_ESTIMATE_LABEL);
        }
    }

    raw_or_unknown(entry.id.as_str(), prices)
}

fn raw_or_unknown(id: &str, prices: &PriceTable) -> FairValue {
    match usable(prices.ungraded) {
        Some(amount) => FairValue::known(amount, RAW_LABEL),
        None => {
            log::debug!("No usable price for candidate {}", id);
            FairValue::unknown()
        }
    }
}

fn usable(price: Option<i64>) -> Option<u64> {
    price.filter(|p| *p > 0).map(|p| p as u64)
}
