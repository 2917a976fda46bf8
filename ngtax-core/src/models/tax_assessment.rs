use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CitResult, PitResult};

/// Outcome of assessing a taxpayer under the regime its category selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaxAssessment {
    Personal(PitResult),
    Company(CitResult),
}

impl TaxAssessment {
    /// Tax owed for a full year under either regime.
    pub fn annual_tax(&self) -> Decimal {
        match self {
            Self::Personal(pit) => pit.annual_tax,
            Self::Company(cit) => cit.annual_tax,
        }
    }

    pub fn effective_rate(&self) -> Decimal {
        match self {
            Self::Personal(pit) => pit.effective_rate,
            Self::Company(cit) => cit.effective_rate,
        }
    }
}
