use serde::{Deserialize, Serialize};

/// Which tax regime a taxpayer category is assessed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxComputation {
    /// Progressive monthly personal income tax.
    PersonalIncome,
    /// Two-tier annual company income tax.
    CompanyIncome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxpayerCategory {
    #[serde(rename = "employee")]
    Employee,
    #[serde(rename = "self-employed")]
    SelfEmployed,
    #[serde(rename = "cac")]
    CacRegisteredBusiness,
}

impl TaxpayerCategory {
    pub fn all() -> &'static [TaxpayerCategory] {
        &[
            TaxpayerCategory::Employee,
            TaxpayerCategory::SelfEmployed,
            TaxpayerCategory::CacRegisteredBusiness,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::SelfEmployed => "self-employed",
            Self::CacRegisteredBusiness => "cac",
        }
    }

    /// Parses a category code. Matching is case-insensitive and accepts
    /// `self_employed` as well as `self-employed`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "employee" => Some(Self::Employee),
            "self-employed" | "self_employed" => Some(Self::SelfEmployed),
            "cac" => Some(Self::CacRegisteredBusiness),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::SelfEmployed => "Self-Employed",
            Self::CacRegisteredBusiness => "CAC-Registered Business",
        }
    }

    /// Employees and the self-employed pay PIT; registered businesses pay CIT.
    pub fn computation(&self) -> TaxComputation {
        match self {
            Self::Employee | Self::SelfEmployed => TaxComputation::PersonalIncome,
            Self::CacRegisteredBusiness => TaxComputation::CompanyIncome,
        }
    }
}
