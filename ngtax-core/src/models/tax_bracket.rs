use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A contiguous monthly income range taxed at a single marginal rate.
///
/// `max_income` of `None` marks the open-ended top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    pub const fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            tax_rate,
        }
    }

    /// Portion of `income` that falls inside this bracket.
    pub fn portion_of(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income <= self.min_income {
            return Decimal::ZERO;
        }
        let ceiling = match self.max_income {
            Some(max) => income.min(max),
            None => income,
        };
        ceiling - self.min_income
    }
}
