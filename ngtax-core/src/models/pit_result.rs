use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly personal income tax breakdown for an employee or self-employed person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitResult {
    /// Monthly income after allowances or expenses, floored at zero.
    pub taxable_income: Decimal,
    pub monthly_tax: Decimal,
    /// `monthly_tax × 12`.
    pub annual_tax: Decimal,
    /// `taxable_income − monthly_tax`.
    pub net_income: Decimal,
    /// Monthly tax as a percentage of taxable income.
    pub effective_rate: Decimal,
}

impl PitResult {
    /// Net income over a full year (`net_income × 12`), saturating at
    /// `Decimal::MAX` for hand-built results too large to annualise.
    pub fn annual_net_income(&self) -> Decimal {
        self.net_income
            .checked_mul(Decimal::from(12))
            .unwrap_or(if self.net_income.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn result_with_net(net_income: Decimal) -> PitResult {
        PitResult {
            taxable_income: net_income,
            monthly_tax: Decimal::ZERO,
            annual_tax: Decimal::ZERO,
            net_income,
            effective_rate: Decimal::ZERO,
        }
    }

    #[test]
    fn annual_net_income_is_twelve_months() {
        assert_eq!(result_with_net(dec!(368000.11)).annual_net_income(), dec!(4416001.32));
    }

    #[test]
    fn annual_net_income_saturates_instead_of_overflowing() {
        assert_eq!(result_with_net(Decimal::MAX).annual_net_income(), Decimal::MAX);
    }
}
