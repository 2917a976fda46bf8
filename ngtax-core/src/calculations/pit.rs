//! Progressive Personal Income Tax (PIT) on monthly income.
//!
//! Income is taxed marginally: each naira is taxed at the rate of the bracket
//! it falls into, never at the top rate applied to the whole amount.
//!
//! # Standard Brackets (monthly, Naira)
//!
//! | From      | To        | Rate |
//! |-----------|-----------|------|
//! | 0         | 300,000   | 7%   |
//! | 300,001   | 600,000   | 11%  |
//! | 600,001   | 1,100,000 | 15%  |
//! | 1,100,001 | 1,600,000 | 19%  |
//! | 1,600,001 | 3,200,000 | 21%  |
//! | 3,200,001 | 3,900,000 | 24%  |
//! | 3,900,001 | 6,000,000 | 27%  |
//! | 6,000,001 | no limit  | 30%  |
//!
//! Each bracket above the first is taxed from its lower bound, so the naira
//! between 300,000 and 300,001 (and at every later edge) is not taxed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use ngtax_core::calculations::{calculate_monthly_pit, calculate_pit};
//!
//! // 300,000 at 7% plus 199,999 at 11%
//! assert_eq!(calculate_monthly_pit(dec!(500000)), dec!(42999.89));
//!
//! let result = calculate_pit(dec!(500000), dec!(100000));
//! assert_eq!(result.taxable_income, dec!(400000));
//! assert_eq!(result.monthly_tax, dec!(31999.89));
//! assert_eq!(result.annual_tax, dec!(383998.68));
//! assert_eq!(result.effective_rate, dec!(8.00));
//! ```

use std::sync::LazyLock;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::calculations::common::{clamp_amount, effective_rate, floor_at_zero, round_half_up};
use crate::{PitResult, TaxBracket};

/// `(min_income, max_income, rate in percent)` for the standard table.
const NIGERIA_PIT_SCHEDULE: [(i64, Option<i64>, i64); 8] = [
    (0, Some(300_000), 7),
    (300_001, Some(600_000), 11),
    (600_001, Some(1_100_000), 15),
    (1_100_001, Some(1_600_000), 19),
    (1_600_001, Some(3_200_000), 21),
    (3_200_001, Some(3_900_000), 24),
    (3_900_001, Some(6_000_000), 27),
    (6_000_001, None, 30),
];

static NIGERIA_PIT_BRACKETS: LazyLock<Vec<TaxBracket>> = LazyLock::new(|| {
    NIGERIA_PIT_SCHEDULE
        .iter()
        .map(|&(min, max, percent)| {
            TaxBracket::new(
                Decimal::from(min),
                max.map(Decimal::from),
                Decimal::new(percent, 2),
            )
        })
        .collect()
});

/// The standard monthly PIT bracket table, ascending by income.
pub fn nigeria_pit_brackets() -> &'static [TaxBracket] {
    &NIGERIA_PIT_BRACKETS
}

/// Reasons a custom bracket table is rejected by [`PitCalculator::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("no tax brackets provided")]
    Empty,

    #[error("first bracket must start at 0, got {0}")]
    NonZeroStart(Decimal),

    #[error("bracket {index} must start between {expected} and one naira above it, got {found}")]
    Discontinuous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket {index} has an empty or inverted range")]
    EmptyRange { index: usize },

    #[error("bracket {index} rate must be between 0 and 1, got {rate}")]
    RateOutOfRange { index: usize, rate: Decimal },

    #[error("bracket {index} rate must exceed the rate of the bracket below it")]
    NonIncreasingRate { index: usize },

    #[error("bracket {index} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd { index: usize },

    #[error("last bracket must have no upper limit")]
    BoundedTopBracket,
}

/// Calculator for monthly PIT over a validated bracket table.
#[derive(Debug, Clone, Copy)]
pub struct PitCalculator<'a> {
    brackets: &'a [TaxBracket],
}

impl PitCalculator<'static> {
    /// Calculator over the standard Nigerian table.
    pub fn nigeria() -> Self {
        Self {
            brackets: nigeria_pit_brackets(),
        }
    }
}

impl Default for PitCalculator<'static> {
    fn default() -> Self {
        Self::nigeria()
    }
}

impl<'a> PitCalculator<'a> {
    /// Creates a calculator over a custom bracket table.
    ///
    /// The table must start at zero, and each later bracket must start where
    /// the previous one ends or at most one naira above it. Rates must be
    /// strictly increasing within `[0, 1]`, and the table must end with a
    /// single unbounded bracket.
    ///
    /// # Errors
    ///
    /// Returns the first [`BracketTableError`] found while walking the table.
    pub fn new(brackets: &'a [TaxBracket]) -> Result<Self, BracketTableError> {
        validate_brackets(brackets)?;
        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &'a [TaxBracket] {
        self.brackets
    }

    /// Tax owed on a month's taxable income, rounded to the kobo.
    ///
    /// Zero and negative income owe nothing.
    pub fn monthly_tax(
        &self,
        monthly_income: Decimal,
    ) -> Decimal {
        if monthly_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        for bracket in self.brackets {
            if monthly_income <= bracket.min_income {
                break;
            }
            let portion = bracket.portion_of(monthly_income);
            let bracket_tax = portion * bracket.tax_rate;
            trace!(
                min_income = %bracket.min_income,
                rate = %bracket.tax_rate,
                %portion,
                %bracket_tax,
                "accumulated bracket"
            );
            tax += bracket_tax;
        }

        round_half_up(tax)
    }

    /// Full monthly breakdown after subtracting allowances (employees) or
    /// business expenses (self-employed).
    ///
    /// Deductions larger than income clamp taxable income to zero, and both
    /// figures are capped at [`MAX_AMOUNT`](crate::calculations::common::MAX_AMOUNT);
    /// nothing here fails.
    ///
    /// Taxable income is rounded to the kobo before tax is worked out on it, so
    /// `net_income == taxable_income - monthly_tax` holds exactly.
    pub fn calculate(
        &self,
        monthly_income: Decimal,
        allowances_or_expenses: Decimal,
    ) -> PitResult {
        let monthly_income = clamp_amount(monthly_income);
        let allowances_or_expenses = clamp_amount(allowances_or_expenses);
        let gross_taxable = monthly_income - allowances_or_expenses;
        if gross_taxable < Decimal::ZERO {
            warn!(
                %monthly_income,
                %allowances_or_expenses,
                "taxable income below zero, clamped"
            );
        }
        let taxable_income = floor_at_zero(round_half_up(gross_taxable));

        let monthly_tax = self.monthly_tax(taxable_income);
        let result = PitResult {
            taxable_income,
            monthly_tax,
            annual_tax: monthly_tax * Decimal::from(12),
            net_income: taxable_income - monthly_tax,
            effective_rate: effective_rate(monthly_tax, taxable_income),
        };
        debug!(?result, "calculated PIT");
        result
    }
}

fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), BracketTableError> {
    let first = brackets.first().ok_or(BracketTableError::Empty)?;
    if !first.min_income.is_zero() {
        return Err(BracketTableError::NonZeroStart(first.min_income));
    }

    let last_index = brackets.len() - 1;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
            return Err(BracketTableError::RateOutOfRange {
                index,
                rate: bracket.tax_rate,
            });
        }

        match bracket.max_income {
            Some(max) if max <= bracket.min_income => {
                return Err(BracketTableError::EmptyRange { index });
            }
            Some(_) if index == last_index => return Err(BracketTableError::BoundedTopBracket),
            None if index != last_index => {
                return Err(BracketTableError::UnboundedBeforeEnd { index });
            }
            _ => {}
        }

        if index == 0 {
            continue;
        }
        let previous = &brackets[index - 1];
        // Unbounded-before-end was rejected for `previous` on the prior pass.
        let expected = previous.max_income.unwrap_or(Decimal::MAX);
        if bracket.min_income < expected || bracket.min_income - expected > Decimal::ONE {
            return Err(BracketTableError::Discontinuous {
                index,
                expected,
                found: bracket.min_income,
            });
        }
        if bracket.tax_rate <= previous.tax_rate {
            return Err(BracketTableError::NonIncreasingRate { index });
        }
    }

    Ok(())
}

/// Monthly PIT on `monthly_income` using the standard table.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculate_monthly_pit;
///
/// assert_eq!(calculate_monthly_pit(dec!(300000)), dec!(21000.00));
/// assert_eq!(calculate_monthly_pit(dec!(-5)), dec!(0));
/// ```
pub fn calculate_monthly_pit(monthly_income: Decimal) -> Decimal {
    PitCalculator::nigeria().monthly_tax(monthly_income)
}

/// Monthly PIT breakdown using the standard table.
///
/// Pass `Decimal::ZERO` for `allowances_or_expenses` when there are none.
pub fn calculate_pit(
    monthly_income: Decimal,
    allowances_or_expenses: Decimal,
) -> PitResult {
    PitCalculator::nigeria().calculate(monthly_income, allowances_or_expenses)
}
