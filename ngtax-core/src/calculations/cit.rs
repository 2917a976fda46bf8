//! Two-tier Company Income Tax (CIT) on annual profit.
//!
//! Profit up to the small-company threshold is taxed at the lower rate; only
//! the excess above it is taxed at the upper rate.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use ngtax_core::calculate_cit;
//!
//! let result = calculate_cit(dec!(40000000), dec!(10000000));
//!
//! assert_eq!(result.profit, dec!(30000000));
//! assert_eq!(result.annual_tax, dec!(6500000.00));
//! assert_eq!(result.net_profit, dec!(23500000.00));
//! assert_eq!(result.effective_rate, dec!(21.67));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::CitResult;
use crate::calculations::common::{clamp_amount, effective_rate, floor_at_zero, round_half_up};

/// Errors raised when constructing a custom [`CitSchedule`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CitScheduleError {
    #[error("CIT threshold must not be negative, got {0}")]
    NegativeThreshold(Decimal),

    #[error("lower CIT rate must be between 0 and 1, got {0}")]
    InvalidLowerRate(Decimal),

    #[error("upper CIT rate must be between 0 and 1, got {0}")]
    InvalidUpperRate(Decimal),
}

/// Rates and threshold of a two-tier CIT schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitSchedule {
    threshold: Decimal,
    lower_rate: Decimal,
    upper_rate: Decimal,
}

impl CitSchedule {
    /// The Nigerian schedule: 20% on the first 25,000,000 of profit, 30% above.
    pub fn nigeria() -> Self {
        Self {
            threshold: Decimal::from(25_000_000),
            lower_rate: Decimal::new(20, 2),
            upper_rate: Decimal::new(30, 2),
        }
    }

    /// Creates a custom schedule.
    ///
    /// # Errors
    ///
    /// Returns [`CitScheduleError`] if the threshold is negative or either rate
    /// falls outside `[0, 1]`.
    pub fn new(
        threshold: Decimal,
        lower_rate: Decimal,
        upper_rate: Decimal,
    ) -> Result<Self, CitScheduleError> {
        if threshold < Decimal::ZERO {
            return Err(CitScheduleError::NegativeThreshold(threshold));
        }
        if !is_rate(lower_rate) {
            return Err(CitScheduleError::InvalidLowerRate(lower_rate));
        }
        if !is_rate(upper_rate) {
            return Err(CitScheduleError::InvalidUpperRate(upper_rate));
        }
        Ok(Self {
            threshold,
            lower_rate,
            upper_rate,
        })
    }

    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    pub fn lower_rate(&self) -> Decimal {
        self.lower_rate
    }

    pub fn upper_rate(&self) -> Decimal {
        self.upper_rate
    }

    /// Tax owed on `profit`, rounded to the kobo. Profit exactly at the
    /// threshold is taxed at the lower rate only.
    pub fn tax_on(
        &self,
        profit: Decimal,
    ) -> Decimal {
        let profit = floor_at_zero(profit);
        let tax = if profit <= self.threshold {
            profit * self.lower_rate
        } else {
            self.threshold * self.lower_rate + (profit - self.threshold) * self.upper_rate
        };
        round_half_up(tax)
    }

    /// Full annual breakdown for a business with the given revenue and expenses.
    ///
    /// Both figures are capped at
    /// [`MAX_AMOUNT`](crate::calculations::common::MAX_AMOUNT), and profit is
    /// rounded to the kobo before it is taxed.
    pub fn calculate(
        &self,
        annual_revenue: Decimal,
        annual_expenses: Decimal,
    ) -> CitResult {
        let annual_revenue = clamp_amount(annual_revenue);
        let annual_expenses = clamp_amount(annual_expenses);
        let profit = floor_at_zero(round_half_up(annual_revenue - annual_expenses));
        let annual_tax = self.tax_on(profit);

        let result = CitResult {
            profit,
            annual_tax,
            net_profit: profit - annual_tax,
            effective_rate: effective_rate(annual_tax, profit),
        };
        debug!(?result, "calculated CIT");
        result
    }
}

impl Default for CitSchedule {
    fn default() -> Self {
        Self::nigeria()
    }
}

fn is_rate(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate <= Decimal::ONE
}

/// Annual CIT breakdown using the Nigerian schedule.
///
/// Pass `Decimal::ZERO` for `annual_expenses` when there are none.
pub fn calculate_cit(
    annual_revenue: Decimal,
    annual_expenses: Decimal,
) -> CitResult {
    CitSchedule::nigeria().calculate(annual_revenue, annual_expenses)
}
