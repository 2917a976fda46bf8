//! Raw text input handling: amount parsing and the checks performed before
//! anything reaches the tax engine.

use ngtax_core::calculations::common::MAX_AMOUNT;
use ngtax_core::{TaxAssessment, TaxpayerCategory, assess};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Error returned when a string cannot be parsed as an amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Input rejected before calculation. Messages are shown to the user as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid income amount")]
    NonPositiveIncome,

    #[error("Deductions cannot be negative")]
    NegativeDeductions,

    #[error("Amounts above ₦1,000,000,000,000,000,000,000,000 are not supported")]
    AmountTooLarge,
}

/// Normalizes amount text: trims whitespace and removes a leading naira sign
/// and commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed
        .strip_prefix(ngtax_core::format::NAIRA_SIGN)
        .unwrap_or(trimmed);
    trimmed.trim_start().replace(',', "")
}

/// Parses amount text into a [`Decimal`].
///
/// Handles `₦` and comma thousands separators (e.g. `"₦1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseAmountError {
        input: s.to_string(),
        source: e,
    })
}

/// Parses amount text, treating anything unparseable as 0 (logged as a warning).
pub fn parse_amount_or_zero(s: &str) -> Decimal {
    parse_amount(s).unwrap_or_else(|e| {
        tracing::warn!(input = %s, "treating unparseable amount as zero: {}", e);
        Decimal::ZERO
    })
}

/// A validated request to assess one taxpayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxRequest {
    pub category: TaxpayerCategory,
    /// Monthly income (PIT) or annual revenue (CIT).
    pub amount: Decimal,
    /// Monthly allowances/expenses (PIT) or annual expenses (CIT).
    pub deductions: Decimal,
}

impl TaxRequest {
    /// Validates parsed amounts.
    ///
    /// # Errors
    ///
    /// * [`InputError::NonPositiveIncome`] when `amount` is zero or negative.
    /// * [`InputError::NegativeDeductions`] when `deductions` is negative.
    /// * [`InputError::AmountTooLarge`] when either figure exceeds [`MAX_AMOUNT`].
    pub fn new(
        category: TaxpayerCategory,
        amount: Decimal,
        deductions: Decimal,
    ) -> Result<Self, InputError> {
        if amount <= Decimal::ZERO {
            return Err(InputError::NonPositiveIncome);
        }
        if deductions < Decimal::ZERO {
            return Err(InputError::NegativeDeductions);
        }
        if amount > MAX_AMOUNT || deductions > MAX_AMOUNT {
            return Err(InputError::AmountTooLarge);
        }
        Ok(Self {
            category,
            amount,
            deductions,
        })
    }

    /// Parses raw text the way the input form does (unparseable text becomes 0)
    /// and validates the result.
    pub fn from_raw(
        category: TaxpayerCategory,
        amount: &str,
        deductions: &str,
    ) -> Result<Self, InputError> {
        Self::new(
            category,
            parse_amount_or_zero(amount),
            parse_amount_or_zero(deductions),
        )
    }

    pub fn assess(&self) -> TaxAssessment {
        assess(self.category, self.amount, self.deductions)
    }
}
