//! Routes a taxpayer to PIT or CIT based on their category.

use rust_decimal::Decimal;

use crate::calculations::{calculate_cit, calculate_pit};
use crate::{TaxAssessment, TaxComputation, TaxpayerCategory};

/// Assesses tax for `category`.
///
/// For employees and the self-employed `amount` is monthly income and
/// `deductions` the monthly allowances or business expenses. For a
/// CAC-registered business `amount` is annual revenue and `deductions` annual
/// expenses.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::{TaxAssessment, TaxpayerCategory, assess};
///
/// let assessment = assess(TaxpayerCategory::CacRegisteredBusiness, dec!(25000000), dec!(0));
/// assert_eq!(assessment.annual_tax(), dec!(5000000));
/// assert!(matches!(assessment, TaxAssessment::Company(_)));
/// ```
pub fn assess(
    category: TaxpayerCategory,
    amount: Decimal,
    deductions: Decimal,
) -> TaxAssessment {
    match category.computation() {
        TaxComputation::PersonalIncome => TaxAssessment::Personal(calculate_pit(amount, deductions)),
        TaxComputation::CompanyIncome => TaxAssessment::Company(calculate_cit(amount, deductions)),
    }
}
