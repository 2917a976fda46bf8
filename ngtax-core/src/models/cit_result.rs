use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual company income tax breakdown for a CAC-registered business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitResult {
    /// Revenue less expenses, floored at zero.
    pub profit: Decimal,
    pub annual_tax: Decimal,
    pub net_profit: Decimal,
    pub effective_rate: Decimal,
}
