mod cit_result;
mod pit_result;
mod tax_assessment;
mod tax_bracket;
mod taxpayer_category;

pub use cit_result::CitResult;
pub use pit_result::PitResult;
pub use tax_assessment::TaxAssessment;
pub use tax_bracket::TaxBracket;
pub use taxpayer_category::{TaxComputation, TaxpayerCategory};
