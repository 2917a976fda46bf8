pub mod calculations;
pub mod format;
pub mod models;

pub use calculations::{assess, calculate_cit, calculate_monthly_pit, calculate_pit};
pub use format::format_naira;
pub use models::*;
