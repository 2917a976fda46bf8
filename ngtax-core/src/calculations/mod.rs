//! Tax calculation modules for Nigerian personal and company income tax.
//!
//! The free functions re-exported here run against the standard Nigerian
//! schedules. [`PitCalculator`] and [`CitSchedule`] accept custom tables for
//! callers that need them.

pub mod assessment;
pub mod cit;
pub mod common;
pub mod pit;

pub use assessment::assess;
pub use cit::{CitSchedule, CitScheduleError, calculate_cit};
pub use pit::{
    BracketTableError, PitCalculator, calculate_monthly_pit, calculate_pit, nigeria_pit_brackets,
};
