pub mod csv_loader;
pub mod input;
pub mod report;
