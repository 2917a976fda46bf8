//! CSV loader for batches of taxpayer figures.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column       | Required | Notes |
//! |--------------|----------|-------|
//! | `category`   | yes      | `employee`, `self-employed` or `cac` (case-insensitive) |
//! | `amount`     | yes      | Monthly income, or annual revenue for `cac` |
//! | `deductions` | no       | Monthly allowances/expenses, or annual expenses for `cac` |
//!
//! Amounts may use comma thousands separators and a leading `₦`; quote the
//! cell when it contains commas.
//!
//! ```csv
//! category,amount,deductions
//! employee,"500,000","100,000"
//! cac,30000000,
//! ```
use std::path::Path;

use ngtax_core::TaxpayerCategory;
use serde::Deserialize;

use crate::input::{InputError, ParseAmountError, TaxRequest, parse_amount};

#[derive(Debug, Deserialize)]
struct CsvRow {
    category: String,
    amount: String,
    #[serde(default)]
    deductions: Option<String>,
}

/// Errors that can occur while loading a batch file.
///
/// Row numbers are 1-based and do not count the header.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read batch file: {0}")]
    Io(#[from] std::io::Error),

    /// Bad structure, missing required column, etc.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("unrecognised category '{category}' on row {row}")]
    InvalidCategory { category: String, row: usize },

    #[error("row {row}: {source}")]
    InvalidAmount {
        row: usize,
        #[source]
        source: ParseAmountError,
    },

    #[error("row {row}: {source}")]
    InvalidInput {
        row: usize,
        #[source]
        source: InputError,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<TaxRequest, CsvLoadError> {
    let category =
        TaxpayerCategory::parse(&row.category).ok_or_else(|| CsvLoadError::InvalidCategory {
            category: row.category.clone(),
            row: row_number,
        })?;

    let parse = |text: &str| {
        parse_amount(text).map_err(|source| CsvLoadError::InvalidAmount {
            row: row_number,
            source,
        })
    };
    let amount = parse(&row.amount)?;
    let deductions = parse(row.deductions.as_deref().unwrap_or_default())?;

    TaxRequest::new(category, amount, deductions).map_err(|source| CsvLoadError::InvalidInput {
        row: row_number,
        source,
    })
}

/// Parses CSV text into validated requests, in file order.
///
/// Unlike interactive input, an unparseable amount in a batch file is an
/// error rather than zero.
///
/// # Errors
///
/// Fails on the first row that is structurally invalid, names an unknown
/// category, has an unparseable amount, or does not pass [`TaxRequest::new`].
pub fn load_from_str(input: &str) -> Result<Vec<TaxRequest>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<TaxRequest>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    let requests = load_from_str(&contents)?;
    tracing::debug!(path = %path.display(), rows = requests.len(), "loaded batch file");
    Ok(requests)
}
