use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ngtax_cli::csv_loader;
use ngtax_cli::input::TaxRequest;
use ngtax_cli::report::{OutputFormat, Report, render, render_batch};
use ngtax_core::TaxpayerCategory;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Nigerian personal and company income tax estimator.
///
/// Amounts accept comma thousands separators and a leading `₦`.
#[derive(Debug, Parser)]
#[command(name = "ngtax", version, about)]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log calculation details to stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Individual categories assessed under personal income tax.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum IndividualCategory {
    Employee,
    SelfEmployed,
}

impl From<IndividualCategory> for TaxpayerCategory {
    fn from(category: IndividualCategory) -> Self {
        match category {
            IndividualCategory::Employee => TaxpayerCategory::Employee,
            IndividualCategory::SelfEmployed => TaxpayerCategory::SelfEmployed,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Personal income tax on monthly income.
    Pit {
        #[arg(long, value_enum, default_value_t = IndividualCategory::Employee)]
        category: IndividualCategory,

        /// Gross monthly income.
        #[arg(long, allow_hyphen_values = true)]
        income: String,

        /// Monthly allowances (employee) or business expenses (self-employed).
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        deductions: String,
    },

    /// Company income tax for a CAC-registered business.
    Cit {
        /// Annual revenue.
        #[arg(long, allow_hyphen_values = true)]
        revenue: String,

        /// Annual expenses.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        expenses: String,
    },

    /// Assess every row of a CSV file (`category,amount,deductions`).
    Batch {
        #[arg(short, long)]
        file: PathBuf,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` (or `debug` with `--verbose`) so results stay clean.
/// * Writes to stderr; stdout carries only the rendered report.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn assess_one(
    request: TaxRequest,
    format: OutputFormat,
) -> anyhow::Result<String> {
    render(&Report::from(&request), format).context("Failed to render report")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = match &cli.command {
        Command::Pit {
            category,
            income,
            deductions,
        } => assess_one(
            TaxRequest::from_raw((*category).into(), income, deductions)?,
            cli.format,
        )?,
        Command::Cit { revenue, expenses } => assess_one(
            TaxRequest::from_raw(TaxpayerCategory::CacRegisteredBusiness, revenue, expenses)?,
            cli.format,
        )?,
        Command::Batch { file } => {
            info!("loading batch file {}", file.display());
            let requests = csv_loader::load_from_file(file)
                .with_context(|| format!("Failed to load batch file: {}", file.display()))?;
            debug!(count = requests.len(), "assessing batch");

            let reports: Vec<Report> = requests.iter().map(Report::from).collect();
            render_batch(&reports, cli.format).context("Failed to render reports")?
        }
    };
    println!("{output}");

    Ok(())
}
