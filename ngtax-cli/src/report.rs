//! Rendering of assessments for the terminal or as JSON.

use std::fmt;

use clap::ValueEnum;
use ngtax_core::{CitResult, PitResult, TaxAssessment, TaxpayerCategory, format_naira};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::input::TaxRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A single assessment ready to be shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub category: TaxpayerCategory,
    pub assessment: TaxAssessment,
    /// PIT only: `net_income × 12`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_net_income: Option<Decimal>,
}

impl Report {
    pub fn new(
        category: TaxpayerCategory,
        assessment: TaxAssessment,
    ) -> Self {
        let annual_net_income = match &assessment {
            TaxAssessment::Personal(pit) => Some(pit.annual_net_income()),
            TaxAssessment::Company(_) => None,
        };
        Self {
            category,
            assessment,
            annual_net_income,
        }
    }
}

impl From<&TaxRequest> for Report {
    fn from(request: &TaxRequest) -> Self {
        Report::new(request.category, request.assess())
    }
}

fn percent(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

fn write_pit(
    f: &mut fmt::Formatter<'_>,
    pit: &PitResult,
) -> fmt::Result {
    writeln!(
        f,
        "Taxable income:    {} / month",
        format_naira(pit.taxable_income)
    )?;
    writeln!(f, "Monthly tax:       {}", format_naira(pit.monthly_tax))?;
    writeln!(f, "Annual tax:        {}", format_naira(pit.annual_tax))?;
    writeln!(f, "Net income:        {} / month", format_naira(pit.net_income))?;
    writeln!(
        f,
        "Annual net income: {}",
        format_naira(pit.annual_net_income())
    )?;
    writeln!(f, "Effective rate:    {}", percent(pit.effective_rate))
}

fn write_cit(
    f: &mut fmt::Formatter<'_>,
    cit: &CitResult,
) -> fmt::Result {
    writeln!(f, "Profit:            {}", format_naira(cit.profit))?;
    writeln!(f, "Annual tax:        {}", format_naira(cit.annual_tax))?;
    writeln!(f, "Net profit:        {}", format_naira(cit.net_profit))?;
    writeln!(f, "Effective rate:    {}", percent(cit.effective_rate))
}

impl fmt::Display for Report {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Category:          {}", self.category.label())?;
        match &self.assessment {
            TaxAssessment::Personal(pit) => write_pit(f, pit),
            TaxAssessment::Company(cit) => write_cit(f, cit),
        }
    }
}

/// Renders a single report; JSON output is one object.
pub fn render(
    report: &Report,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

/// Renders a batch of reports. Text output separates reports with a blank
/// line; JSON output is always an array, whatever the number of rows.
pub fn render_batch(
    reports: &[Report],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(Report::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(reports),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ngtax_core::{calculate_cit, calculate_pit};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn employee_report() -> Report {
        Report::new(
            TaxpayerCategory::Employee,
            TaxAssessment::Personal(calculate_pit(dec!(500000), dec!(100000))),
        )
    }

    fn cac_report() -> Report {
        Report::new(
            TaxpayerCategory::CacRegisteredBusiness,
            TaxAssessment::Company(calculate_cit(dec!(30000000), Decimal::ZERO)),
        )
    }

    #[test]
    fn pit_report_includes_annual_net_income() {
        assert_eq!(employee_report().annual_net_income, Some(dec!(4416001.32)));
    }

    #[test]
    fn cit_report_has_no_annual_net_income() {
        assert_eq!(cac_report().annual_net_income, None);
    }

    #[test]
    fn pit_text_rendering() {
        let text = employee_report().to_string();

        assert_eq!(
            text,
            "\
Category:          Employee
Taxable income:    ₦400,000 / month
Monthly tax:       ₦31,999.89
Annual tax:        ₦383,998.68
Net income:        ₦368,000.11 / month
Annual net income: ₦4,416,001.32
Effective rate:    8%
"
        );
    }

    #[test]
    fn cit_text_rendering() {
        let text = cac_report().to_string();

        assert_eq!(
            text,
            "\
Category:          CAC-Registered Business
Profit:            ₦30,000,000
Annual tax:        ₦6,500,000
Net profit:        ₦23,500,000
Effective rate:    21.67%
"
        );
    }

    #[test]
    fn single_report_renders_as_json_object() {
        let json = render(&cac_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["category"], "cac");
        assert_eq!(value["assessment"]["kind"], "company");
        assert_eq!(value["assessment"]["annual_tax"], "6500000.00");
        assert!(value.get("annual_net_income").is_none());
    }

    #[test]
    fn several_reports_render_as_json_array() {
        let json = render_batch(&[employee_report(), cac_report()], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["assessment"]["kind"], "personal");
    }

    #[test]
    fn single_row_batch_still_renders_as_json_array() {
        let json = render_batch(&[cac_report()], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["category"], "cac");
    }

    #[test]
    fn empty_batch_renders_as_empty_json_array() {
        let json = render_batch(&[], OutputFormat::Json).unwrap();

        assert_eq!(json, "[]");
    }

    #[test]
    fn text_reports_are_separated_by_blank_line() {
        let text = render_batch(&[employee_report(), cac_report()], OutputFormat::Text).unwrap();

        assert!(text.contains("8%\n\nCategory:          CAC-Registered Business"));
    }
}
