//! Printable summary of a calculation.

use std::fmt;

use time::{macros::format_description, OffsetDateTime};

use super::{
    calculator::{CalculatorState, Section},
    format::format_with_unit,
    pricing::PricingField,
    rate::RatePeriod,
};

pub const REPORT_TITLE: &str = "Labour & Purchasing Defaults Calculator";

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
    pub source: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportSection {
    pub heading: String,
    pub rate_type: Option<&'static str>,
    pub rows: Vec<ReportRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsReport {
    pub generated_on: String,
    pub sections: Vec<ReportSection>,
}

impl ResultsReport {
    pub fn build(state: &CalculatorState, generated_at: OffsetDateTime) -> Self {
        let sections = [Section::Labour, Section::Purchases]
            .into_iter()
            .map(|section| build_section(state, section))
            .collect();

        Self {
            generated_on: format_timestamp(generated_at),
            sections,
        }
    }
}

fn build_section(state: &CalculatorState, section: Section) -> ReportSection {
    let record = state.display_record(section);
    let rows = PricingField::ALL
        .iter()
        .map(|field| ReportRow {
            label: field.label(),
            value: format_with_unit(*field, record.get(*field)),
            source: state.field_origin(section, *field).label(),
        })
        .collect();

    let (heading, rate_type) = match section {
        Section::Labour => {
            let suffix = match state.rate_period {
                RatePeriod::Hour => "(Hour)",
                RatePeriod::Day => "(Day)",
            };
            (
                format!("{} {suffix}", section.title()),
                Some(state.rate_period.rate_type()),
            )
        }
        Section::Purchases => (section.title().to_string(), None),
    };

    ReportSection {
        heading,
        rate_type,
        rows,
    }
}

fn format_timestamp(at: OffsetDateTime) -> String {
    let layout = format_description!(
        "[month repr:long] [day padding:none], [year], [hour repr:12]:[minute] [period]"
    );
    at.format(&layout)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

impl fmt::Display for ResultsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f, "Calculation Results")?;
        writeln!(f, "Generated on: {}", self.generated_on)?;

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.heading)?;
            if let Some(rate_type) = section.rate_type {
                writeln!(f, "Rate Type: {rate_type}")?;
            }
            writeln!(f, "{:<8} {:>14}  {}", "Field", "Value", "Source")?;
            for row in &section.rows {
                writeln!(f, "{:<8} {:>14}  {}", row.label, row.value, row.source)?;
            }
        }
        Ok(())
    }
}
