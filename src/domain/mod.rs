//! Pricing logic for the labour and purchases calculators lives here.

pub mod calculator;
pub mod format;
pub mod pricing;
pub mod rate;
pub mod report;
pub mod validation;

pub use calculator::{
    CalculationResults, CalculatorState, FieldOrigin, Preferences, PricingSection, Section,
    Snapshot, PURCHASE_COST,
};
pub use format::{format_value, format_with_symbol, format_with_unit, parse_input, round_entry};
pub use pricing::{derive, derive_from, has_enough_info, FieldKind, PricingField, PricingRecord};
pub use rate::{from_hourly, scale_value_to_hourly, to_hourly, RatePeriod, DEFAULT_HOURS_PER_DAY};
pub use report::{ReportRow, ReportSection, ResultsReport, REPORT_TITLE};
pub use validation::{validate_entry, ValidationError};
