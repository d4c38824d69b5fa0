//! Hour/day conversion for labour rates.

use serde::{Deserialize, Serialize};

use super::pricing::{PricingField, PricingRecord};

pub const DEFAULT_HOURS_PER_DAY: u8 = 8;

/// Period a labour figure is quoted in. Records are always stored per hour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatePeriod {
    #[default]
    Hour,
    Day,
}

impl RatePeriod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hour => "Hour",
            Self::Day => "Day",
        }
    }

    pub fn rate_type(&self) -> &'static str {
        match self {
            Self::Hour => "Per Hour",
            Self::Day => "Per Day",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Hour => "Labour/hr",
            Self::Day => "Labour (Day)",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Hour => Self::Day,
            Self::Day => Self::Hour,
        }
    }
}

/// Converts a single entered value to its per-hour equivalent.
/// Percentages are the same whatever the period.
pub fn scale_value_to_hourly(
    field: PricingField,
    value: f64,
    period: RatePeriod,
    hours_per_day: u8,
) -> f64 {
    match period {
        RatePeriod::Day if field.is_currency() => value / f64::from(hours_per_day),
        _ => value,
    }
}

pub fn to_hourly(record: &PricingRecord, period: RatePeriod, hours_per_day: u8) -> PricingRecord {
    scale_currency(record, period, 1.0 / f64::from(hours_per_day))
}

pub fn from_hourly(record: &PricingRecord, period: RatePeriod, hours_per_day: u8) -> PricingRecord {
    scale_currency(record, period, f64::from(hours_per_day))
}

fn scale_currency(record: &PricingRecord, period: RatePeriod, factor: f64) -> PricingRecord {
    if period == RatePeriod::Hour {
        return *record;
    }
    PricingRecord {
        cost: record.cost * factor,
        profit: record.profit * factor,
        charge: record.charge * factor,
        ..*record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_rates_scale_currency_only() {
        let daily = PricingRecord {
            cost: 400.0,
            markup: 25.0,
            profit: 100.0,
            charge: 500.0,
            margin: 20.0,
        };
        let hourly = to_hourly(&daily, RatePeriod::Day, 8);
        assert_eq!(hourly.cost, 50.0);
        assert_eq!(hourly.profit, 12.5);
        assert_eq!(hourly.charge, 62.5);
        assert_eq!(hourly.markup, 25.0);
        assert_eq!(hourly.margin, 20.0);
        assert_eq!(from_hourly(&hourly, RatePeriod::Day, 8), daily);
    }

    #[test]
    fn hour_rates_pass_through() {
        let record = PricingRecord::with_cost(30.0).with(PricingField::Profit, 3.0);
        assert_eq!(to_hourly(&record, RatePeriod::Hour, 8), record);
    }

    #[test]
    fn single_value_scaling() {
        assert_eq!(scale_value_to_hourly(PricingField::Charge, 80.0, RatePeriod::Day, 8), 10.0);
        assert_eq!(scale_value_to_hourly(PricingField::Markup, 80.0, RatePeriod::Day, 8), 80.0);
        assert_eq!(scale_value_to_hourly(PricingField::Cost, 80.0, RatePeriod::Hour, 8), 80.0);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(RatePeriod::Hour.toggled(), RatePeriod::Day);
        assert_eq!(RatePeriod::Day.toggled().rate_type(), "Per Hour");
    }
}
