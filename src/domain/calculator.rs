//! Calculator session: what the user has entered, the derived results and the
//! snapshot the Back button restores.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{
    format::{parse_input, round_entry},
    pricing::{derive_from, has_enough_info, PricingField, PricingRecord},
    rate::{from_hourly, scale_value_to_hourly, RatePeriod, DEFAULT_HOURS_PER_DAY},
    validation::{validate_entry, ValidationError},
};

/// Purchases are priced per unit of cost, so their cost is always 1.
pub const PURCHASE_COST: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Labour,
    Purchases,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Labour => "Labour",
            Self::Purchases => "Purchases",
        }
    }
}

/// Where a displayed value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldOrigin {
    UserInput,
    Calculated,
    Fixed,
}

impl FieldOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            Self::UserInput => "User Input",
            Self::Calculated => "Calculated",
            Self::Fixed => "Fixed",
        }
    }
}

/// One pricing grid. Labour records are stored per hour whatever the active
/// rate period.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingSection {
    pub record: PricingRecord,
    /// Most recently entered field other than cost.
    pub last_entered: Option<PricingField>,
    pub cost_entered: bool,
    pinned_cost: Option<f64>,
}

impl PricingSection {
    pub fn labour() -> Self {
        Self {
            record: PricingRecord::default(),
            last_entered: None,
            cost_entered: false,
            pinned_cost: None,
        }
    }

    pub fn purchases() -> Self {
        Self {
            record: PricingRecord::with_cost(PURCHASE_COST),
            last_entered: None,
            cost_entered: true,
            pinned_cost: Some(PURCHASE_COST),
        }
    }

    pub fn is_cost_pinned(&self) -> bool {
        self.pinned_cost.is_some()
    }

    /// Field to derive from, if one has been entered and still holds a value.
    pub fn entered_field(&self) -> Option<PricingField> {
        self.last_entered.filter(|_| has_enough_info(&self.record))
    }

    fn derived(&self) -> PricingRecord {
        match self.entered_field() {
            Some(field) => derive_from(&self.record, field),
            None => self.record,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub labour: PricingSection,
    pub purchases: PricingSection,
}

/// Results handed back by a successful calculation. Labour is per hour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationResults {
    pub labour: PricingRecord,
    pub purchases: PricingRecord,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    pub labour: PricingSection,
    pub purchases: PricingSection,
    pub rate_period: RatePeriod,
    pub hours_per_day: u8,
    pub previous: Option<Snapshot>,
    /// Message currently shown above the form.
    pub error: Option<ValidationError>,
    calculated: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            labour: PricingSection::labour(),
            purchases: PricingSection::purchases(),
            rate_period: RatePeriod::default(),
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            previous: None,
            error: None,
            calculated: false,
        }
    }
}

impl CalculatorState {
    pub fn section(&self, section: Section) -> &PricingSection {
        match section {
            Section::Labour => &self.labour,
            Section::Purchases => &self.purchases,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut PricingSection {
        match section {
            Section::Labour => &mut self.labour,
            Section::Purchases => &mut self.purchases,
        }
    }

    pub fn has_results(&self) -> bool {
        self.calculated
    }

    pub fn can_go_back(&self) -> bool {
        self.previous.is_some()
    }

    /// Parses and stores raw text typed into a field.
    pub fn enter(
        &mut self,
        section: Section,
        field: PricingField,
        raw: &str,
    ) -> Result<(), ValidationError> {
        let value = round_entry(field, parse_input(raw));
        self.set_value(section, field, value)
    }

    /// Stores a value as shown on screen (labour in the active rate period).
    pub fn set_value(
        &mut self,
        section: Section,
        field: PricingField,
        value: f64,
    ) -> Result<(), ValidationError> {
        if field == PricingField::Cost && self.section(section).is_cost_pinned() {
            debug!(section = section.title(), "ignoring edit to pinned cost");
            return Ok(());
        }

        if let Err(err) = validate_entry(field, value) {
            self.error = Some(err.clone());
            return Err(err);
        }

        let stored = match section {
            Section::Labour => {
                scale_value_to_hourly(field, value, self.rate_period, self.hours_per_day)
            }
            Section::Purchases => value,
        };

        let target = self.section_mut(section);
        target.record.set(field, stored);
        if field == PricingField::Cost {
            target.cost_entered = true;
        } else {
            target.last_entered = Some(field);
        }
        self.error = None;
        self.calculated = false;
        Ok(())
    }

    /// Checks that both grids have enough valid input to derive from.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.labour.cost_entered || self.labour.record.cost <= 0.0 {
            return Err(ValidationError::LabourCostMissing);
        }
        let Some(labour_field) = self.labour.entered_field() else {
            return Err(ValidationError::LabourFieldMissing);
        };
        let Some(purchases_field) = self.purchases.entered_field() else {
            return Err(ValidationError::PurchasesFieldMissing);
        };
        validate_entry(labour_field, self.labour.record.get(labour_field))?;
        validate_entry(purchases_field, self.purchases.record.get(purchases_field))?;
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.validate().is_ok()
    }

    /// Derives both grids from their cost and most recently entered field.
    pub fn calculate(&mut self) -> Result<CalculationResults, ValidationError> {
        if let Err(err) = self.validate() {
            warn!(error = %err, "calculation blocked");
            self.error = Some(err.clone());
            return Err(err);
        }

        self.previous = Some(self.snapshot());
        self.labour.record = self.labour.derived();
        self.purchases.record = self.purchases.derived();
        self.error = None;
        self.calculated = true;

        let results = self.results();
        info!(
            labour_charge = results.labour.charge,
            purchases_charge = results.purchases.charge,
            "calculated pricing defaults"
        );
        Ok(results)
    }

    pub fn results(&self) -> CalculationResults {
        CalculationResults {
            labour: self.labour.record,
            purchases: self.purchases.record,
        }
    }

    /// Resets both grids; the cleared values stay available to Back.
    pub fn clear(&mut self) {
        self.previous = Some(self.snapshot());
        self.labour = PricingSection::labour();
        self.purchases = PricingSection::purchases();
        self.error = None;
        self.calculated = false;
        info!("cleared calculator");
    }

    /// Restores the last snapshot. Returns false when there is nothing to restore.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.previous.take() else {
            return false;
        };

        self.labour = PricingSection {
            last_entered: None,
            cost_entered: previous.labour.record.cost > 0.0,
            ..previous.labour
        };
        self.purchases = PricingSection {
            last_entered: None,
            ..previous.purchases
        };
        self.error = None;
        self.calculated = false;
        info!("restored previous calculator values");
        true
    }

    /// Hands back the calculated results and starts a fresh session.
    pub fn apply(&mut self) -> Option<CalculationResults> {
        if !self.calculated {
            return None;
        }
        let results = self.results();
        *self = Self {
            rate_period: self.rate_period,
            hours_per_day: self.hours_per_day,
            ..Self::default()
        };
        info!(?results, "applied calculated defaults");
        Some(results)
    }

    pub fn set_rate_period(&mut self, period: RatePeriod) {
        self.rate_period = period;
    }

    /// Record as it should be shown, labour converted to the active rate period.
    pub fn display_record(&self, section: Section) -> PricingRecord {
        match section {
            Section::Labour => {
                from_hourly(&self.labour.record, self.rate_period, self.hours_per_day)
            }
            Section::Purchases => self.purchases.record,
        }
    }

    pub fn field_origin(&self, section: Section, field: PricingField) -> FieldOrigin {
        let grid = self.section(section);
        if field == PricingField::Cost {
            return if grid.is_cost_pinned() {
                FieldOrigin::Fixed
            } else if grid.cost_entered {
                FieldOrigin::UserInput
            } else {
                FieldOrigin::Calculated
            };
        }
        if grid.last_entered == Some(field) {
            FieldOrigin::UserInput
        } else {
            FieldOrigin::Calculated
        }
    }

    /// Applies saved or edited settings. When hours per day changes while
    /// day rates are showing, labour amounts are rescaled so the day figures
    /// the user typed stay the same.
    pub fn apply_preferences(&mut self, preferences: Preferences) {
        let preferences = preferences.sanitized();
        let previous_hours = self.hours_per_day;
        if self.rate_period == RatePeriod::Day && previous_hours != preferences.hours_per_day {
            let factor = f64::from(previous_hours) / f64::from(preferences.hours_per_day);
            scale_labour_amounts(&mut self.labour.record, factor);
            if let Some(snapshot) = self.previous.as_mut() {
                scale_labour_amounts(&mut snapshot.labour.record, factor);
            }
            debug!(
                from = previous_hours,
                to = preferences.hours_per_day,
                "rescaled labour amounts for new day length"
            );
        }
        self.rate_period = preferences.rate_period;
        self.hours_per_day = preferences.hours_per_day;
    }

    pub fn to_preferences(&self) -> Preferences {
        Preferences {
            rate_period: self.rate_period,
            hours_per_day: self.hours_per_day,
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            labour: self.labour.clone(),
            purchases: self.purchases.clone(),
        }
    }
}

/// User preferences saved between runs. Calculated values are never saved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub rate_period: RatePeriod,
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            rate_period: RatePeriod::default(),
            hours_per_day: DEFAULT_HOURS_PER_DAY,
        }
    }
}

impl Preferences {
    /// Replaces out-of-range values with their defaults.
    pub fn sanitized(self) -> Self {
        let hours_per_day = if (1..=24).contains(&self.hours_per_day) {
            self.hours_per_day
        } else {
            warn!(hours_per_day = self.hours_per_day, "invalid hours per day, using default");
            DEFAULT_HOURS_PER_DAY
        };
        Self {
            hours_per_day,
            ..self
        }
    }
}

fn scale_labour_amounts(record: &mut PricingRecord, factor: f64) {
    record.cost *= factor;
    record.profit *= factor;
    record.charge *= factor;
}

fn default_hours_per_day() -> u8 {
    DEFAULT_HOURS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CalculatorState {
        let mut state = CalculatorState::default();
        state.enter(Section::Labour, PricingField::Cost, "$50").unwrap();
        state.enter(Section::Labour, PricingField::Margin, "20%").unwrap();
        state.enter(Section::Purchases, PricingField::Charge, "1.25").unwrap();
        state
    }

    #[test]
    fn defaults() {
        let state = CalculatorState::default();
        assert_eq!(state.labour.record, PricingRecord::default());
        assert_eq!(state.purchases.record, PricingRecord::with_cost(1.0));
        assert!(!state.can_go_back());
        assert!(!state.has_results());
    }

    #[test]
    fn validation_order() {
        let mut state = CalculatorState::default();
        assert_eq!(state.validate(), Err(ValidationError::LabourCostMissing));
        state.enter(Section::Labour, PricingField::Cost, "40").unwrap();
        assert_eq!(state.validate(), Err(ValidationError::LabourFieldMissing));
        state.enter(Section::Labour, PricingField::Markup, "10").unwrap();
        assert_eq!(state.validate(), Err(ValidationError::PurchasesFieldMissing));
        state.enter(Section::Purchases, PricingField::Markup, "10").unwrap();
        assert_eq!(state.validate(), Ok(()));
    }

    #[test]
    fn emptied_field_does_not_count_as_entered() {
        let mut state = filled();
        assert!(state.is_ready());
        state.labour.record.margin = 0.0;
        assert_eq!(state.labour.entered_field(), None);
        assert_eq!(state.validate(), Err(ValidationError::LabourFieldMissing));
        assert!(!state.is_ready());
    }

    #[test]
    fn zero_entry_is_rejected_and_not_stored() {
        let mut state = CalculatorState::default();
        let err = state.enter(Section::Labour, PricingField::Cost, "0").unwrap_err();
        assert_eq!(err, ValidationError::ZeroValue);
        assert_eq!(state.error, Some(ValidationError::ZeroValue));
        assert!(!state.labour.cost_entered);
    }

    #[test]
    fn purchases_cost_stays_pinned() {
        let mut state = CalculatorState::default();
        state.enter(Section::Purchases, PricingField::Cost, "7").unwrap();
        assert_eq!(state.purchases.record.cost, 1.0);
        assert_eq!(
            state.field_origin(Section::Purchases, PricingField::Cost),
            FieldOrigin::Fixed
        );
    }

    #[test]
    fn calculate_fills_both_sections() {
        let mut state = filled();
        let results = state.calculate().unwrap();
        assert!((results.labour.charge - 62.5).abs() < 1e-9);
        assert!((results.labour.markup - 25.0).abs() < 1e-9);
        assert!((results.purchases.margin - 20.0).abs() < 1e-9);
        assert!(state.has_results());
        assert!(state.can_go_back());
    }

    #[test]
    fn last_entered_field_wins() {
        let mut state = filled();
        state.calculate().unwrap();
        // Markup now holds a derived value; the new charge entry should drive the result.
        state.enter(Section::Labour, PricingField::Charge, "100").unwrap();
        let results = state.calculate().unwrap();
        assert!((results.labour.profit - 50.0).abs() < 1e-9);
        assert!((results.labour.markup - 100.0).abs() < 1e-9);
    }

    #[test]
    fn day_rates_are_stored_hourly() {
        let mut state = CalculatorState::default();
        state.set_rate_period(RatePeriod::Day);
        state.enter(Section::Labour, PricingField::Cost, "400").unwrap();
        state.enter(Section::Labour, PricingField::Profit, "100").unwrap();
        state.enter(Section::Purchases, PricingField::Margin, "20").unwrap();
        let results = state.calculate().unwrap();
        assert_eq!(results.labour.cost, 50.0);
        assert!((results.labour.charge - 62.5).abs() < 1e-9);
        let shown = state.display_record(Section::Labour);
        assert!((shown.charge - 500.0).abs() < 1e-9);
        assert!((shown.markup - 25.0).abs() < 1e-9);
    }

    #[test]
    fn margin_of_hundred_is_blocked() {
        let mut state = CalculatorState::default();
        state.enter(Section::Labour, PricingField::Cost, "10").unwrap();
        let err = state.enter(Section::Labour, PricingField::Margin, "100").unwrap_err();
        assert_eq!(err, ValidationError::MarginTooHigh { margin: 100.0 });
        assert_eq!(state.labour.last_entered, None);
    }

    #[test]
    fn clear_then_back_restores_values() {
        let mut state = filled();
        state.calculate().unwrap();
        let calculated = state.labour.record;
        state.clear();
        assert_eq!(state.labour.record, PricingRecord::default());
        assert!(state.back());
        assert_eq!(state.labour.record, calculated);
        assert!(state.labour.cost_entered);
        assert_eq!(state.labour.last_entered, None);
        assert_eq!(state.purchases.last_entered, None);
        assert!(!state.back());
    }

    #[test]
    fn back_after_calculate_returns_inputs() {
        let mut state = filled();
        let before = state.labour.record;
        state.calculate().unwrap();
        assert!(state.back());
        assert_eq!(state.labour.record, before);
    }

    #[test]
    fn apply_resets_but_keeps_rate_settings() {
        let mut state = filled();
        assert_eq!(state.apply(), None);
        state.set_rate_period(RatePeriod::Day);
        state.calculate().unwrap();
        let results = state.apply().unwrap();
        assert!(results.labour.charge > 0.0);
        assert_eq!(state.labour, PricingSection::labour());
        assert_eq!(state.rate_period, RatePeriod::Day);
        assert!(!state.can_go_back());
    }

    #[test]
    fn origins_follow_entries() {
        let state = filled();
        assert_eq!(
            state.field_origin(Section::Labour, PricingField::Cost),
            FieldOrigin::UserInput
        );
        assert_eq!(
            state.field_origin(Section::Labour, PricingField::Margin),
            FieldOrigin::UserInput
        );
        assert_eq!(
            state.field_origin(Section::Labour, PricingField::Charge),
            FieldOrigin::Calculated
        );
    }

    #[test]
    fn day_entries_survive_hours_change() {
        let mut state = CalculatorState::default();
        state.set_rate_period(RatePeriod::Day);
        state.enter(Section::Labour, PricingField::Cost, "400").unwrap();
        state.enter(Section::Labour, PricingField::Profit, "100").unwrap();
        state.apply_preferences(Preferences {
            rate_period: RatePeriod::Day,
            hours_per_day: 10,
        });

        let shown = state.display_record(Section::Labour);
        assert!((shown.cost - 400.0).abs() < 1e-9);
        assert!((shown.profit - 100.0).abs() < 1e-9);
        assert_eq!(
            state.field_origin(Section::Labour, PricingField::Cost),
            FieldOrigin::UserInput
        );
        assert!((state.labour.record.cost - 40.0).abs() < 1e-9);

        state.enter(Section::Purchases, PricingField::Markup, "10").unwrap();
        let results = state.calculate().unwrap();
        assert!((results.labour.markup - 25.0).abs() < 1e-9);
        assert!((state.display_record(Section::Labour).charge - 500.0).abs() < 1e-9);
    }

    #[test]
    fn hourly_entries_ignore_hours_change() {
        let mut state = CalculatorState::default();
        state.enter(Section::Labour, PricingField::Cost, "50").unwrap();
        state.apply_preferences(Preferences {
            rate_period: RatePeriod::Hour,
            hours_per_day: 10,
        });
        assert_eq!(state.display_record(Section::Labour).cost, 50.0);
    }

    #[test]
    fn snapshot_rescaled_with_hours_change() {
        let mut state = CalculatorState::default();
        state.set_rate_period(RatePeriod::Day);
        state.enter(Section::Labour, PricingField::Cost, "480").unwrap();
        state.clear();
        state.apply_preferences(Preferences {
            rate_period: RatePeriod::Day,
            hours_per_day: 12,
        });
        assert!(state.back());
        assert!((state.display_record(Section::Labour).cost - 480.0).abs() < 1e-9);
    }

    #[test]
    fn preferences_sanitize_hours() {
        let prefs = Preferences {
            rate_period: RatePeriod::Day,
            hours_per_day: 0,
        }
        .sanitized();
        assert_eq!(prefs.hours_per_day, DEFAULT_HOURS_PER_DAY);
        assert_eq!(prefs.rate_period, RatePeriod::Day);
    }

    #[test]
    fn preferences_fill_missing_keys() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
        let prefs: Preferences = serde_json::from_str(r#"{"rate_period":"Day","hours_per_day":10}"#).unwrap();
        let mut state = CalculatorState::default();
        state.apply_preferences(prefs);
        assert_eq!(state.to_preferences().hours_per_day, 10);
        assert_eq!(state.rate_period, RatePeriod::Day);
    }
}
