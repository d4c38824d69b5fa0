//! Pricing derivation: fills in a pricing record from its cost plus one other field.

/// One of the five quantities on a pricing record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PricingField {
    Cost,
    Markup,
    Profit,
    Charge,
    Margin,
}

/// Whether a field holds a money amount or a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Currency,
    Percent,
}

impl PricingField {
    /// Display order used by the form and the printed report.
    pub const ALL: [PricingField; 5] = [
        PricingField::Cost,
        PricingField::Markup,
        PricingField::Profit,
        PricingField::Margin,
        PricingField::Charge,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cost => "Cost",
            Self::Markup => "Markup",
            Self::Profit => "Profit",
            Self::Charge => "Charge",
            Self::Margin => "Margin",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Markup | Self::Margin => FieldKind::Percent,
            Self::Cost | Self::Profit | Self::Charge => FieldKind::Currency,
        }
    }

    pub fn is_currency(&self) -> bool {
        self.kind() == FieldKind::Currency
    }

    pub fn symbol(&self) -> &'static str {
        match self.kind() {
            FieldKind::Currency => "$",
            FieldKind::Percent => "%",
        }
    }
}

/// Cost, markup, profit, charge and margin for a single priced item.
///
/// Markup and margin are percentages (`25.0` means 25%), the rest are
/// currency amounts. A field that has not been supplied is `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PricingRecord {
    pub cost: f64,
    pub markup: f64,
    pub profit: f64,
    pub charge: f64,
    pub margin: f64,
}

impl PricingRecord {
    /// Record with only the cost filled in.
    pub fn with_cost(cost: f64) -> Self {
        Self {
            cost,
            ..Self::default()
        }
    }

    /// Returns a copy with `field` set to `value`.
    pub fn with(mut self, field: PricingField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: PricingField) -> f64 {
        match field {
            PricingField::Cost => self.cost,
            PricingField::Markup => self.markup,
            PricingField::Profit => self.profit,
            PricingField::Charge => self.charge,
            PricingField::Margin => self.margin,
        }
    }

    pub fn set(&mut self, field: PricingField, value: f64) {
        match field {
            PricingField::Cost => self.cost = value,
            PricingField::Markup => self.markup = value,
            PricingField::Profit => self.profit = value,
            PricingField::Charge => self.charge = value,
            PricingField::Margin => self.margin = value,
        }
    }
}

/// Derives the missing fields of `input` from its cost and the first positive
/// field in priority order markup, profit, charge, margin.
///
/// Cost is never derived. When cost is not positive, or no other field is
/// positive, the record comes back unchanged. Lower-priority fields that were
/// also set are overwritten by the derived values.
pub fn derive(input: PricingRecord) -> PricingRecord {
    let PricingRecord {
        cost,
        markup,
        profit,
        charge,
        margin,
    } = input;
    let mut out = input;

    if cost <= 0.0 {
        return out;
    }

    if markup > 0.0 {
        out.profit = cost * (markup / 100.0);
        out.charge = cost + out.profit;
        out.margin = (out.profit / out.charge) * 100.0;
    } else if profit > 0.0 {
        out.charge = cost + profit;
        out.markup = (profit / cost) * 100.0;
        out.margin = (profit / out.charge) * 100.0;
    } else if charge > 0.0 {
        out.profit = charge - cost;
        out.markup = (out.profit / cost) * 100.0;
        out.margin = (out.profit / charge) * 100.0;
    } else if margin > 0.0 {
        // margin == 100 divides by zero; callers reject it before getting here.
        out.charge = cost / (1.0 - margin / 100.0);
        out.profit = out.charge - cost;
        out.markup = (out.profit / cost) * 100.0;
    }

    out
}

/// Derives a record treating `known` as the only supplied field besides cost.
///
/// Every other field is zeroed first, so whichever field the user touched last
/// wins regardless of the priority order used by [`derive`].
pub fn derive_from(record: &PricingRecord, known: PricingField) -> PricingRecord {
    let seed = PricingRecord::with_cost(record.cost);
    if known == PricingField::Cost {
        return seed;
    }
    derive(seed.with(known, record.get(known)))
}

/// True when at least one field besides cost is positive.
pub fn has_enough_info(record: &PricingRecord) -> bool {
    record.markup > 0.0 || record.profit > 0.0 || record.charge > 0.0 || record.margin > 0.0
}
