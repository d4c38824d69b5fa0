use thiserror::Error;

use super::pricing::PricingField;

/// Reasons a calculation is blocked. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Labour Cost is required before calculating.")]
    LabourCostMissing,
    #[error("Please enter at least one field other than Cost for Labour calculations.")]
    LabourFieldMissing,
    #[error("Please enter at least one field for Purchases calculations.")]
    PurchasesFieldMissing,
    #[error("Zero values are not allowed. Please enter a positive number.")]
    ZeroValue,
    #[error("{} must be a positive number.", .field.label())]
    NegativeValue { field: PricingField },
    #[error("Margin must be below 100% (got {margin:.1}%).")]
    MarginTooHigh { margin: f64 },
}

/// Checks a single committed entry.
pub fn validate_entry(field: PricingField, value: f64) -> Result<(), ValidationError> {
    if value == 0.0 {
        return Err(ValidationError::ZeroValue);
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    if field == PricingField::Margin && value >= 100.0 {
        return Err(ValidationError::MarginTooHigh { margin: value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_entries() {
        assert_eq!(validate_entry(PricingField::Cost, 45.0), Ok(()));
        assert_eq!(validate_entry(PricingField::Margin, 99.9), Ok(()));
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(
            validate_entry(PricingField::Charge, 0.0),
            Err(ValidationError::ZeroValue)
        );
        let err = validate_entry(PricingField::Profit, -3.0).unwrap_err();
        assert_eq!(err.to_string(), "Profit must be a positive number.");
    }

    #[test]
    fn rejects_full_margin() {
        let err = validate_entry(PricingField::Margin, 100.0).unwrap_err();
        assert_eq!(err, ValidationError::MarginTooHigh { margin: 100.0 });
        assert_eq!(err.to_string(), "Margin must be below 100% (got 100.0%).");
    }

    #[test]
    fn markup_above_hundred_is_fine() {
        assert_eq!(validate_entry(PricingField::Markup, 250.0), Ok(()));
    }
}
