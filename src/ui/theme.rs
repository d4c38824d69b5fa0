//! CSS class helpers so pages agree on how a field or button looks.

use crate::domain::FieldOrigin;

pub fn field_input(origin: FieldOrigin, cost_missing: bool) -> &'static str {
    match (origin, cost_missing) {
        (_, true) => "field-input field-input--missing",
        (FieldOrigin::UserInput, _) => "field-input field-input--user",
        (FieldOrigin::Calculated, _) => "field-input field-input--derived",
        (FieldOrigin::Fixed, _) => "field-input field-input--fixed",
    }
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn nav-btn--active"
    } else {
        "nav-btn"
    }
}

pub fn alert(is_error: bool) -> &'static str {
    if is_error {
        "alert alert--error"
    } else {
        "alert alert--info"
    }
}

pub const BTN_PRIMARY: &str = "btn btn--primary";
pub const BTN_SECONDARY: &str = "btn btn--secondary";
pub const BTN_SUCCESS: &str = "btn btn--success";
pub const PANEL: &str = "panel";
pub const SECTION_TITLE: &str = "section-title";
pub const LABEL: &str = "field-label";
