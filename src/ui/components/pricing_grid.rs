use dioxus::prelude::*;

use tracing::debug;

use crate::{
    domain::{format_value, CalculatorState, PricingField, Section},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

/// The five inputs for one section. Values commit when the input changes
/// (blur or Enter); typing only edits a local draft.
#[component]
pub fn PricingGrid(section: Section) -> Element {
    rsx! {
        div { class: "calc-grid",
            for field in PricingField::ALL {
                FieldInput { key: "{field.label()}", section, field }
            }
        }
    }
}

#[component]
fn FieldInput(section: Section, field: PricingField) -> Element {
    let mut state = use_context::<Signal<CalculatorState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut draft = use_signal(|| None::<String>);

    let (shown, origin, pinned, cost_missing) = state.with(|st| {
        let grid = st.section(section);
        let value = st.display_record(section).get(field);
        let pinned = field == PricingField::Cost && grid.is_cost_pinned();
        let cost_missing = field == PricingField::Cost && !pinned && !grid.cost_entered;
        (value, st.field_origin(section, field), pinned, cost_missing)
    });

    let text = draft().unwrap_or_else(|| {
        if shown == 0.0 {
            String::new()
        } else {
            format_value(field, shown)
        }
    });

    rsx! {
        div { class: "field",
            label { class: theme::LABEL, "{field.label()} {field.symbol()}" }
            input {
                class: theme::field_input(origin, cost_missing),
                inputmode: "decimal",
                readonly: pinned,
                value: "{text}",
                onfocus: move |_| {
                    if !pinned {
                        draft.set(Some(String::new()));
                    }
                },
                oninput: move |evt| draft.set(Some(evt.value())),
                onchange: move |evt| {
                    let raw = evt.value();
                    if !pinned {
                        if let Some(message) = state.with_mut(|st| commit_entry(st, section, field, &raw)) {
                            push_toast(toasts, ToastKind::Warning, message);
                        }
                    }
                    draft.set(None);
                },
                onblur: move |_| draft.set(None),
            }
        }
    }
}

/// Stores a committed entry. Returns the message to show when it is rejected.
/// Blank text leaves the field as it was.
fn commit_entry(
    state: &mut CalculatorState,
    section: Section,
    field: PricingField,
    raw: &str,
) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    match state.enter(section, field, raw) {
        Ok(()) => None,
        Err(err) => {
            debug!(section = section.title(), field = field.label(), error = %err, "entry rejected");
            Some(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_entry_yields_message() {
        let mut state = CalculatorState::default();
        let message = commit_entry(&mut state, Section::Labour, PricingField::Margin, "100");
        assert_eq!(message.as_deref(), Some("Margin must be below 100% (got 100.0%)."));
        assert_eq!(state.labour.record.margin, 0.0);
    }

    #[test]
    fn accepted_and_blank_entries_are_quiet() {
        let mut state = CalculatorState::default();
        assert_eq!(commit_entry(&mut state, Section::Labour, PricingField::Cost, "45"), None);
        assert_eq!(commit_entry(&mut state, Section::Labour, PricingField::Markup, "  "), None);
        assert_eq!(state.labour.record.cost, 45.0);
        assert_eq!(state.labour.last_entered, None);
    }
}
