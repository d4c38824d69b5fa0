use dioxus::prelude::*;

use crate::{app::persist_preferences, domain::CalculatorState};

/// Switches labour figures between per-hour and per-day display.
#[component]
pub fn RateToggle() -> Element {
    let mut state = use_context::<Signal<CalculatorState>>();
    let period = state.with(|st| st.rate_period);
    let hours = state.with(|st| st.hours_per_day);

    rsx! {
        label { class: "rate-toggle", title: "{hours} hours per day",
            input {
                r#type: "checkbox",
                checked: period == crate::domain::RatePeriod::Day,
                onchange: move |_| {
                    state.with_mut(|st| st.set_rate_period(st.rate_period.toggled()));
                    persist_preferences(&state);
                },
            }
            span { "{period.label()}" }
        }
    }
}
