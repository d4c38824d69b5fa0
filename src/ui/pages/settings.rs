use dioxus::prelude::*;

use crate::{
    app::persist_preferences,
    domain::{CalculatorState, Preferences, RatePeriod},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn SettingsPage() -> Element {
    let mut state = use_context::<Signal<CalculatorState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.to_preferences());
    let mut hours_input = use_signal(|| initial.hours_per_day.to_string());
    let mut period_input = use_signal(|| initial.rate_period);

    let on_apply = move |_| match parse_preferences(&hours_input(), period_input()) {
        Ok(preferences) => {
            state.with_mut(|st| st.apply_preferences(preferences));
            persist_preferences(&state);
            push_toast(toasts, ToastKind::Success, "Updated labour rate settings.");
        }
        Err(message) => push_toast(toasts, ToastKind::Error, message),
    };

    let on_reset = move |_| {
        let defaults = Preferences::default();
        hours_input.set(defaults.hours_per_day.to_string());
        period_input.set(defaults.rate_period);
        state.with_mut(|st| st.apply_preferences(defaults));
        persist_preferences(&state);
        push_toast(toasts, ToastKind::Info, "Restored default labour rate settings.");
    };

    rsx! {
        div { class: "stack",
            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Labour Rates" }
                div { class: "settings-grid",
                    div {
                        label { class: theme::LABEL, "Hours per day (1-24)" }
                        input {
                            class: "field-input",
                            inputmode: "numeric",
                            value: "{hours_input}",
                            oninput: move |evt| hours_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: theme::LABEL, "Default rate period" }
                        div { class: "segmented",
                            for period in [RatePeriod::Hour, RatePeriod::Day] {
                                button {
                                    key: "{period.label()}",
                                    class: theme::nav_button(period_input() == period),
                                    onclick: move |_| period_input.set(period),
                                    "{period.rate_type()}"
                                }
                            }
                        }
                    }
                }
                div { class: "toolbar",
                    button { class: theme::BTN_PRIMARY, onclick: on_apply, "Apply" }
                    button { class: theme::BTN_SECONDARY, onclick: on_reset, "Reset Defaults" }
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "About" }
                p { "{APP_NAME} {version_label()}" }
                p { class: "muted",
                    "Calculated values are never saved. Only the settings on this page are kept between runs."
                }
            }
        }
    }
}

fn parse_preferences(hours: &str, rate_period: RatePeriod) -> Result<Preferences, String> {
    let hours_per_day: u8 = hours
        .trim()
        .parse()
        .map_err(|_| "Hours per day must be a whole number")?;
    if !(1..=24).contains(&hours_per_day) {
        return Err("Hours per day must be between 1 and 24".to_string());
    }
    Ok(Preferences {
        rate_period,
        hours_per_day,
    })
}
