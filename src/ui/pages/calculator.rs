use dioxus::prelude::*;
use tracing::info;

use crate::{
    domain::{CalculatorState, Section},
    ui::{
        components::{
            pricing_grid::PricingGrid,
            rate_toggle::RateToggle,
            results_panel::ResultsPanel,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

const HINT: &str = "Complete one remaining field to calculate all values.";
const READY: &str = "Ready to calculate.";

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<CalculatorState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (error, ready, heading, can_go_back, has_results) = state.with(|st| {
        (
            st.error.as_ref().map(ToString::to_string),
            st.is_ready(),
            st.rate_period.heading(),
            st.can_go_back(),
            st.has_results(),
        )
    });

    let on_calculate = move |_| {
        let outcome = state.with_mut(|st| st.calculate());
        match outcome {
            Ok(_) => push_toast(toasts, ToastKind::Success, "Calculated labour and purchases defaults."),
            Err(err) => push_toast(toasts, ToastKind::Warning, err.to_string()),
        }
    };

    let on_clear = move |_| state.with_mut(|st| st.clear());

    let on_back = move |_| {
        if !state.with_mut(|st| st.back()) {
            push_toast(toasts, ToastKind::Info, "Nothing to go back to.");
        }
    };

    let on_apply = move |_| {
        if let Some(results) = state.with_mut(|st| st.apply()) {
            info!(
                labour_charge = results.labour.charge,
                purchases_charge = results.purchases.charge,
                "results applied from calculator page"
            );
            push_toast(toasts, ToastKind::Success, "Applied results. Ready for a new calculation.");
        }
    };

    rsx! {
        div { class: "stack",
            section { class: theme::PANEL,
                div { class: "section-header",
                    h2 { class: theme::SECTION_TITLE, "{heading}" }
                    RateToggle {}
                }
                match error {
                    Some(message) => rsx! { div { class: theme::alert(true), "{message}" } },
                    None => rsx! {
                        div { class: theme::alert(false), if ready { "{READY}" } else { "{HINT}" } }
                    },
                }
                PricingGrid { section: Section::Labour }
            }

            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "{Section::Purchases.title()}" }
                PricingGrid { section: Section::Purchases }
            }

            div { class: "toolbar",
                button { class: theme::BTN_SECONDARY, onclick: on_clear, "Clear" }
                button { class: theme::BTN_SECONDARY, disabled: !can_go_back, onclick: on_back, "Back" }
                button { class: theme::BTN_PRIMARY, onclick: on_calculate, "Calculate" }
                if has_results {
                    button { class: theme::BTN_SUCCESS, onclick: on_apply, "Apply" }
                }
            }

            ResultsPanel {}
        }
    }
}
