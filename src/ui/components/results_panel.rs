use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    domain::{CalculatorState, ResultsReport},
    ui::theme,
};

/// Plain-text summary of the last calculation, laid out for printing or copying.
#[component]
pub fn ResultsPanel() -> Element {
    let state = use_context::<Signal<CalculatorState>>();
    if !state.with(|st| st.has_results()) {
        return rsx! { Fragment {} };
    }

    let generated_at = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let report = state.with(|st| ResultsReport::build(st, generated_at));

    rsx! {
        section { class: theme::PANEL,
            h2 { class: theme::SECTION_TITLE, "Calculation Results" }
            pre { class: "report", "{report}" }
        }
    }
}
