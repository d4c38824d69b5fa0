use dioxus::{prelude::*, signals::Signal};
use tracing::{info, warn};

use crate::{
    domain::CalculatorState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{CalculatorPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_preferences, save_preferences},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(CalculatorState::default);
    use_hook(move || {
        let mut state = state;
        if let Some(saved) = load_preferences() {
            info!(?saved, "restored preferences");
            state.with_mut(|st| st.apply_preferences(saved));
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_preferences(state: &Signal<CalculatorState>) {
    let preferences = state.with(|st| st.to_preferences());
    if let Err(err) = save_preferences(&preferences) {
        warn!(error = %err, "failed to persist preferences");
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
