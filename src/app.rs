//! Root application component and shared context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::rumours::RumoursPage;
use crate::state::rumours::RumoursState;

/// Root application component.
///
/// Provides the shared rumour-list state via context and renders the single
/// page. There is no router: the app has exactly one screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let rumours = RwSignal::new(RumoursState::default());
    provide_context(rumours);

    view! {
        <Title text="Celtic FC Transfer Rumours"/>
        <RumoursPage/>
    }
}
