//! Rumour feed page with the simulated refresh flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only screen in the app. Owns the refresh orchestration: raise the
//! busy flag, wait out the simulated round trip, then install a fresh
//! permutation of the current list. The shuffle stands in for a future real
//! data fetch, so the timer and permutation stay confined to
//! [`start_refresh`] and a later real feed replaces only that future.

#[cfg(test)]
#[path = "rumours_test.rs"]
mod rumours_test;

use leptos::prelude::*;

use crate::components::rumour_card::RumourCard;
use crate::state::rumours::RumoursState;

/// Rumour feed page — header with refresh trigger, card list, footer.
#[component]
pub fn RumoursPage() -> impl IntoView {
    let rumours = expect_context::<RwSignal<RumoursState>>();

    let refreshing = move || rumours.get().refreshing;

    view! {
        <div class="rumours-page">
            <header class="rumours-page__header">
                <h1 class="rumours-page__title">"🍀 Celtic FC Transfer Rumours"</h1>
                <p class="rumours-page__tagline">"Latest transfer news and rumours"</p>
                <button
                    class="btn rumours-page__refresh"
                    class:rumours-page__refresh--busy=refreshing
                    disabled=refreshing
                    on:click=move |_| start_refresh(rumours)
                >
                    <span class="rumours-page__refresh-icon" aria-hidden="true">"↻"</span>
                    {move || refresh_button_label(rumours.get().refreshing)}
                </button>
            </header>

            <div class="rumours-page__list">
                {move || {
                    rumours
                        .get()
                        .items
                        .into_iter()
                        .map(|rumour| view! { <RumourCard rumour=rumour/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <footer class="rumours-page__footer">
                <p>"🍀 Hail Hail! 🍀"</p>
                {move || {
                    crate::util::date::today_display()
                        .map(|today| view! { <p>{format!("Last updated: {today}")}</p> })
                }}
            </footer>
        </div>
    }
}

/// Label for the refresh trigger in its idle and busy states.
fn refresh_button_label(refreshing: bool) -> &'static str {
    if refreshing { "Refreshing..." } else { "Refresh Rumours" }
}

/// Kick off one simulated refresh round trip.
///
/// The busy flag is raised synchronously so the trigger disables before the
/// first suspend. There is deliberately no guard against overlapping calls:
/// each runs its own delay, and the last to complete wins because the
/// permutation input is read from the store at completion time.
fn start_refresh(rumours: RwSignal<RumoursState>) {
    rumours.update(RumoursState::begin_refresh);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(
            crate::state::rumours::REFRESH_DELAY_MS,
        ))
        .await;

        rumours.update(|state| {
            let permuted = crate::util::shuffle::shuffled(&state.items);
            state.complete_refresh(permuted);
        });
        log::debug!("rumour list refreshed");
    });
}
