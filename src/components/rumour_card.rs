//! Card component for a single transfer rumour.
//!
//! DESIGN
//! ======
//! Pure presentation: receives an owned record and renders raw field values.
//! Badge and date text come from small helpers so label rules stay testable
//! without a DOM.

#[cfg(test)]
#[path = "rumour_card_test.rs"]
mod rumour_card_test;

use leptos::prelude::*;

use crate::state::rumours::{Rumour, RumourType};
use crate::util::date::format_display_date;

/// A single rumour rendered as a feed card.
#[component]
pub fn RumourCard(rumour: Rumour) -> impl IntoView {
    let Rumour {
        player_name,
        current_club,
        rumour_type,
        source,
        date,
        description,
        ..
    } = rumour;
    let outgoing = rumour_type == RumourType::Outgoing;
    let display_date = format_display_date(&date).unwrap_or(date);

    view! {
        <article class="rumour-card" class:rumour-card--outgoing=outgoing>
            <header class="rumour-card__header">
                <h2 class="rumour-card__player">{player_name}</h2>
                <span class="rumour-card__badge" class:rumour-card__badge--out=outgoing>
                    {badge_label(rumour_type)}
                </span>
            </header>
            <div class="rumour-card__meta">
                <span class="rumour-card__club">{current_club}</span>
                <span class="rumour-card__date">{display_date}</span>
            </div>
            <p class="rumour-card__description">{description}</p>
            <span class="rumour-card__source">{format!("Source: {source}")}</span>
        </article>
    }
}

/// Direction badge text for a rumour.
fn badge_label(rumour_type: RumourType) -> &'static str {
    match rumour_type {
        RumourType::Incoming => "→ Incoming",
        RumourType::Outgoing => "← Outgoing",
    }
}
