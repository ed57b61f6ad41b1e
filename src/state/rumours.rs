//! Rumour list state and seed data.
//!
//! DESIGN
//! ======
//! The store models refresh as two synchronous transitions
//! ([`RumoursState::begin_refresh`] / [`RumoursState::complete_refresh`]) so
//! the permutation contract can be tested without timers. The page layer
//! owns the delay between them.

#[cfg(test)]
#[path = "rumours_test.rs"]
mod rumours_test;

/// Milliseconds the simulated refresh round trip takes.
pub const REFRESH_DELAY_MS: u64 = 1000;

/// Direction of a rumoured transfer relative to the club.
///
/// Serializes as `"In"` / `"Out"`, the tags the original data feed uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RumourType {
    /// Player linked with a move to the club.
    #[serde(rename = "In")]
    Incoming,
    /// Player linked with a move away from the club.
    #[serde(rename = "Out")]
    Outgoing,
}

/// A single reported transfer-market claim. Immutable once created; a
/// refresh only reorders records, never rewrites them.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rumour {
    /// Stable identity across reorderings.
    pub id: u32,
    pub player_name: String,
    pub current_club: String,
    pub rumour_type: RumourType,
    /// Attribution for the claim, e.g. a broadcaster or paper.
    pub source: String,
    /// ISO `YYYY-MM-DD` date the rumour was reported.
    pub date: String,
    pub description: String,
}

/// Shared rumour list state: the ordered feed plus the busy flag raised
/// while a refresh is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RumoursState {
    pub items: Vec<Rumour>,
    pub refreshing: bool,
}

impl Default for RumoursState {
    fn default() -> Self {
        Self { items: seed_rumours(), refreshing: false }
    }
}

impl RumoursState {
    /// Raise the busy flag at the start of a refresh.
    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
    }

    /// Install the permuted list and clear the busy flag.
    pub fn complete_refresh(&mut self, permuted: Vec<Rumour>) {
        self.items = permuted;
        self.refreshing = false;
    }

    /// Record ids in current feed order.
    #[must_use]
    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|rumour| rumour.id).collect()
    }
}

/// The fixed mock rumour list shown at page load. Stands in for a real data
/// feed; a refresh reshuffles these same records.
#[must_use]
pub fn seed_rumours() -> Vec<Rumour> {
    vec![
        rumour(
            1,
            "João Silva",
            "Sporting CP",
            RumourType::Incoming,
            "Sky Sports",
            "2025-01-19",
            "Celtic reportedly interested in Portuguese midfielder, with talks ongoing.",
        ),
        rumour(
            2,
            "Callum McGregor",
            "Celtic",
            RumourType::Outgoing,
            "BBC Sport",
            "2025-01-19",
            "Premier League clubs monitoring Celtic captain's situation.",
        ),
        rumour(
            3,
            "Erik Andersson",
            "Malmö FF",
            RumourType::Incoming,
            "The Herald",
            "2025-01-18",
            "Swedish defender linked with January move to Parkhead.",
        ),
        rumour(
            4,
            "Liam Henderson",
            "Empoli",
            RumourType::Incoming,
            "Celtic FC News",
            "2025-01-18",
            "Former Celtic youth player could return to Glasgow in summer.",
        ),
        rumour(
            5,
            "Matt O'Riley",
            "Celtic",
            RumourType::Outgoing,
            "Daily Record",
            "2025-01-17",
            "European clubs circle for Danish international midfielder.",
        ),
    ]
}

fn rumour(
    id: u32,
    player_name: &str,
    current_club: &str,
    rumour_type: RumourType,
    source: &str,
    date: &str,
    description: &str,
) -> Rumour {
    Rumour {
        id,
        player_name: player_name.to_owned(),
        current_club: current_club.to_owned(),
        rumour_type,
        source: source.to_owned(),
        date: date.to_owned(),
        description: description.to_owned(),
    }
}
