//! Game phases.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// ```text
/// Idle --start--> Playing --2nd card--> Resolving --resolved--> Playing
///                    ^                      |
///                    |                      +--last pair--> Won
///                    +--------start---------------------------+
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game has been started yet.
    #[default]
    Idle,
    /// Accepting card selections.
    Playing,
    /// Two cards are up; selection is locked until they resolve.
    Resolving,
    /// Every pair has been matched.
    Won,
}

impl GamePhase {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Playing => "Playing",
            Self::Resolving => "Resolving",
            Self::Won => "Won",
        }
    }

    /// Can a card be selected in this phase?
    #[must_use]
    pub const fn accepts_selection(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Is this a terminal phase for the current game?
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
