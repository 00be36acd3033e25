//! Game statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected over one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Turns started.
    pub turns: u32,

    /// Cards played from hand.
    pub cards_played: u32,

    pub responses_requested: u32,

    /// Cards used to answer requests.
    pub responses_used: u32,

    pub judgments: u32,

    pub damage_dealt: u32,

    pub heals: u32,

    pub eliminations: u32,

    /// Win evaluations run.
    pub win_checks: u32,

    pub reshuffles: u32,

    /// Draws that found both piles empty.
    pub degraded_draws: u32,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Average cards played per turn.
    #[must_use]
    pub fn cards_per_turn(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            f64::from(self.cards_played) / f64::from(self.turns)
        }
    }

    /// Share of requests answered with a card.
    #[must_use]
    pub fn response_rate(&self) -> f64 {
        if self.responses_requested == 0 {
            0.0
        } else {
            f64::from(self.responses_used) / f64::from(self.responses_requested)
        }
    }
}
