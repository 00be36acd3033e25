//! Game configuration.
//!
//! A `GameConfig` fixes the knobs of a game before it starts: the seed, the
//! deck composition and the deal sizes. It is plain data (`serde`), so a
//! host can keep it in whatever format it likes.
//!
//! ```
//! use rust_kingdoms::core::{DeckPreset, GameConfig};
//!
//! let config = GameConfig {
//!     seed: 7,
//!     deck: DeckPreset::Basic,
//!     ..GameConfig::default()
//! };
//! assert_eq!(config.draw_per_turn, 2);
//! assert_eq!(config.seed, 7);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::CardSpec;

/// Which cards make up the draw pile at game start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckPreset {
    /// Basic cards only: 30 Slash, 15 Dodge, 8 Peach.
    Basic,

    /// Basic cards plus tricks and equipment.
    #[default]
    Standard,

    /// Exact cards in draw order; the first element is the top of the pile.
    /// Never shuffled at creation.
    Stacked(Vec<CardSpec>),
}

/// Configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for every shuffle in the game.
    pub seed: u64,

    /// Cards dealt to each seat at creation.
    pub initial_hand_size: usize,

    /// Cards drawn in the draw phase.
    pub draw_per_turn: usize,

    /// Deck composition.
    pub deck: DeckPreset,

    /// Upper bound on plays an automated player makes in one play phase.
    pub max_play_actions: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            initial_hand_size: 4,
            draw_per_turn: 2,
            deck: DeckPreset::Standard,
            max_play_actions: 64,
        }
    }
}
