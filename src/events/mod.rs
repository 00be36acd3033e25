//! Typed game events and the synchronous event bus.
//!
//! Every observable state transition is announced as a [`GameEvent`].
//! Delivery is synchronous, in emission order, to every subscriber present
//! at emission time. Nothing is buffered or retried.

pub mod bus;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::game::Phase;
use crate::heroes::Skill;
use crate::response::PendingResponse;
use crate::rules::GameResult;

pub use bus::{EventBus, SubscriptionId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card left the hand to be played; emitted before its effect.
    CardPlayed {
        source: PlayerId,
        card: CardId,
        target: Option<PlayerId>,
    },

    /// The played card's effect has fully resolved.
    EffectResolved {
        source: PlayerId,
        card: CardId,
        target: Option<PlayerId>,
    },

    ResponseRequested { request: PendingResponse },

    ResponseUsed { request: PendingResponse, card: CardId },

    PhaseChanged { player: PlayerId, phase: Phase },

    PlayerEliminated { player: PlayerId },

    GameOver { result: GameResult },

    CardsDrawn { player: PlayerId, count: usize },

    DamageDealt {
        source: Option<PlayerId>,
        target: PlayerId,
        card: Option<CardId>,
        health: i32,
    },

    Healed { player: PlayerId, health: i32 },

    /// A judgment card was flipped for `player`.
    Judgment {
        player: PlayerId,
        card: CardId,
        success: bool,
    },

    SkillTriggered { player: PlayerId, skill: Skill },

    CardsDiscarded { player: PlayerId, cards: Vec<CardId> },

    DeckReshuffled { cards: usize },

    EquipmentReplaced {
        player: PlayerId,
        removed: CardId,
        equipped: CardId,
    },
}

impl GameEvent {
    /// Short snake_case name, stable across versions.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            GameEvent::CardPlayed { .. } => "card_played",
            GameEvent::EffectResolved { .. } => "effect_resolved",
            GameEvent::ResponseRequested { .. } => "response_requested",
            GameEvent::ResponseUsed { .. } => "response_used",
            GameEvent::PhaseChanged { .. } => "phase_changed",
            GameEvent::PlayerEliminated { .. } => "player_eliminated",
            GameEvent::GameOver { .. } => "game_over",
            GameEvent::CardsDrawn { .. } => "cards_drawn",
            GameEvent::DamageDealt { .. } => "damage_dealt",
            GameEvent::Healed { .. } => "healed",
            GameEvent::Judgment { .. } => "judgment",
            GameEvent::SkillTriggered { .. } => "skill_triggered",
            GameEvent::CardsDiscarded { .. } => "cards_discarded",
            GameEvent::DeckReshuffled { .. } => "deck_reshuffled",
            GameEvent::EquipmentReplaced { .. } => "equipment_replaced",
        }
    }
}
