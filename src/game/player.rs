//! Per-seat player state.

use serde::{Deserialize, Serialize};

use crate::heroes::Hero;
use crate::rules::Role;

/// Who decides for a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Decisions come from the game's decision maker, synchronously.
    #[default]
    Automated,
    /// Decisions are supplied by the caller; the engine suspends for them.
    Interactive,
}

/// One seat's player.
///
/// Cards are not stored here: hand and equipment live in the zone manager.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hero: Hero,
    pub role: Role,
    pub health: i32,
    pub max_health: i32,
    pub alive: bool,
    pub controller: Controller,

    /// Reset at every turn start.
    pub slash_used_this_turn: bool,
}

impl Player {
    /// A player at full health. Lords get one extra maximum health.
    #[must_use]
    pub fn new(name: impl Into<String>, hero: Hero, role: Role, controller: Controller) -> Self {
        let bonus = i32::from(role == Role::Lord);
        let max_health = i32::from(hero.base_health) + bonus;
        Self {
            name: name.into(),
            hero,
            role,
            health: max_health,
            max_health,
            alive: true,
            controller,
            slash_used_this_turn: false,
        }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.controller == Controller::Interactive
    }

    #[must_use]
    pub fn is_wounded(&self) -> bool {
        self.health < self.max_health
    }

    /// Clear per-turn flags.
    pub fn reset_turn(&mut self) {
        self.slash_used_this_turn = false;
    }
}
