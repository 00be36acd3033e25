//! Game setup.
//!
//! [`GameBuilder`] collects the configuration, the seats and any scenario
//! overrides, validates them together, and produces a [`Game`] positioned
//! at the start of seat 0's first turn.

use rustc_hash::FxHashMap;
use tracing::info;

use super::{Controller, Game, GameStats, Phase, Player};
use crate::cards::{CardRegistry, CardSpec, EquipSlot};
use crate::core::{DeckPreset, GameConfig, GameError, GameRng, PlayerId, PlayerMap, Result};
use crate::deck;
use crate::events::EventBus;
use crate::heroes::Hero;
use crate::policy::{DecisionMaker, HeuristicPolicy};
use crate::rules::Role;
use crate::zones::{Zone, ZoneManager, ZonePosition};

/// Seats allowed at one table.
pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 8;

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub hero: Hero,
    pub role: Role,
    pub controller: Controller,
}

impl SeatConfig {
    /// An automated seat.
    pub fn new(name: impl Into<String>, hero: Hero, role: Role) -> Self {
        Self {
            name: name.into(),
            hero,
            role,
            controller: Controller::Automated,
        }
    }

    /// Decisions for this seat come from the caller.
    #[must_use]
    pub fn interactive(mut self) -> Self {
        self.controller = Controller::Interactive;
        self
    }

    #[must_use]
    pub fn automated(mut self) -> Self {
        self.controller = Controller::Automated;
        self
    }
}

/// Builder for [`Game`].
#[derive(Default)]
pub struct GameBuilder {
    config: GameConfig,
    seats: Vec<SeatConfig>,
    hands: FxHashMap<PlayerId, Vec<CardSpec>>,
    equipment: FxHashMap<PlayerId, Vec<CardSpec>>,
    health: FxHashMap<PlayerId, i32>,
    discard_pile: Vec<CardSpec>,
    policy: Option<Box<dyn DecisionMaker>>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn deck(mut self, deck: DeckPreset) -> Self {
        self.config.deck = deck;
        self
    }

    #[must_use]
    pub fn initial_hand_size(mut self, size: usize) -> Self {
        self.config.initial_hand_size = size;
        self
    }

    #[must_use]
    pub fn draw_per_turn(mut self, count: usize) -> Self {
        self.config.draw_per_turn = count;
        self
    }

    /// Add the next seat. Seats are numbered in the order they are added.
    #[must_use]
    pub fn seat(mut self, seat: SeatConfig) -> Self {
        self.seats.push(seat);
        self
    }

    // === Scenario overrides ===

    /// Start `player` with exactly these cards in hand instead of a dealt hand.
    #[must_use]
    pub fn hand(mut self, player: PlayerId, cards: Vec<CardSpec>) -> Self {
        self.hands.insert(player, cards);
        self
    }

    /// Start `player` with these items equipped.
    #[must_use]
    pub fn equipment(mut self, player: PlayerId, cards: Vec<CardSpec>) -> Self {
        self.equipment.insert(player, cards);
        self
    }

    /// Start `player` at this health instead of full.
    #[must_use]
    pub fn health(mut self, player: PlayerId, health: i32) -> Self {
        self.health.insert(player, health);
        self
    }

    /// Start with these cards on the discard pile, last on top.
    #[must_use]
    pub fn discard_pile(mut self, cards: Vec<CardSpec>) -> Self {
        self.discard_pile = cards;
        self
    }

    /// Decision maker for automated seats. Defaults to [`HeuristicPolicy`].
    #[must_use]
    pub fn policy(mut self, policy: impl DecisionMaker + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Validate the setup and create the game.
    pub fn build(self) -> Result<Game> {
        self.validate()?;

        let mut rng = GameRng::new(self.config.seed);
        let mut cards = CardRegistry::new();
        let mut zones = ZoneManager::new();
        deck::build_draw_pile(&self.config.deck, &mut cards, &mut zones, &mut rng);

        let overrides = [
            (&self.hands, Zone::Hand as fn(PlayerId) -> Zone),
            (&self.equipment, Zone::Equipment as fn(PlayerId) -> Zone),
        ];
        for (specs_by_seat, zone) in overrides {
            for (&player, specs) in specs_by_seat {
                for &id in &cards.register_all(specs) {
                    zones.add_to_zone(id, zone(player), ZonePosition::Top);
                }
            }
        }
        for &id in &cards.register_all(&self.discard_pile) {
            zones.add_to_zone(id, Zone::DiscardPile, ZonePosition::Top);
        }

        let mut players = PlayerMap::from_vec(
            self.seats
                .into_iter()
                .map(|s| Player::new(s.name, s.hero, s.role, s.controller))
                .collect(),
        );
        for (&player, &health) in &self.health {
            players[player].health = health;
        }

        let total_cards = zones.total_cards();
        debug_assert_eq!(cards.len(), total_cards, "registered card left unplaced");
        let mut game = Game {
            config: self.config,
            cards,
            zones,
            rng,
            players,
            current: PlayerId::new(0),
            phase: Phase::Prepare,
            phase_announced: false,
            turn_number: 1,
            plays_this_phase: 0,
            pending: None,
            pending_discard: None,
            in_flight: None,
            result: None,
            events: EventBus::new(),
            history: im::Vector::new(),
            policy: Some(self.policy.unwrap_or_else(|| Box::new(HeuristicPolicy))),
            stats: GameStats::new(),
            total_cards,
        };

        let deal = game.config.initial_hand_size;
        for player in PlayerId::all(game.seat_count()) {
            if !self.hands.contains_key(&player) {
                game.draw_cards(player, deal);
            }
        }
        game.stats.turns = 1;

        info!(
            seats = game.seat_count(),
            cards = total_cards,
            seed = game.config.seed,
            "game created"
        );
        Ok(game)
    }

    fn validate(&self) -> Result<()> {
        let seats = self.seats.len();
        if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
            return Err(setup(format!(
                "{seats} seats; a game needs {MIN_SEATS} to {MAX_SEATS}"
            )));
        }

        let lords = self.seats.iter().filter(|s| s.role == Role::Lord).count();
        if lords != 1 {
            return Err(setup(format!("{lords} lords; exactly one is required")));
        }

        if let Some(seat) = self.seats.iter().find(|s| s.hero.base_health == 0) {
            return Err(setup(format!("hero {} has no health", seat.hero.name)));
        }

        let seated = |p: &PlayerId| p.index() < seats;
        let overridden = self
            .hands
            .keys()
            .chain(self.equipment.keys())
            .chain(self.health.keys());
        for player in overridden {
            if !seated(player) {
                return Err(setup(format!("override for {player}, who is not seated")));
            }
        }

        for (&player, &health) in &self.health {
            let seat = &self.seats[player.index()];
            let max = i32::from(seat.hero.base_health) + i32::from(seat.role == Role::Lord);
            if !(1..=max).contains(&health) {
                return Err(setup(format!("{player} health {health} outside 1..={max}")));
            }
        }

        for (&player, specs) in &self.equipment {
            let mut used: Vec<EquipSlot> = Vec::with_capacity(specs.len());
            for spec in specs {
                let Some(item) = spec.kind.equip() else {
                    return Err(setup(format!("{player} equipment includes a {}", spec.kind.name())));
                };
                if used.contains(&item.slot()) {
                    return Err(setup(format!("{player} has two items in the {:?} slot", item.slot())));
                }
                used.push(item.slot());
            }
        }

        Ok(())
    }
}

fn setup(message: String) -> GameError {
    GameError::InvalidSetup(message)
}

impl std::fmt::Debug for GameBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameBuilder")
            .field("config", &self.config)
            .field("seats", &self.seats)
            .field("policy", &self.policy.is_some())
            .finish_non_exhaustive()
    }
}
