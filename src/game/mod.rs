//! The game aggregate.
//!
//! [`Game`] owns every piece of mutable state: seats, cards and their
//! zones, the RNG, the open response request, the event bus and the
//! decision maker for automated seats. Nothing outside this module mutates
//! it except through the operations below.
//!
//! ## Driving a game
//!
//! ```
//! use rust_kingdoms::game::{GameBuilder, Progress, SeatConfig};
//! use rust_kingdoms::heroes::Hero;
//! use rust_kingdoms::rules::Role;
//!
//! let mut game = GameBuilder::new()
//!     .seed(7)
//!     .seat(SeatConfig::new("Liu Bei", Hero::liu_bei(), Role::Lord))
//!     .seat(SeatConfig::new("Lü Bu", Hero::lu_bu(), Role::Rebel))
//!     .build()
//!     .unwrap();
//!
//! match game.run(200).unwrap() {
//!     Progress::GameOver(result) => println!("{result}"),
//!     other => println!("stopped at {other:?}"),
//! }
//! assert_eq!(game.counted_cards(), game.total_cards());
//! ```
//!
//! ## Modules
//!
//! - `builder`: `GameBuilder` and setup validation
//! - `turn`: phase state machine and forced discard
//! - `play`: legality at invocation time and card effects
//! - `response`: the request/answer protocol
//! - `death`: damage, dying saves, elimination and win evaluation
//! - `view`: what a decision maker sees

pub mod builder;
pub mod death;
pub mod play;
pub mod player;
pub mod response;
pub mod stats;
pub mod turn;
pub mod view;

use tracing::{debug, warn};

use crate::cards::{Card, CardId, CardRegistry, EquipKind, EquipSlot};
use crate::core::{ActionRecord, GameConfig, GameError, GameRng, PlayerId, PlayerMap, ProtocolReason, Result};
use crate::deck;
use crate::events::{EventBus, GameEvent, SubscriptionId};
use crate::heroes::Skill;
use crate::policy::DecisionMaker;
use crate::response::PendingResponse;
use crate::rules::{self, GameResult, Table};
use crate::zones::{Zone, ZoneManager};

pub use builder::{GameBuilder, SeatConfig};
pub use play::PlayOutcome;
pub use player::{Controller, Player};
pub use response::RequestStatus;
pub use stats::GameStats;
pub use turn::{PendingDiscard, Phase, Progress};
pub use view::{PlayerView, SeatView};

/// A card whose effect has started and not yet resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InFlight {
    pub source: PlayerId,
    pub card: CardId,
    pub target: Option<PlayerId>,
}

/// The aggregate root of one game.
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) cards: CardRegistry,
    pub(crate) zones: ZoneManager,
    pub(crate) rng: GameRng,
    pub(crate) players: PlayerMap<Player>,

    pub(crate) current: PlayerId,
    pub(crate) phase: Phase,
    pub(crate) phase_announced: bool,
    pub(crate) turn_number: u32,
    pub(crate) plays_this_phase: u32,

    pub(crate) pending: Option<PendingResponse>,
    pub(crate) pending_discard: Option<PendingDiscard>,
    pub(crate) in_flight: Option<InFlight>,
    pub(crate) result: Option<GameResult>,

    pub(crate) events: EventBus,
    pub(crate) history: im::Vector<ActionRecord>,
    pub(crate) policy: Option<Box<dyn DecisionMaker>>,
    pub(crate) stats: GameStats,
    pub(crate) total_cards: usize,
}

impl Game {
    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.players.seat_count()
    }

    /// Look up a seat's player.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.try_get(player)
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn pending_response(&self) -> Option<&PendingResponse> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn pending_discard(&self) -> Option<PendingDiscard> {
        self.pending_discard
    }

    /// Hand of a seat, in hand order.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[CardId] {
        self.zones.cards_in(Zone::Hand(player))
    }

    /// Hand of a seat as cards.
    #[must_use]
    pub fn hand_cards(&self, player: PlayerId) -> Vec<Card> {
        self.cards_of(Zone::Hand(player))
    }

    /// Equipped cards of a seat, in equip order.
    #[must_use]
    pub fn equipment(&self, player: PlayerId) -> &[CardId] {
        self.zones.cards_in(Zone::Equipment(player))
    }

    /// Card in a given equipment slot.
    #[must_use]
    pub fn equipped_card(&self, player: PlayerId, slot: EquipSlot) -> Option<CardId> {
        self.equipment(player).iter().copied().find(|&id| {
            self.cards
                .kind(id)
                .and_then(|kind| kind.equip())
                .is_some_and(|e| e.slot() == slot)
        })
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Where a card is.
    #[must_use]
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        self.zones.get_zone(id)
    }

    #[must_use]
    pub fn draw_pile_size(&self) -> usize {
        self.zones.zone_size(Zone::DrawPile)
    }

    #[must_use]
    pub fn discard_pile_size(&self) -> usize {
        self.zones.zone_size(Zone::DiscardPile)
    }

    /// Cards in the game, fixed at creation.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Draw pile + discard pile + every hand and equipment area.
    ///
    /// Always equal to [`total_cards`](Self::total_cards).
    #[must_use]
    pub fn counted_cards(&self) -> usize {
        let seats: usize = self
            .players
            .player_ids()
            .map(|p| {
                self.zones.zone_size(Zone::Hand(p)) + self.zones.zone_size(Zone::Equipment(p))
            })
            .sum();
        self.draw_pile_size() + self.discard_pile_size() + seats
    }

    /// Every accepted play, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Seats still in the game, in seating order.
    #[must_use]
    pub fn living_players(&self) -> Vec<PlayerId> {
        self.living()
    }

    #[must_use]
    pub fn distance(&self, from: PlayerId, to: PlayerId) -> u32 {
        rules::distance(self, from, to)
    }

    #[must_use]
    pub fn attack_range(&self, player: PlayerId) -> u32 {
        rules::attack_range(self, player)
    }

    /// Register an observer for every subsequent event.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + Send + 'static,
    {
        self.events.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Replace the decision maker for automated seats.
    pub fn set_policy(&mut self, policy: impl DecisionMaker + 'static) {
        self.policy = Some(Box::new(policy));
    }

    // === Internal Helpers ===

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.emit(&event);
    }

    pub(crate) fn cards_of(&self, zone: Zone) -> Vec<Card> {
        self.zones
            .cards_in(zone)
            .iter()
            .filter_map(|&id| self.cards.get(id).copied())
            .collect()
    }

    pub(crate) fn ensure_not_over(&self) -> Result<()> {
        if self.result.is_some() {
            return Err(ProtocolReason::GameOver.into());
        }
        Ok(())
    }

    /// Draw up to `count` cards into a hand. Stops early, with a warning,
    /// when both piles are empty. Returns the number drawn.
    pub(crate) fn draw_cards(&mut self, player: PlayerId, count: usize) -> usize {
        let held = self.in_flight.map(|flight| flight.card);
        let mut drawn = 0;
        for _ in 0..count {
            match deck::draw_into(&mut self.zones, &mut self.rng, Zone::Hand(player), held) {
                Ok(draw) => {
                    if let Some(cards) = draw.reshuffled {
                        self.stats.reshuffles += 1;
                        self.emit(GameEvent::DeckReshuffled { cards });
                    }
                    drawn += 1;
                }
                Err(GameError::ResourceExhausted) => {
                    self.stats.degraded_draws += 1;
                    warn!(player = %player, wanted = count, drawn, "both piles empty, draw skipped");
                    break;
                }
                Err(err) => {
                    warn!(player = %player, error = %err, "draw failed");
                    break;
                }
            }
        }
        if drawn > 0 {
            debug!(player = %player, count = drawn, "cards drawn");
            self.emit(GameEvent::CardsDrawn { player, count: drawn });
        }
        drawn
    }

    /// Flip the top card of the draw pile onto the discard pile.
    pub(crate) fn flip_judgment(&mut self) -> Option<Card> {
        let held = self.in_flight.map(|flight| flight.card);
        match deck::draw_into(&mut self.zones, &mut self.rng, Zone::DiscardPile, held) {
            Ok(draw) => {
                if let Some(cards) = draw.reshuffled {
                    self.stats.reshuffles += 1;
                    self.emit(GameEvent::DeckReshuffled { cards });
                }
                self.cards.get(draw.card).copied()
            }
            Err(err) => {
                self.stats.degraded_draws += 1;
                warn!(error = %err, "no card available for judgment");
                None
            }
        }
    }

    /// Move cards a seat holds onto the discard pile.
    pub(crate) fn discard_cards(&mut self, player: PlayerId, cards: Vec<CardId>) {
        if cards.is_empty() {
            return;
        }
        for &card in &cards {
            deck::discard(&mut self.zones, card);
        }
        debug!(player = %player, count = cards.len(), "cards discarded");
        self.emit(GameEvent::CardsDiscarded { player, cards });
    }

    /// Ask the decision maker on behalf of `player`.
    ///
    /// Returns `None` when no decision maker is installed or the seat does
    /// not exist.
    pub(crate) fn consult<R>(
        &mut self,
        player: PlayerId,
        ask: impl FnOnce(&mut dyn DecisionMaker, &PlayerView) -> R,
    ) -> Option<R> {
        let view = self.view_for(player)?;
        let mut policy = self.policy.take()?;
        let answer = ask(policy.as_mut(), &view);
        self.policy = Some(policy);
        Some(answer)
    }
}

impl Table for Game {
    fn seat_count(&self) -> usize {
        self.players.seat_count()
    }

    fn is_alive(&self, player: PlayerId) -> bool {
        self.players.try_get(player).is_some_and(|p| p.alive)
    }

    fn equipped(&self, player: PlayerId, slot: EquipSlot) -> Option<EquipKind> {
        self.equipped_card(player, slot)
            .and_then(|id| self.cards.kind(id))
            .and_then(|kind| kind.equip())
    }

    fn health(&self, player: PlayerId) -> i32 {
        self.players.try_get(player).map_or(0, |p| p.health)
    }

    fn max_health(&self, player: PlayerId) -> i32 {
        self.players.try_get(player).map_or(0, |p| p.max_health)
    }

    fn skills(&self, player: PlayerId) -> &[Skill] {
        self.players
            .try_get(player)
            .map_or(&[][..], |p| p.hero.skills.as_slice())
    }

    fn slash_used(&self, player: PlayerId) -> bool {
        self.players
            .try_get(player)
            .is_some_and(|p| p.slash_used_this_turn)
    }

    fn hand_size(&self, player: PlayerId) -> usize {
        self.zones.zone_size(Zone::Hand(player))
    }

    fn equipment_count(&self, player: PlayerId) -> usize {
        self.zones.zone_size(Zone::Equipment(player))
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("turn", &self.turn_number)
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("pending", &self.pending)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
