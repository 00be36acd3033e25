//! # rust-kingdoms
//!
//! A rules engine for a Three Kingdoms style hidden-role card game.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: The [`Game`] aggregate owns every piece of mutable
//!    state. Card locations live in one place, the zone manager, so a card
//!    is always in exactly one zone.
//!
//! 2. **Validate, Then Mutate**: Every public operation checks all of its
//!    preconditions first. An `Err` means nothing changed.
//!
//! 3. **Deterministic**: One seed drives every shuffle. The same seed,
//!    seats and decisions replay the same game.
//!
//! ## Architecture
//!
//! - **Pure Rules**: Distance, legality and the win check are free functions
//!   over the read-only [`rules::Table`] trait.
//!
//! - **One Suspension Point**: Automated seats are answered synchronously.
//!   Only an interactive seat's response, play phase or discard suspends
//!   the engine until the caller supplies the choice.
//!
//! - **Observable**: Every state transition is announced as a typed
//!   [`GameEvent`] on a synchronous bus. Logging goes through `tracing`;
//!   the library never installs a subscriber.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration, actions, errors
//! - `cards`: Card identity, equipment and the card registry
//! - `heroes`: Hero templates and skills
//! - `zones`: Card locations
//! - `deck`: Draw pile, discard pile and deck presets
//! - `rules`: Distance, legality and victory
//! - `response`: Response request types and the validity table
//! - `events`: Typed events and the event bus
//! - `policy`: Decision makers for automated seats
//! - `game`: The game aggregate, turn driver and resolution

pub mod core;
pub mod cards;
pub mod heroes;
pub mod zones;
pub mod deck;
pub mod rules;
pub mod response;
pub mod events;
pub mod policy;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    DeckPreset, GameConfig,
    PlayAction, ActionRecord,
    GameError, IllegalReason, ProtocolReason, TargetReason,
};

pub use crate::cards::{
    Card, CardId, CardKind, CardSpec, CardRegistry,
    BasicKind, TrickKind, Suit, Color, Rank,
    EquipKind, EquipSlot, Weapon, Armor, Horse,
};

pub use crate::heroes::{Faction, Hero, Skill};

pub use crate::zones::{Zone, ZoneManager, ZonePosition};

pub use crate::rules::{Camp, GameResult, Role};

pub use crate::response::{PendingResponse, ResponseContext, ResponseKind, ResponseState};

pub use crate::events::{EventBus, GameEvent, SubscriptionId};

pub use crate::policy::{DecisionMaker, HeuristicPolicy, PassivePolicy, RandomPolicy};

pub use crate::game::{
    Controller, Game, GameBuilder, GameStats,
    PendingDiscard, Phase, PlayOutcome, PlayerView, Progress,
    RequestStatus, SeatConfig, SeatView,
};
