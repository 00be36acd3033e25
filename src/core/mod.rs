//! Core engine types: seats, RNG, configuration, actions and errors.
//!
//! These are the leaf types every other module builds on. Nothing in here
//! knows about card effects or turn structure.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{DeckPreset, GameConfig};
pub use action::{ActionRecord, PlayAction};
pub use error::{GameError, IllegalReason, ProtocolReason, TargetReason};

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;
