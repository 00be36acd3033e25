//! Card model: identity, classification, equipment and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier of one physical card in a game
//! - `CardKind`: Closed variant set (`Basic`, `Trick`, `Equip`)
//! - `CardSpec`: Id-less card description used to compose decks
//! - `Card`: Immutable card (id, suit, rank, kind)
//! - `CardRegistry`: Card lookup by id
//!
//! Legality and effects live in `rules` and `game`; cards carry no logic.

pub mod card;
pub mod equipment;
pub mod registry;

pub use card::{BasicKind, Card, CardId, CardKind, CardSpec, Color, Rank, Suit, TrickKind};
pub use equipment::{Armor, EquipKind, EquipSlot, Horse, Weapon};
pub use registry::CardRegistry;
