//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` is the single owner of "where is this card". Every
//! card is in exactly one zone at a time; `move_to_zone` removes it from
//! the old zone's ordering in the same call that records the new one, so
//! no transfer can leave a card counted twice.
//!
//! All zones are ordered. For the draw pile the last element is the top.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// Where a card can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    DrawPile,
    DiscardPile,
    Hand(PlayerId),
    Equipment(PlayerId),
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::DrawPile => write!(f, "draw pile"),
            Zone::DiscardPile => write!(f, "discard pile"),
            Zone::Hand(p) => write!(f, "{p} hand"),
            Zone::Equipment(p) => write!(f, "{p} equipment"),
        }
    }
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Append (top of a pile, end of a hand).
    Top,
    /// Insert at index 0 (bottom of a pile).
    Bottom,
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use rust_kingdoms::cards::CardId;
/// use rust_kingdoms::core::PlayerId;
/// use rust_kingdoms::zones::{Zone, ZoneManager, ZonePosition};
///
/// let mut zones = ZoneManager::new();
/// zones.add_to_zone(CardId::new(10), Zone::DrawPile, ZonePosition::Top);
/// zones.add_to_zone(CardId::new(11), Zone::DrawPile, ZonePosition::Top);
///
/// let drawn = zones.pop_top(Zone::DrawPile).unwrap();
/// zones.add_to_zone(drawn, Zone::Hand(PlayerId::new(0)), ZonePosition::Top);
/// assert_eq!(drawn, CardId::new(11));
/// assert_eq!(zones.total_cards(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: card_id -> zone
    locations: FxHashMap<CardId, Zone>,

    /// Ordered card lists per zone.
    zone_order: FxHashMap<Zone, Vec<CardId>>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a card in `zone`.
    ///
    /// Returns `false` and changes nothing if the card is already tracked.
    pub fn add_to_zone(&mut self, card: CardId, zone: Zone, position: ZonePosition) -> bool {
        if self.locations.contains_key(&card) {
            return false;
        }
        self.locations.insert(card, zone);
        Self::insert_at(self.zone_order.entry(zone).or_default(), card, position);
        true
    }

    /// Move a card from its current zone to `new_zone`.
    ///
    /// Returns the old zone, or `None` if the card isn't tracked.
    pub fn move_to_zone(
        &mut self,
        card: CardId,
        new_zone: Zone,
        position: ZonePosition,
    ) -> Option<Zone> {
        let old_zone = self.locations.get(&card).copied()?;

        if old_zone == new_zone {
            return Some(old_zone);
        }

        if let Some(order) = self.zone_order.get_mut(&old_zone) {
            order.retain(|&c| c != card);
        }
        self.locations.insert(card, new_zone);
        Self::insert_at(self.zone_order.entry(new_zone).or_default(), card, position);

        Some(old_zone)
    }

    /// Move every card of `from` into `to`, keeping relative order.
    ///
    /// Returns the number of cards moved.
    pub fn move_all(&mut self, from: Zone, to: Zone) -> usize {
        if from == to {
            return 0;
        }
        let cards = self.zone_order.remove(&from).unwrap_or_default();
        for &card in &cards {
            self.locations.insert(card, to);
        }
        let count = cards.len();
        self.zone_order.entry(to).or_default().extend(cards);
        count
    }

    fn insert_at(order: &mut Vec<CardId>, card: CardId, position: ZonePosition) {
        match position {
            ZonePosition::Top => order.push(card),
            ZonePosition::Bottom => order.insert(0, card),
        }
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn get_zone(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, card: CardId, zone: Zone) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn cards_in(&self, zone: Zone) -> &[CardId] {
        self.zone_order.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.zone_order.get(&zone).map_or(0, Vec::len)
    }

    /// Remove and return the top card of a zone.
    ///
    /// The card is no longer tracked; the caller must place it with
    /// [`add_to_zone`](Self::add_to_zone).
    pub fn pop_top(&mut self, zone: Zone) -> Option<CardId> {
        let order = self.zone_order.get_mut(&zone)?;
        let card = order.pop()?;
        self.locations.remove(&card);
        Some(card)
    }

    /// Shuffle a zone.
    pub fn shuffle_zone(&mut self, zone: Zone, rng: &mut GameRng) {
        if let Some(order) = self.zone_order.get_mut(&zone) {
            rng.shuffle(order);
        }
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }
}
