//! Card registry for card lookup.
//!
//! The `CardRegistry` owns every physical card of one game. Ids are
//! assigned sequentially at registration and never reused.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId, CardKind, CardSpec};

/// Registry of the cards in a game.
///
/// ## Example
///
/// ```
/// use rust_kingdoms::cards::{CardRegistry, CardSpec, Suit};
///
/// let mut registry = CardRegistry::new();
/// let id = registry.register(CardSpec::slash(Suit::Club, 9));
///
/// let card = registry.get(id).unwrap();
/// assert_eq!(card.name(), "Slash");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card and return its assigned ID.
    pub fn register(&mut self, spec: CardSpec) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        self.cards.insert(id, Card::from_spec(id, spec));
        id
    }

    /// Register every spec in order, returning the ids in the same order.
    pub fn register_all(&mut self, specs: &[CardSpec]) -> Vec<CardId> {
        specs.iter().map(|&spec| self.register(spec)).collect()
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Variant tag of a card, if registered.
    #[must_use]
    pub fn kind(&self, id: CardId) -> Option<CardKind> {
        self.cards.get(&id).map(|c| c.kind)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
