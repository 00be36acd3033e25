//! Card identity and classification.
//!
//! A [`Card`] is immutable: an id unique within one game, a suit, a rank and
//! a variant tag. Where a card is (hand, equipment, piles) is tracked by the
//! zone manager, never on the card itself.
//!
//! [`CardSpec`] is the id-less description used to build decks; the game
//! assigns ids when it registers the cards.

use serde::{Deserialize, Serialize};

use super::equipment::{Armor, EquipKind, Horse, Weapon};

/// Identifier of one physical card within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Heart | Suit::Diamond => Color::Red,
            Suit::Spade | Suit::Club => Color::Black,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
        }
    }
}

/// Rank 1..=13 (A, 2-10, J, Q, K).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    /// Create a rank, clamping into 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value < 1 {
            Self(1)
        } else if value > 13 {
            Self(13)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{n}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicKind {
    Slash,
    Dodge,
    Peach,
}

impl BasicKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BasicKind::Slash => "Slash",
            BasicKind::Dodge => "Dodge",
            BasicKind::Peach => "Peach",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrickKind {
    /// Discard one card from the target.
    Dismantle,
    /// Take one card from the target into your hand.
    Snatch,
    /// Draw two cards.
    ExNihilo,
    /// Alternate Slash responses until one side fails.
    Duel,
}

impl TrickKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TrickKind::Dismantle => "Dismantle",
            TrickKind::Snatch => "Snatch",
            TrickKind::ExNihilo => "Ex Nihilo",
            TrickKind::Duel => "Duel",
        }
    }
}

/// Variant tag of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Basic(BasicKind),
    Trick(TrickKind),
    Equip(EquipKind),
}

impl CardKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Basic(b) => b.name(),
            CardKind::Trick(t) => t.name(),
            CardKind::Equip(e) => e.name(),
        }
    }

    /// The basic kind, if this is a basic card.
    #[must_use]
    pub const fn basic(self) -> Option<BasicKind> {
        match self {
            CardKind::Basic(b) => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn equip(self) -> Option<EquipKind> {
        match self {
            CardKind::Equip(e) => Some(e),
            _ => None,
        }
    }

    /// Whether playing this card requires exactly one target.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(
            self,
            CardKind::Basic(BasicKind::Slash)
                | CardKind::Trick(TrickKind::Dismantle | TrickKind::Snatch | TrickKind::Duel)
        )
    }
}

/// Description of a card without an id, used to compose decks.
///
/// ```
/// use rust_kingdoms::cards::{BasicKind, CardKind, CardSpec, Suit};
///
/// let spec = CardSpec::slash(Suit::Spade, 7);
/// assert_eq!(spec.kind, CardKind::Basic(BasicKind::Slash));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSpec {
    pub kind: CardKind,
    pub suit: Suit,
    pub rank: Rank,
}

impl CardSpec {
    #[must_use]
    pub const fn new(kind: CardKind, suit: Suit, rank: u8) -> Self {
        Self {
            kind,
            suit,
            rank: Rank::new(rank),
        }
    }

    // === Shortcuts ===

    #[must_use]
    pub const fn slash(suit: Suit, rank: u8) -> Self {
        Self::new(CardKind::Basic(BasicKind::Slash), suit, rank)
    }

    #[must_use]
    pub const fn dodge(suit: Suit, rank: u8) -> Self {
        Self::new(CardKind::Basic(BasicKind::Dodge), suit, rank)
    }

    #[must_use]
    pub const fn peach(suit: Suit, rank: u8) -> Self {
        Self::new(CardKind::Basic(BasicKind::Peach), suit, rank)
    }

    #[must_use]
    pub const fn trick(kind: TrickKind, suit: Suit, rank: u8) -> Self {
        Self::new(CardKind::Trick(kind), suit, rank)
    }

    #[must_use]
    pub const fn weapon(weapon: Weapon, suit: Suit, rank: u8) -> Self {
        Self::new(CardKind::Equip(EquipKind::Weapon(weapon)), suit, rank)
    }

    #[must_use]
    pub const fn armor(armor: Armor, suit: Suit, rank: u8) -> Self {
        Self::new(CardKind::Equip(EquipKind::Armor(armor)), suit, rank)
    }

    #[must_use]
    pub const fn plus_horse(horse: Horse, suit: Suit, rank: u8) -> Self {
        Self::new(CardKind::Equip(EquipKind::PlusHorse(horse)), suit, rank)
    }

    #[must_use]
    pub const fn minus_horse(horse: Horse, suit: Suit, rank: u8) -> Self {
        Self::new(CardKind::Equip(EquipKind::MinusHorse(horse)), suit, rank)
    }
}

/// A physical card in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    pub kind: CardKind,
}

impl Card {
    #[must_use]
    pub const fn from_spec(id: CardId, spec: CardSpec) -> Self {
        Self {
            id,
            suit: spec.suit,
            rank: spec.rank,
            kind: spec.kind,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_basic(&self, kind: BasicKind) -> bool {
        self.kind == CardKind::Basic(kind)
    }

    #[must_use]
    pub fn spec(&self) -> CardSpec {
        CardSpec {
            kind: self.kind,
            suit: self.suit,
            rank: self.rank,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}{}", self.name(), self.suit.symbol(), self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Heart.color(), Color::Red);
        assert_eq!(Suit::Diamond.color(), Color::Red);
        assert_eq!(Suit::Spade.color(), Color::Black);
        assert_eq!(Suit::Club.color(), Color::Black);
    }

    #[test]
    fn test_rank_display_and_clamp() {
        assert_eq!(Rank::new(1).to_string(), "A");
        assert_eq!(Rank::new(10).to_string(), "10");
        assert_eq!(Rank::new(13).to_string(), "K");
        assert_eq!(Rank::new(0).value(), 1);
        assert_eq!(Rank::new(20).value(), 13);
    }

    #[test]
    fn test_card_display() {
        let card = Card::from_spec(CardId::new(3), CardSpec::peach(Suit::Heart, 12));
        assert_eq!(card.to_string(), "Peach ♥Q");
    }

    #[test]
    fn test_needs_target() {
        assert!(CardKind::Basic(BasicKind::Slash).needs_target());
        assert!(CardKind::Trick(TrickKind::Duel).needs_target());
        assert!(!CardKind::Basic(BasicKind::Peach).needs_target());
        assert!(!CardKind::Trick(TrickKind::ExNihilo).needs_target());
        assert!(!CardKind::Equip(EquipKind::Armor(Armor::RenwangShield)).needs_target());
    }

    #[test]
    fn test_spec_roundtrip_through_card() {
        let spec = CardSpec::weapon(Weapon::KirinBow, Suit::Heart, 5);
        let card = Card::from_spec(CardId::new(0), spec);
        assert_eq!(card.spec(), spec);
        assert_eq!(card.kind.equip(), Some(EquipKind::Weapon(Weapon::KirinBow)));
    }
}
