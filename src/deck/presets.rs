//! Deck compositions.

use crate::cards::{Armor, CardSpec, Horse, Suit, TrickKind, Weapon};
use crate::core::DeckPreset;

fn cycled(count: usize, make: fn(Suit, u8) -> CardSpec) -> impl Iterator<Item = CardSpec> {
    (0..count).map(move |i| make(Suit::ALL[i % 4], (i % 13) as u8 + 1))
}

/// 30 Slash, 15 Dodge, 8 Peach, suits and ranks cycled.
#[must_use]
pub fn basic() -> Vec<CardSpec> {
    cycled(30, CardSpec::slash)
        .chain(cycled(15, CardSpec::dodge))
        .chain(cycled(8, CardSpec::peach))
        .collect()
}

/// 6 Dismantle, 5 Snatch, 4 Ex Nihilo, 3 Duel.
#[must_use]
pub fn tricks() -> Vec<CardSpec> {
    let mut cards = Vec::with_capacity(18);
    for i in 0..6u8 {
        let suit = if i < 3 { Suit::Spade } else { Suit::Club };
        cards.push(CardSpec::trick(TrickKind::Dismantle, suit, i + 3));
    }
    for i in 0..5u8 {
        let suit = if i < 3 { Suit::Spade } else { Suit::Diamond };
        cards.push(CardSpec::trick(TrickKind::Snatch, suit, i + 3));
    }
    for i in 0..4u8 {
        cards.push(CardSpec::trick(TrickKind::ExNihilo, Suit::Heart, i + 7));
    }
    for i in 0..3u8 {
        let suit = if i < 2 { Suit::Spade } else { Suit::Club };
        cards.push(CardSpec::trick(TrickKind::Duel, suit, i + 1));
    }
    cards
}

/// Six weapons, two armors, three +1 and three -1 mounts.
#[must_use]
pub fn equipment() -> Vec<CardSpec> {
    vec![
        CardSpec::weapon(Weapon::ZhugeCrossbow, Suit::Club, 1),
        CardSpec::weapon(Weapon::QinggangSword, Suit::Spade, 6),
        CardSpec::weapon(Weapon::SerpentSpear, Suit::Spade, 12),
        CardSpec::weapon(Weapon::StoneAxe, Suit::Diamond, 5),
        CardSpec::weapon(Weapon::SkyHalberd, Suit::Diamond, 12),
        CardSpec::weapon(Weapon::KirinBow, Suit::Heart, 5),
        CardSpec::armor(Armor::EightTrigrams, Suit::Spade, 2),
        CardSpec::armor(Armor::RenwangShield, Suit::Club, 2),
        CardSpec::plus_horse(Horse::RedHare, Suit::Heart, 5),
        CardSpec::plus_horse(Horse::Ferghana, Suit::Spade, 13),
        CardSpec::plus_horse(Horse::VioletStallion, Suit::Diamond, 13),
        CardSpec::minus_horse(Horse::FlyingLightning, Suit::Heart, 13),
        CardSpec::minus_horse(Horse::Shadowrunner, Suit::Spade, 5),
        CardSpec::minus_horse(Horse::HexMark, Suit::Club, 5),
    ]
}

/// Basic cards plus tricks and equipment.
#[must_use]
pub fn standard() -> Vec<CardSpec> {
    let mut cards = basic();
    cards.extend(tricks());
    cards.extend(equipment());
    cards
}

/// Cards for a preset, in listing order (first element = top of pile).
#[must_use]
pub fn specs_for(preset: &DeckPreset) -> Vec<CardSpec> {
    match preset {
        DeckPreset::Basic => basic(),
        DeckPreset::Standard => standard(),
        DeckPreset::Stacked(cards) => cards.clone(),
    }
}
