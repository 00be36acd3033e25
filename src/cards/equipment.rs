//! Equipment: weapons, armor and mounts.
//!
//! A player has four equipment slots and at most one item per slot.
//! Every item carries a numeric modifier: a weapon's attack range, or the
//! ±1 a mount adds to distance. Armor has no modifier, only a defensive
//! ability the response protocol consults.

use serde::{Deserialize, Serialize};

/// The four equipment slots, in the order items are taken from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    PlusHorse,
    MinusHorse,
}

impl EquipSlot {
    /// All slots in slot order.
    pub const ALL: [EquipSlot; 4] = [
        EquipSlot::Weapon,
        EquipSlot::Armor,
        EquipSlot::PlusHorse,
        EquipSlot::MinusHorse,
    ];
}

/// Weapons. Range replaces the default attack range of 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weapon {
    /// Range 1; Slash may be used any number of times per turn.
    ZhugeCrossbow,
    /// Range 2; the wielder's Slash ignores the target's armor.
    QinggangSword,
    SerpentSpear,
    StoneAxe,
    SkyHalberd,
    KirinBow,
}

impl Weapon {
    /// Attack range granted while equipped.
    #[must_use]
    pub const fn range(self) -> u32 {
        match self {
            Weapon::ZhugeCrossbow => 1,
            Weapon::QinggangSword => 2,
            Weapon::SerpentSpear | Weapon::StoneAxe => 3,
            Weapon::SkyHalberd => 4,
            Weapon::KirinBow => 5,
        }
    }

    /// Whether the wielder is exempt from the once-per-turn Slash limit.
    #[must_use]
    pub const fn unlimited_slash(self) -> bool {
        matches!(self, Weapon::ZhugeCrossbow)
    }

    /// Whether the wielder's attacks bypass armor.
    #[must_use]
    pub const fn ignores_armor(self) -> bool {
        matches!(self, Weapon::QinggangSword)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Weapon::ZhugeCrossbow => "Zhuge Crossbow",
            Weapon::QinggangSword => "Qinggang Sword",
            Weapon::SerpentSpear => "Serpent Spear",
            Weapon::StoneAxe => "Stone Axe",
            Weapon::SkyHalberd => "Sky Halberd",
            Weapon::KirinBow => "Kirin Bow",
        }
    }
}

/// Armor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Armor {
    /// When asked for a Dodge, draw a judgment card; red counts as a Dodge.
    EightTrigrams,
    /// Black Slash has no effect on the wearer.
    RenwangShield,
}

impl Armor {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Armor::EightTrigrams => "Eight Trigrams",
            Armor::RenwangShield => "Renwang Shield",
        }
    }
}

/// Named mounts. Whether a mount is +1 or -1 is decided by the
/// [`EquipKind`] variant that carries it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horse {
    RedHare,
    Ferghana,
    VioletStallion,
    FlyingLightning,
    Shadowrunner,
    HexMark,
}

impl Horse {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Horse::RedHare => "Red Hare",
            Horse::Ferghana => "Ferghana",
            Horse::VioletStallion => "Violet Stallion",
            Horse::FlyingLightning => "Flying Lightning",
            Horse::Shadowrunner => "Shadowrunner",
            Horse::HexMark => "Hex Mark",
        }
    }
}

/// An equipment card's variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipKind {
    Weapon(Weapon),
    Armor(Armor),
    /// Others measure distance to the wearer +1.
    PlusHorse(Horse),
    /// The wearer measures distance to others -1.
    MinusHorse(Horse),
}

impl EquipKind {
    /// The slot this item occupies.
    #[must_use]
    pub const fn slot(self) -> EquipSlot {
        match self {
            EquipKind::Weapon(_) => EquipSlot::Weapon,
            EquipKind::Armor(_) => EquipSlot::Armor,
            EquipKind::PlusHorse(_) => EquipSlot::PlusHorse,
            EquipKind::MinusHorse(_) => EquipSlot::MinusHorse,
        }
    }

    /// Numeric modifier: attack range for weapons, +1/-1 for mounts, 0 for armor.
    #[must_use]
    pub const fn modifier(self) -> i32 {
        match self {
            EquipKind::Weapon(w) => w.range() as i32,
            EquipKind::Armor(_) => 0,
            EquipKind::PlusHorse(_) => 1,
            EquipKind::MinusHorse(_) => -1,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EquipKind::Weapon(w) => w.name(),
            EquipKind::Armor(a) => a.name(),
            EquipKind::PlusHorse(h) | EquipKind::MinusHorse(h) => h.name(),
        }
    }
}
