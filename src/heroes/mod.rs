//! Heroes: immutable templates assigned to seats at setup.
//!
//! A hero fixes a seat's faction, base health and skills. The standard
//! roster is available through [`roster`] and the named constructors.

pub mod skill;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use skill::{Skill, SkillEffect, TriggerEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Wei,
    Shu,
    Wu,
    Qun,
}

/// A hero template.
///
/// ```
/// use rust_kingdoms::heroes::{Faction, Hero, Skill};
///
/// let hero = Hero::new("Zhang Fei", Faction::Shu, 4).with_skill(Skill::Roar);
/// assert!(hero.has_skill(Skill::Roar));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub faction: Faction,
    pub base_health: u8,
    pub skills: SmallVec<[Skill; 2]>,
}

impl Hero {
    pub fn new(name: impl Into<String>, faction: Faction, base_health: u8) -> Self {
        Self {
            name: name.into(),
            faction,
            base_health,
            skills: SmallVec::new(),
        }
    }

    /// Add a skill (builder pattern).
    #[must_use]
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    #[must_use]
    pub fn has_skill(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }

    // === Standard roster ===

    #[must_use]
    pub fn cao_cao() -> Self {
        Self::new("Cao Cao", Faction::Wei, 4).with_skill(Skill::Treachery)
    }

    #[must_use]
    pub fn liu_bei() -> Self {
        Self::new("Liu Bei", Faction::Shu, 4)
    }

    #[must_use]
    pub fn sun_quan() -> Self {
        Self::new("Sun Quan", Faction::Wu, 4)
    }

    #[must_use]
    pub fn guan_yu() -> Self {
        Self::new("Guan Yu", Faction::Shu, 4)
    }

    #[must_use]
    pub fn zhang_fei() -> Self {
        Self::new("Zhang Fei", Faction::Shu, 4).with_skill(Skill::Roar)
    }

    #[must_use]
    pub fn zhao_yun() -> Self {
        Self::new("Zhao Yun", Faction::Shu, 4).with_skill(Skill::DragonHeart)
    }

    #[must_use]
    pub fn zhuge_liang() -> Self {
        Self::new("Zhuge Liang", Faction::Shu, 3)
    }

    #[must_use]
    pub fn hua_tuo() -> Self {
        Self::new("Hua Tuo", Faction::Qun, 3)
    }

    #[must_use]
    pub fn lu_bu() -> Self {
        Self::new("Lü Bu", Faction::Qun, 4).with_skill(Skill::Peerless)
    }
}

/// Every hero in the standard roster.
#[must_use]
pub fn roster() -> Vec<Hero> {
    vec![
        Hero::cao_cao(),
        Hero::liu_bei(),
        Hero::sun_quan(),
        Hero::guan_yu(),
        Hero::zhang_fei(),
        Hero::zhao_yun(),
        Hero::zhuge_liang(),
        Hero::hua_tuo(),
        Hero::lu_bu(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_is_complete() {
        let heroes = roster();
        assert_eq!(heroes.len(), 9);
        assert!(heroes.iter().all(|h| h.base_health > 0));
        assert_eq!(heroes.iter().filter(|h| h.base_health == 3).count(), 2);
    }

    #[test]
    fn test_skill_assignment() {
        assert!(Hero::cao_cao().has_skill(Skill::Treachery));
        assert!(Hero::lu_bu().has_skill(Skill::Peerless));
        assert!(!Hero::liu_bei().has_skill(Skill::Roar));
        assert_eq!(Hero::zhao_yun().skills.as_slice(), &[Skill::DragonHeart]);
    }
}
