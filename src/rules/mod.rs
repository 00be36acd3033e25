//! Pure rule functions.
//!
//! Everything here reads game state through the [`Table`] trait and never
//! mutates it, so a check can be repeated any number of times with the same
//! answer. The [`Game`](crate::game::Game) aggregate implements `Table`;
//! tests can implement it over a hand-built fixture.
//!
//! - `distance`: seating distance and attack range
//! - `legality`: per-variant play preconditions
//! - `victory`: roles, camps and the win evaluation

pub mod distance;
pub mod legality;
pub mod victory;

use crate::cards::{EquipKind, EquipSlot};
use crate::core::PlayerId;
use crate::heroes::{Skill, SkillEffect, TriggerEvent};

pub use distance::{attack_range, distance, in_attack_range};
pub use legality::check_play;
pub use victory::{check_win, Camp, GameResult, Role};

/// Read-only view of the table the rules are evaluated against.
pub trait Table {
    /// Number of seats, including eliminated ones.
    fn seat_count(&self) -> usize;

    fn is_alive(&self, player: PlayerId) -> bool;

    /// Item in `slot`, if any.
    fn equipped(&self, player: PlayerId, slot: EquipSlot) -> Option<EquipKind>;

    fn health(&self, player: PlayerId) -> i32;

    fn max_health(&self, player: PlayerId) -> i32;

    fn skills(&self, player: PlayerId) -> &[Skill];

    fn slash_used(&self, player: PlayerId) -> bool;

    fn hand_size(&self, player: PlayerId) -> usize;

    fn equipment_count(&self, player: PlayerId) -> usize;

    // === Convenience Methods ===

    /// Whether `player` is a seat at this table.
    fn seated(&self, player: PlayerId) -> bool {
        player.index() < self.seat_count()
    }

    /// Cards the player holds in hand and equipment.
    fn card_count(&self, player: PlayerId) -> usize {
        self.hand_size(player) + self.equipment_count(player)
    }

    /// First effect any of the player's skills produces for `event`.
    fn skill_effect(&self, player: PlayerId, event: &TriggerEvent) -> Option<(Skill, SkillEffect)> {
        self.skills(player)
            .iter()
            .find_map(|skill| skill.trigger(event).map(|effect| (*skill, effect)))
    }

    /// Living seats in seating order.
    fn living(&self) -> Vec<PlayerId> {
        PlayerId::all(self.seat_count())
            .filter(|&p| self.is_alive(p))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    //! A hand-built table for rule tests.

    use super::*;
    use crate::heroes::Skill;
    use rustc_hash::FxHashMap;

    #[derive(Clone, Debug)]
    pub struct Seat {
        pub alive: bool,
        pub health: i32,
        pub max_health: i32,
        pub hand: usize,
        pub slash_used: bool,
        pub skills: Vec<Skill>,
        pub equipment: FxHashMap<EquipSlot, EquipKind>,
    }

    impl Default for Seat {
        fn default() -> Self {
            Self {
                alive: true,
                health: 4,
                max_health: 4,
                hand: 0,
                slash_used: false,
                skills: Vec::new(),
                equipment: FxHashMap::default(),
            }
        }
    }

    #[derive(Clone, Debug)]
    pub struct FixtureTable {
        pub seats: Vec<Seat>,
    }

    impl FixtureTable {
        pub fn new(seats: usize) -> Self {
            Self {
                seats: vec![Seat::default(); seats],
            }
        }

        pub fn seat(&mut self, p: u8) -> &mut Seat {
            &mut self.seats[p as usize]
        }

        pub fn equip(&mut self, p: u8, item: EquipKind) -> &mut Self {
            self.seat(p).equipment.insert(item.slot(), item);
            self
        }
    }

    impl Table for FixtureTable {
        fn seat_count(&self) -> usize {
            self.seats.len()
        }
        fn is_alive(&self, p: PlayerId) -> bool {
            self.seats[p.index()].alive
        }
        fn equipped(&self, p: PlayerId, slot: EquipSlot) -> Option<EquipKind> {
            self.seats[p.index()].equipment.get(&slot).copied()
        }
        fn health(&self, p: PlayerId) -> i32 {
            self.seats[p.index()].health
        }
        fn max_health(&self, p: PlayerId) -> i32 {
            self.seats[p.index()].max_health
        }
        fn skills(&self, p: PlayerId) -> &[Skill] {
            &self.seats[p.index()].skills
        }
        fn slash_used(&self, p: PlayerId) -> bool {
            self.seats[p.index()].slash_used
        }
        fn hand_size(&self, p: PlayerId) -> usize {
            self.seats[p.index()].hand
        }
        fn equipment_count(&self, p: PlayerId) -> usize {
            self.seats[p.index()].equipment.len()
        }
    }
}
