//! Seating distance and attack range.
//!
//! Distance is measured around the full circle of seats. Seating never
//! changes, so an eliminated seat still counts. Mounts then adjust it (-1
//! for the measurer's minus mount, +1 for the target's plus mount), floored
//! at 1.

use super::Table;
use crate::cards::{EquipKind, EquipSlot};
use crate::core::PlayerId;

/// Distance from `from` to `to`. Zero only when `from == to`.
pub fn distance<T: Table + ?Sized>(table: &T, from: PlayerId, to: PlayerId) -> u32 {
    if from == to {
        return 0;
    }

    let n = table.seat_count() as i64;
    let gap = (from.index() as i64 - to.index() as i64).abs();
    let mut d = gap.min(n - gap);

    if table.equipped(from, EquipSlot::MinusHorse).is_some() {
        d -= 1;
    }
    if table.equipped(to, EquipSlot::PlusHorse).is_some() {
        d += 1;
    }

    d.max(1) as u32
}

/// Range of the equipped weapon, or 1 when unarmed.
pub fn attack_range<T: Table + ?Sized>(table: &T, player: PlayerId) -> u32 {
    match table.equipped(player, EquipSlot::Weapon) {
        Some(EquipKind::Weapon(weapon)) => weapon.range(),
        _ => 1,
    }
}

/// Whether `to` is within `from`'s attack range.
pub fn in_attack_range<T: Table + ?Sized>(table: &T, from: PlayerId, to: PlayerId) -> bool {
    distance(table, from, to) <= attack_range(table, from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Horse, Weapon};
    use crate::rules::fixture::FixtureTable;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_circular_distance() {
        let table = FixtureTable::new(5);
        assert_eq!(distance(&table, p(0), p(1)), 1);
        assert_eq!(distance(&table, p(0), p(2)), 2);
        assert_eq!(distance(&table, p(0), p(3)), 2);
        assert_eq!(distance(&table, p(0), p(4)), 1);
        assert_eq!(distance(&table, p(2), p(2)), 0);
    }

    #[test]
    fn test_eliminated_seats_keep_their_place() {
        let mut table = FixtureTable::new(4);
        assert_eq!(distance(&table, p(0), p(2)), 2);
        table.seat(1).alive = false;
        assert_eq!(distance(&table, p(0), p(2)), 2);
        assert!(!in_attack_range(&table, p(0), p(2)));
    }

    #[test]
    fn test_horses_adjust_and_floor() {
        let mut table = FixtureTable::new(6);
        table.equip(0, EquipKind::MinusHorse(Horse::Shadowrunner));
        assert_eq!(distance(&table, p(0), p(3)), 2);
        assert_eq!(distance(&table, p(0), p(1)), 1);
        // The minus mount only helps its owner.
        assert_eq!(distance(&table, p(3), p(0)), 3);

        table.equip(3, EquipKind::PlusHorse(Horse::RedHare));
        assert_eq!(distance(&table, p(0), p(3)), 3);
        assert_eq!(distance(&table, p(2), p(3)), 2);
    }

    #[test]
    fn test_attack_range_from_weapon() {
        let mut table = FixtureTable::new(4);
        assert_eq!(attack_range(&table, p(0)), 1);
        assert!(!in_attack_range(&table, p(0), p(2)));

        table.equip(0, EquipKind::Weapon(Weapon::QinggangSword));
        assert_eq!(attack_range(&table, p(0)), 2);
        assert!(in_attack_range(&table, p(0), p(2)));
    }
}
