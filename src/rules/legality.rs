//! Play preconditions per card variant.
//!
//! [`check_play`] answers "may `player` play `card` at `targets` right now"
//! with no side effects. Turn and phase ownership are checked by the game
//! before it asks; everything card-specific is checked here.

use super::distance::{attack_range, distance};
use super::Table;
use crate::cards::{BasicKind, Card, CardKind, EquipKind, EquipSlot, TrickKind};
use crate::core::{IllegalReason, PlayerId, Result, TargetReason};
use crate::heroes::{SkillEffect, TriggerEvent};

/// Check that `card` may be played by `player` at `targets`.
pub fn check_play<T: Table + ?Sized>(
    table: &T,
    player: PlayerId,
    card: &Card,
    targets: &[PlayerId],
) -> Result<()> {
    match card.kind {
        CardKind::Basic(BasicKind::Slash) => {
            if !may_slash_again(table, player) {
                return Err(IllegalReason::SlashLimitReached.into());
            }
            let target = single_target(table, player, targets)?;
            let (d, range) = (distance(table, player, target), attack_range(table, player));
            if d > range {
                return Err(TargetReason::OutOfRange { distance: d, range }.into());
            }
            Ok(())
        }
        CardKind::Basic(BasicKind::Dodge) => Err(IllegalReason::ResponseOnly.into()),
        CardKind::Basic(BasicKind::Peach) => {
            no_targets(targets)?;
            if table.health(player) >= table.max_health(player) {
                return Err(IllegalReason::FullHealth.into());
            }
            Ok(())
        }
        CardKind::Trick(TrickKind::Dismantle | TrickKind::Snatch) => {
            let target = single_target(table, player, targets)?;
            if table.card_count(target) == 0 {
                return Err(TargetReason::NothingToTake(target).into());
            }
            Ok(())
        }
        CardKind::Trick(TrickKind::Duel) => single_target(table, player, targets).map(|_| ()),
        CardKind::Trick(TrickKind::ExNihilo) | CardKind::Equip(_) => no_targets(targets),
    }
}

/// Whether the once-per-turn Slash limit allows another Slash.
pub fn may_slash_again<T: Table + ?Sized>(table: &T, player: PlayerId) -> bool {
    if !table.slash_used(player) {
        return true;
    }
    if let Some(EquipKind::Weapon(weapon)) = table.equipped(player, EquipSlot::Weapon) {
        if weapon.unlimited_slash() {
            return true;
        }
    }
    matches!(
        table.skill_effect(player, &TriggerEvent::SlashLimitCheck),
        Some((_, SkillEffect::LiftSlashLimit))
    )
}

/// Validate a single living, other, seated target.
pub fn single_target<T: Table + ?Sized>(
    table: &T,
    player: PlayerId,
    targets: &[PlayerId],
) -> Result<PlayerId> {
    let target = match targets {
        [] => return Err(TargetReason::MissingTarget.into()),
        [target] => *target,
        _ => return Err(TargetReason::TooManyTargets.into()),
    };
    if !table.seated(target) {
        return Err(TargetReason::NoSuchPlayer(target).into());
    }
    if target == player {
        return Err(TargetReason::SelfTarget.into());
    }
    if !table.is_alive(target) {
        return Err(TargetReason::Eliminated(target).into());
    }
    Ok(target)
}

fn no_targets(targets: &[PlayerId]) -> Result<()> {
    if targets.is_empty() {
        Ok(())
    } else {
        Err(TargetReason::UnexpectedTarget.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardSpec, Suit, Weapon};
    use crate::core::GameError;
    use crate::heroes::Skill;
    use crate::rules::fixture::FixtureTable;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    fn card(spec: CardSpec) -> Card {
        Card::from_spec(CardId::new(0), spec)
    }

    #[test]
    fn test_slash_out_of_range() {
        let table = FixtureTable::new(4);
        let slash = card(CardSpec::slash(Suit::Spade, 7));

        assert_eq!(
            check_play(&table, p(0), &slash, &[p(2)]),
            Err(GameError::InvalidTarget(TargetReason::OutOfRange { distance: 2, range: 1 }))
        );
        assert_eq!(check_play(&table, p(0), &slash, &[p(1)]), Ok(()));
    }

    #[test]
    fn test_slash_limit_and_exemptions() {
        let mut table = FixtureTable::new(2);
        let slash = card(CardSpec::slash(Suit::Spade, 7));
        table.seat(0).slash_used = true;

        assert_eq!(
            check_play(&table, p(0), &slash, &[p(1)]),
            Err(GameError::IllegalAction(IllegalReason::SlashLimitReached))
        );

        table.equip(0, EquipKind::Weapon(Weapon::ZhugeCrossbow));
        assert!(check_play(&table, p(0), &slash, &[p(1)]).is_ok());

        let mut roar = FixtureTable::new(2);
        roar.seat(0).slash_used = true;
        roar.seat(0).skills.push(Skill::Roar);
        assert!(check_play(&roar, p(0), &slash, &[p(1)]).is_ok());
    }

    #[test]
    fn test_target_validation() {
        let mut table = FixtureTable::new(3);
        table.seat(2).alive = false;
        let duel = card(CardSpec::trick(TrickKind::Duel, Suit::Spade, 1));

        let reason = |targets: &[PlayerId]| match check_play(&table, p(0), &duel, targets) {
            Err(GameError::InvalidTarget(r)) => Some(r),
            _ => None,
        };
        assert_eq!(reason(&[]), Some(TargetReason::MissingTarget));
        assert_eq!(reason(&[p(1), p(2)]), Some(TargetReason::TooManyTargets));
        assert_eq!(reason(&[p(0)]), Some(TargetReason::SelfTarget));
        assert_eq!(reason(&[p(2)]), Some(TargetReason::Eliminated(p(2))));
        assert_eq!(reason(&[p(7)]), Some(TargetReason::NoSuchPlayer(p(7))));
        assert_eq!(reason(&[p(1)]), None);
    }

    #[test]
    fn test_peach_needs_missing_health() {
        let mut table = FixtureTable::new(2);
        let peach = card(CardSpec::peach(Suit::Heart, 3));
        assert_eq!(
            check_play(&table, p(0), &peach, &[]),
            Err(GameError::IllegalAction(IllegalReason::FullHealth))
        );
        table.seat(0).health = 3;
        assert!(check_play(&table, p(0), &peach, &[]).is_ok());
        assert_eq!(
            check_play(&table, p(0), &peach, &[p(1)]),
            Err(GameError::InvalidTarget(TargetReason::UnexpectedTarget))
        );
    }

    #[test]
    fn test_dodge_is_response_only() {
        let table = FixtureTable::new(2);
        let dodge = card(CardSpec::dodge(Suit::Diamond, 2));
        assert_eq!(
            check_play(&table, p(0), &dodge, &[]),
            Err(GameError::IllegalAction(IllegalReason::ResponseOnly))
        );
    }

    #[test]
    fn test_dismantle_needs_cards() {
        let mut table = FixtureTable::new(2);
        let dismantle = card(CardSpec::trick(TrickKind::Dismantle, Suit::Spade, 3));
        assert_eq!(
            check_play(&table, p(0), &dismantle, &[p(1)]),
            Err(GameError::InvalidTarget(TargetReason::NothingToTake(p(1))))
        );
        table.seat(1).hand = 1;
        assert!(check_play(&table, p(0), &dismantle, &[p(1)]).is_ok());
    }

    #[test]
    fn test_check_is_idempotent() {
        let table = FixtureTable::new(4);
        let slash = card(CardSpec::slash(Suit::Club, 2));
        let first = check_play(&table, p(0), &slash, &[p(2)]);
        let second = check_play(&table, p(0), &slash, &[p(2)]);
        assert_eq!(first, second);
    }
}
