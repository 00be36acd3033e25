//! What a decision maker may see.
//!
//! A [`PlayerView`] is a snapshot built for one seat: its own hand, role
//! and skills in full, and for every seat only public information. Roles
//! stay hidden except the Lord's, the viewer's own, and those of
//! eliminated seats.

use smallvec::SmallVec;

use super::{Game, Phase};
use crate::cards::Card;
use crate::core::{PlayAction, PlayerId};
use crate::heroes::Skill;
use crate::rules::Role;
use crate::zones::Zone;

/// Public information about one seat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatView {
    pub player: PlayerId,
    pub name: String,
    pub hero: String,
    pub alive: bool,
    pub health: i32,
    pub max_health: i32,
    pub hand_size: usize,
    pub equipment: Vec<Card>,
    /// Known only for the Lord, the viewer, and eliminated seats.
    pub role: Option<Role>,
}

impl SeatView {
    /// Cards held in hand and equipment.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand_size + self.equipment.len()
    }
}

/// One seat's view of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerView {
    pub player: PlayerId,
    pub role: Role,
    pub lord: Option<PlayerId>,
    pub hand: Vec<Card>,
    pub skills: SmallVec<[Skill; 2]>,
    pub health: i32,
    pub max_health: i32,
    pub seats: Vec<SeatView>,
    /// Plays the viewer could make right now; empty outside their play phase.
    pub legal_actions: Vec<PlayAction>,
    pub turn: u32,
    pub phase: Phase,
}

impl PlayerView {
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> Option<&SeatView> {
        self.seats.iter().find(|s| s.player == player)
    }
}

impl Game {
    /// Build the view for `viewer`, or `None` if no such seat exists.
    #[must_use]
    pub fn view_for(&self, viewer: PlayerId) -> Option<PlayerView> {
        let me = self.players.try_get(viewer)?;
        let lord = self
            .players
            .iter()
            .find(|(_, p)| p.role == Role::Lord)
            .map(|(id, _)| id);

        let seats = self
            .players
            .iter()
            .map(|(id, p)| {
                let revealed = id == viewer || p.role == Role::Lord || !p.alive;
                SeatView {
                    player: id,
                    name: p.name.clone(),
                    hero: p.hero.name.clone(),
                    alive: p.alive,
                    health: p.health,
                    max_health: p.max_health,
                    hand_size: self.zones.zone_size(Zone::Hand(id)),
                    equipment: self.cards_of(Zone::Equipment(id)),
                    role: revealed.then_some(p.role),
                }
            })
            .collect();

        Some(PlayerView {
            player: viewer,
            role: me.role,
            lord,
            hand: self.hand_cards(viewer),
            skills: me.hero.skills.clone(),
            health: me.health,
            max_health: me.max_health,
            seats,
            legal_actions: self.legal_actions(viewer),
            turn: self.turn_number,
            phase: self.phase,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeckPreset;
    use crate::game::{GameBuilder, SeatConfig};
    use crate::heroes::Hero;
    use crate::rules::Table;

    #[test]
    fn test_roles_hidden_except_lord_and_self() {
        let game = GameBuilder::new()
            .deck(DeckPreset::Basic)
            .seat(SeatConfig::new("A", Hero::liu_bei(), Role::Lord))
            .seat(SeatConfig::new("B", Hero::sun_quan(), Role::Rebel))
            .seat(SeatConfig::new("C", Hero::zhao_yun(), Role::Traitor))
            .build()
            .unwrap();

        let view = game.view_for(PlayerId::new(1)).unwrap();
        assert_eq!(view.role, Role::Rebel);
        assert_eq!(view.lord, Some(PlayerId::new(0)));
        assert_eq!(view.hand.len(), 4);
        assert_eq!(view.seat(PlayerId::new(0)).unwrap().role, Some(Role::Lord));
        assert_eq!(view.seat(PlayerId::new(1)).unwrap().role, Some(Role::Rebel));
        assert_eq!(view.seat(PlayerId::new(2)).unwrap().role, None);
        assert_eq!(view.seat(PlayerId::new(2)).unwrap().hand_size, 4);
        assert!(view.legal_actions.is_empty());
    }

    #[test]
    fn test_view_for_unknown_seat() {
        let game = GameBuilder::new()
            .deck(DeckPreset::Basic)
            .seat(SeatConfig::new("A", Hero::liu_bei(), Role::Lord))
            .seat(SeatConfig::new("B", Hero::sun_quan(), Role::Rebel))
            .build()
            .unwrap();

        assert!(game.view_for(PlayerId::new(2)).is_none());
        assert_eq!(game.health(PlayerId::new(5)), 0);
        assert!(game.skills(PlayerId::new(5)).is_empty());
        assert!(!game.slash_used(PlayerId::new(5)));
    }
}
