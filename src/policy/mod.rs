//! Decision makers for automated seats.
//!
//! The engine asks a [`DecisionMaker`] for at most one play at a time
//! during an automated seat's play phase, and for a hand position when an
//! automated seat must respond. Proposals are re-validated by the engine;
//! an illegal proposal is logged and treated as a pass.
//!
//! - `HeuristicPolicy`: fixed priority list, deterministic
//! - `RandomPolicy`: uniform over legal plays plus passing, seeded
//! - `PassivePolicy`: never plays

use crate::cards::{BasicKind, CardKind, TrickKind};
use crate::core::{GameRng, PlayAction, PlayerId};
use crate::game::PlayerView;
use crate::response::{is_valid_response, PendingResponse};
use crate::rules::Role;

// =============================================================================
// Decision Maker
// =============================================================================

/// Chooses actions for automated seats.
pub trait DecisionMaker: Send {
    /// Propose one play for `view.player`, or `None` to end the play phase.
    fn propose_action(&mut self, view: &PlayerView) -> Option<PlayAction>;

    /// Choose a hand position to answer `request`, or `None` to refuse.
    ///
    /// Defaults to the first card that answers the request.
    fn propose_response(&mut self, view: &PlayerView, request: &PendingResponse) -> Option<usize> {
        first_valid_response(view, request)
    }
}

/// Hand position of the first card answering `request`.
#[must_use]
pub fn first_valid_response(view: &PlayerView, request: &PendingResponse) -> Option<usize> {
    view.hand
        .iter()
        .position(|card| is_valid_response(request.kind, card.kind, &view.skills))
}

/// Whether `view.player` treats `other` as an opponent.
///
/// Only the Lord's identity is public, so a Loyalist spares the Lord and
/// everyone else is fair game for everyone.
#[must_use]
pub fn is_opponent(view: &PlayerView, other: PlayerId) -> bool {
    if other == view.player {
        return false;
    }
    !(view.role == Role::Loyalist && view.lord == Some(other))
}

// =============================================================================
// Heuristic Policy
// =============================================================================

/// Priority order: heal when hurt, Ex Nihilo, equip into empty slots,
/// steal or dismantle from the opponent holding most cards, Slash the
/// weakest opponent in range, Duel the weakest opponent.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    fn rank(view: &PlayerView, action: &PlayAction) -> Option<(u8, i64)> {
        let card = view.hand.get(action.hand_index)?;
        let target = action.target();
        let hostile = || target.is_some_and(|t| is_opponent(view, t));
        let seat = |p: PlayerId| view.seat(p);

        match card.kind {
            CardKind::Basic(BasicKind::Peach) => Some((0, 0)),
            CardKind::Trick(TrickKind::ExNihilo) => Some((1, 0)),
            CardKind::Equip(kind) => {
                let occupied = view.seat(view.player).is_some_and(|s| {
                    s.equipment
                        .iter()
                        .any(|c| c.kind.equip().map(|e| e.slot()) == Some(kind.slot()))
                });
                (!occupied).then_some((2, 0))
            }
            CardKind::Trick(TrickKind::Snatch | TrickKind::Dismantle) if hostile() => {
                let cards = target.and_then(seat).map_or(0, |s| s.card_count());
                Some((3, -(cards as i64)))
            }
            CardKind::Basic(BasicKind::Slash) if hostile() => {
                let health = target.and_then(seat).map_or(0, |s| s.health);
                Some((4, i64::from(health)))
            }
            CardKind::Trick(TrickKind::Duel) if hostile() => {
                let health = target.and_then(seat).map_or(0, |s| s.health);
                Some((5, i64::from(health)))
            }
            _ => None,
        }
    }
}

impl DecisionMaker for HeuristicPolicy {
    fn propose_action(&mut self, view: &PlayerView) -> Option<PlayAction> {
        view.legal_actions
            .iter()
            .filter_map(|action| Self::rank(view, action).map(|rank| (rank, action)))
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, action)| action.clone())
    }
}

// =============================================================================
// Random Policy
// =============================================================================

/// Uniform over the legal plays plus passing.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl DecisionMaker for RandomPolicy {
    fn propose_action(&mut self, view: &PlayerView) -> Option<PlayAction> {
        let choice = self.rng.gen_range_usize(0..view.legal_actions.len() + 1);
        view.legal_actions.get(choice).cloned()
    }
}

// =============================================================================
// Passive Policy
// =============================================================================

/// Never plays; responds with the first valid card.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassivePolicy;

impl DecisionMaker for PassivePolicy {
    fn propose_action(&mut self, _view: &PlayerView) -> Option<PlayAction> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, CardSpec, Suit};
    use crate::game::{Phase, SeatView};
    use crate::response::{ResponseContext, ResponseKind};
    use smallvec::SmallVec;

    fn seat(p: u8, health: i32, hand_size: usize) -> SeatView {
        SeatView {
            player: PlayerId::new(p),
            name: format!("P{p}"),
            hero: "Liu Bei".into(),
            alive: true,
            health,
            max_health: 4,
            hand_size,
            equipment: Vec::new(),
            role: None,
        }
    }

    fn view(hand: Vec<CardSpec>, legal: Vec<PlayAction>) -> PlayerView {
        PlayerView {
            player: PlayerId::new(0),
            role: Role::Rebel,
            lord: Some(PlayerId::new(1)),
            hand: hand
                .into_iter()
                .enumerate()
                .map(|(i, spec)| Card::from_spec(CardId::new(i as u32), spec))
                .collect(),
            skills: SmallVec::new(),
            health: 3,
            max_health: 4,
            seats: vec![seat(0, 3, 3), seat(1, 4, 1), seat(2, 2, 5)],
            legal_actions: legal,
            turn: 1,
            phase: Phase::Play,
        }
    }

    #[test]
    fn test_heuristic_heals_first() {
        let v = view(
            vec![CardSpec::slash(Suit::Spade, 1), CardSpec::peach(Suit::Heart, 2)],
            vec![
                PlayAction::targeted(0, PlayerId::new(1)),
                PlayAction::untargeted(1),
            ],
        );
        assert_eq!(HeuristicPolicy.propose_action(&v), Some(PlayAction::untargeted(1)));
    }

    #[test]
    fn test_heuristic_slashes_weakest() {
        let v = view(
            vec![CardSpec::slash(Suit::Spade, 1)],
            vec![
                PlayAction::targeted(0, PlayerId::new(1)),
                PlayAction::targeted(0, PlayerId::new(2)),
            ],
        );
        assert_eq!(
            HeuristicPolicy.propose_action(&v),
            Some(PlayAction::targeted(0, PlayerId::new(2)))
        );
    }

    #[test]
    fn test_heuristic_steals_from_richest() {
        let v = view(
            vec![CardSpec::trick(TrickKind::Snatch, Suit::Spade, 3)],
            vec![
                PlayAction::targeted(0, PlayerId::new(1)),
                PlayAction::targeted(0, PlayerId::new(2)),
            ],
        );
        assert_eq!(
            HeuristicPolicy.propose_action(&v),
            Some(PlayAction::targeted(0, PlayerId::new(2)))
        );
    }

    #[test]
    fn test_loyalist_spares_lord() {
        let mut v = view(
            vec![CardSpec::slash(Suit::Spade, 1)],
            vec![PlayAction::targeted(0, PlayerId::new(1))],
        );
        v.role = Role::Loyalist;
        assert_eq!(HeuristicPolicy.propose_action(&v), None);
    }

    #[test]
    fn test_default_response_picks_first_valid() {
        let v = view(
            vec![CardSpec::slash(Suit::Spade, 1), CardSpec::dodge(Suit::Heart, 2)],
            Vec::new(),
        );
        let request = PendingResponse::new(
            ResponseKind::DodgeSlash,
            PlayerId::new(1),
            PlayerId::new(0),
            ResponseContext::Slash { card: CardId::new(99) },
        );
        assert_eq!(PassivePolicy.propose_response(&v, &request), Some(1));
        assert_eq!(PassivePolicy.propose_action(&v), None);
    }

    #[test]
    fn test_random_policy_is_seeded() {
        let legal: Vec<_> = (0..4).map(PlayAction::untargeted).collect();
        let v = view(vec![CardSpec::peach(Suit::Heart, 1); 4], legal);
        let picks = |seed| {
            let mut policy = RandomPolicy::new(seed);
            (0..10).map(|_| policy.propose_action(&v)).collect::<Vec<_>>()
        };
        assert_eq!(picks(5), picks(5));
    }
}
