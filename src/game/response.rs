//! Driving the response protocol.
//!
//! A request is opened against one responder. Automated responders (and
//! every dying save) are answered on the spot; an interactive responder
//! suspends the game until [`Game::submit_response`] supplies a choice.
//!
//! ## Resolution order
//!
//! For each answer still owed: the offered card, then an armor judgment
//! if the rule allows one. An unanswered request concludes as a failure:
//! armor immunity is checked, then damage is dealt. A Duel exchange that
//! is answered opens the next exchange with the roles swapped.

use tracing::debug;

use super::Game;
use crate::cards::{CardId, EquipKind, EquipSlot};
use crate::core::{PlayerId, ProtocolReason, Result, TargetReason};
use crate::deck;
use crate::events::GameEvent;
use crate::heroes::{SkillEffect, TriggerEvent};
use crate::response::{
    answer_with, Answer, PendingResponse, ResponseContext, ResponseKind, ResponseState,
};
use crate::rules::Table;

/// Whether a request finished or is waiting for a manual choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestStatus {
    Complete,
    AwaitingManualChoice,
}

/// A request about to be opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RequestSpec {
    pub kind: ResponseKind,
    pub source: PlayerId,
    pub target: PlayerId,
    pub context: ResponseContext,
}

pub(super) enum Step {
    Awaiting,
    Done(Option<RequestSpec>),
}

impl Game {
    /// Open a response request.
    ///
    /// Fails without touching anything if a request is already open.
    pub fn request(
        &mut self,
        kind: ResponseKind,
        source: PlayerId,
        target: PlayerId,
        context: ResponseContext,
    ) -> Result<RequestStatus> {
        self.ensure_not_over()?;
        if self.pending.is_some() {
            return Err(ProtocolReason::ResponsePending.into());
        }
        for seat in [source, target] {
            if !self.seated(seat) {
                return Err(TargetReason::NoSuchPlayer(seat).into());
            }
        }
        if !self.players[target].alive {
            return Err(TargetReason::Eliminated(target).into());
        }
        Ok(self.drive(RequestSpec {
            kind,
            source,
            target,
            context,
        }))
    }

    /// Answer the open request on behalf of its interactive responder.
    ///
    /// `Some(i)` offers the card at hand position `i`; `None` declines,
    /// falling back to an armor judgment where one applies. Returns `false`
    /// if the offered card cannot answer the request, in which case the
    /// request stays open and nothing changes.
    pub fn submit_response(&mut self, choice: Option<usize>) -> Result<bool> {
        self.ensure_not_over()?;
        let pending = match self.pending.as_ref() {
            Some(pending) if pending.is_awaiting_choice() => pending.clone(),
            _ => return Err(ProtocolReason::NoPendingResponse.into()),
        };

        let answered = match choice {
            Some(index) => match self.response_card_at(&pending, index) {
                Some((card, answer)) => {
                    self.use_response_card(card, answer);
                    true
                }
                None => return Ok(false),
            },
            None => self.try_judgment(),
        };

        let follow = if !answered {
            self.conclude(false)
        } else if self.pending.as_ref().is_some_and(|p| p.remaining() == 0) {
            self.conclude(true)
        } else {
            return Ok(true);
        };

        match follow {
            Some(next) if self.result.is_none() => {
                self.drive(next);
            }
            _ => self.finish_in_flight(),
        }
        Ok(true)
    }

    /// Open `first` and any follow-up exchanges until one needs a manual
    /// choice or the chain ends.
    pub(crate) fn drive(&mut self, first: RequestSpec) -> RequestStatus {
        let mut next = Some(first);
        while let Some(spec) = next.take() {
            if self.result.is_some() {
                break;
            }
            match self.open_request(spec) {
                Step::Awaiting => return RequestStatus::AwaitingManualChoice,
                Step::Done(follow) => next = follow,
            }
        }
        self.finish_in_flight();
        RequestStatus::Complete
    }

    /// Open a request and, unless it waits on a person, resolve it.
    ///
    /// The caller guarantees no request is open.
    pub(super) fn open_request(&mut self, spec: RequestSpec) -> Step {
        debug_assert!(self.pending.is_none(), "request opened while another is pending");

        let mut pending = PendingResponse::new(spec.kind, spec.source, spec.target, spec.context);
        let demand = TriggerEvent::ResponseDemand { request: spec.kind };
        if let Some((skill, SkillEffect::DemandResponses(count))) =
            self.skill_effect(spec.source, &demand)
        {
            pending.required = count;
            self.emit(GameEvent::SkillTriggered {
                player: spec.source,
                skill,
            });
        }

        let manual =
            spec.kind != ResponseKind::PeachDying && self.players[spec.target].is_interactive();
        pending.state = if manual {
            ResponseState::AwaitingManualChoice
        } else {
            ResponseState::AutoResolved
        };

        self.stats.responses_requested += 1;
        debug!(
            kind = ?spec.kind,
            source = %spec.source,
            target = %spec.target,
            required = pending.required,
            manual,
            "response requested"
        );
        self.emit(GameEvent::ResponseRequested {
            request: pending.clone(),
        });
        self.pending = Some(pending);

        if manual {
            Step::Awaiting
        } else {
            Step::Done(self.auto_answer())
        }
    }

    /// Answer the open request for an automated responder.
    fn auto_answer(&mut self) -> Option<RequestSpec> {
        loop {
            let pending = self.pending.clone()?;
            if pending.remaining() == 0 {
                return self.conclude(true);
            }

            let choice = if pending.kind == ResponseKind::PeachDying {
                self.first_response_index(&pending)
            } else {
                match self.consult(pending.target, |policy, view| {
                    policy.propose_response(view, &pending)
                }) {
                    Some(choice) => choice,
                    None => self.first_response_index(&pending),
                }
            };

            let answered = match choice.and_then(|i| self.response_card_at(&pending, i)) {
                Some((card, answer)) => {
                    self.use_response_card(card, answer);
                    true
                }
                None => self.try_judgment(),
            };
            if !answered {
                return self.conclude(false);
            }
        }
    }

    fn first_response_index(&self, pending: &PendingResponse) -> Option<usize> {
        (0..self.hand(pending.target).len())
            .find(|&i| self.response_card_at(pending, i).is_some())
    }

    /// The card at `index` in the responder's hand, if it answers `pending`.
    fn response_card_at(&self, pending: &PendingResponse, index: usize) -> Option<(CardId, Answer)> {
        let card = self.hand(pending.target).get(index).copied()?;
        let kind = self.cards.kind(card)?;
        let answer = answer_with(pending.kind, kind, self.skills(pending.target))?;
        Some((card, answer))
    }

    fn use_response_card(&mut self, card: CardId, answer: Answer) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        pending.answered += 1;
        let request = pending.clone();

        deck::discard(&mut self.zones, card);
        if let Answer::BySkill(skill) = answer {
            self.emit(GameEvent::SkillTriggered {
                player: request.target,
                skill,
            });
        }
        self.stats.responses_used += 1;
        debug!(player = %request.target, card = %card, kind = ?request.kind, "response used");
        self.emit(GameEvent::ResponseUsed { request, card });
    }

    /// Flip a judgment for the responder's armor, if the rule allows one.
    ///
    /// A successful judgment counts as one answer.
    fn try_judgment(&mut self) -> bool {
        let Some(pending) = self.pending.clone() else {
            return false;
        };
        let Some((armor, color)) = pending.kind.rule().judgment else {
            return false;
        };
        if self.equipped(pending.target, EquipSlot::Armor) != Some(EquipKind::Armor(armor))
            || self.armor_ignored_by(pending.source)
        {
            return false;
        }
        let Some(card) = self.flip_judgment() else {
            return false;
        };

        let success = card.color() == color;
        self.stats.judgments += 1;
        debug!(player = %pending.target, card = %card, success, "judgment");
        self.emit(GameEvent::Judgment {
            player: pending.target,
            card: card.id,
            success,
        });
        if success {
            if let Some(pending) = self.pending.as_mut() {
                pending.answered += 1;
            }
        }
        success
    }

    /// Whether `attacker` wields a weapon that bypasses armor.
    fn armor_ignored_by(&self, attacker: PlayerId) -> bool {
        matches!(
            self.equipped(attacker, EquipSlot::Weapon),
            Some(EquipKind::Weapon(weapon)) if weapon.ignores_armor()
        )
    }

    /// Close the open request and apply its consequences.
    ///
    /// Returns the next Duel exchange, if one follows.
    fn conclude(&mut self, success: bool) -> Option<RequestSpec> {
        let mut pending = self.pending.take()?;
        pending.state = ResponseState::Resolved;
        pending.resolved = success;
        debug!(kind = ?pending.kind, target = %pending.target, success, "response concluded");

        if success {
            return match (pending.kind, pending.context) {
                (ResponseKind::PeachDying, _) => {
                    let seat = &mut self.players[pending.target];
                    seat.health = seat.health.max(1);
                    let health = seat.health;
                    self.stats.heals += 1;
                    self.emit(GameEvent::Healed {
                        player: pending.target,
                        health,
                    });
                    None
                }
                (ResponseKind::SlashDuel, context @ ResponseContext::Duel { .. }) => {
                    Some(RequestSpec {
                        kind: ResponseKind::SlashDuel,
                        source: pending.target,
                        target: pending.source,
                        context,
                    })
                }
                _ => None,
            };
        }

        // An unanswered dying save is settled by the death resolver.
        if pending.kind == ResponseKind::PeachDying {
            return None;
        }

        let rule = pending.kind.rule();
        let card = pending.context.damage_card();
        if self.is_immune(&pending, card) {
            debug!(player = %pending.target, "armor nullified the attack");
        } else if rule.damage_on_failure {
            self.apply_damage(Some(pending.source), pending.target, card);
        }
        None
    }

    fn is_immune(&self, pending: &PendingResponse, card: Option<CardId>) -> bool {
        let Some((armor, color)) = pending.kind.rule().immunity else {
            return false;
        };
        let Some(card) = card.and_then(|id| self.cards.get(id)) else {
            return false;
        };
        card.color() == color
            && self.equipped(pending.target, EquipSlot::Armor) == Some(EquipKind::Armor(armor))
            && !self.armor_ignored_by(pending.source)
    }
}
