//! Playing cards from hand.
//!
//! A play is validated in full before anything moves: turn ownership,
//! phase, hand position, then the card's own rule. Once accepted the card
//! leaves the hand, `card_played` is announced, and the effect resolves.
//! Effects that need an answer from another seat go through the response
//! protocol and may suspend the play until the answer is submitted.

use tracing::debug;

use super::response::{RequestSpec, RequestStatus};
use super::{Game, InFlight};
use crate::cards::{BasicKind, CardId, CardKind, EquipSlot, TrickKind};
use crate::core::{ActionRecord, IllegalReason, PlayAction, PlayerId, Result};
use crate::events::GameEvent;
use crate::response::{ResponseContext, ResponseKind};
use crate::rules;
use crate::zones::{Zone, ZonePosition};

/// Result of an accepted play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The effect resolved completely.
    Resolved,
    /// An interactive seat must answer before the effect can finish.
    AwaitingResponse,
}

impl Game {
    /// Validate a play without performing it.
    pub fn check_play(&self, player: PlayerId, hand_index: usize, targets: &[PlayerId]) -> Result<()> {
        self.check_turn(player)?;
        let id = self
            .hand(player)
            .get(hand_index)
            .copied()
            .ok_or(IllegalReason::NoSuchCard(hand_index))?;
        let card = self.cards.get(id).ok_or(IllegalReason::NoSuchCard(hand_index))?;
        rules::check_play(self, player, card, targets)
    }

    #[must_use]
    pub fn can_play(&self, player: PlayerId, hand_index: usize, targets: &[PlayerId]) -> bool {
        self.check_play(player, hand_index, targets).is_ok()
    }

    /// Every play `player` could make right now.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<PlayAction> {
        if self.check_turn(player).is_err() {
            return Vec::new();
        }
        let seats: Vec<PlayerId> = PlayerId::all(self.seat_count()).collect();
        let mut actions = Vec::new();
        for (index, card) in self.hand_cards(player).iter().enumerate() {
            if card.kind.needs_target() {
                actions.extend(
                    seats
                        .iter()
                        .filter(|&&target| rules::check_play(self, player, card, &[target]).is_ok())
                        .map(|&target| PlayAction::targeted(index, target)),
                );
            } else if rules::check_play(self, player, card, &[]).is_ok() {
                actions.push(PlayAction::untargeted(index));
            }
        }
        actions
    }

    /// Play the card at `hand_index` from `player`'s hand.
    ///
    /// On error nothing has changed. On success the card's effect has either
    /// resolved, or is waiting on an interactive response.
    pub fn play_card(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        targets: &[PlayerId],
    ) -> Result<PlayOutcome> {
        self.check_play(player, hand_index, targets)?;
        let id = self.hand(player)[hand_index];
        let Some(card) = self.cards.get(id).copied() else {
            return Err(IllegalReason::NoSuchCard(hand_index).into());
        };
        let target = targets.first().copied();

        self.history.push_back(ActionRecord {
            player,
            card: id,
            targets: targets.iter().copied().collect(),
            turn: self.turn_number,
            sequence: self.plays_this_phase,
        });
        self.plays_this_phase += 1;
        self.stats.cards_played += 1;

        match target {
            Some(t) => debug!(player = %player, card = %card, target = %t, "card played"),
            None => debug!(player = %player, card = %card, "card played"),
        }
        self.emit(GameEvent::CardPlayed {
            source: player,
            card: id,
            target,
        });

        if !matches!(card.kind, CardKind::Equip(_)) {
            self.zones.move_to_zone(id, Zone::DiscardPile, ZonePosition::Top);
        }
        self.in_flight = Some(InFlight {
            source: player,
            card: id,
            target,
        });

        let status = match (card.kind, target) {
            (CardKind::Basic(BasicKind::Slash), Some(target)) => {
                self.players[player].slash_used_this_turn = true;
                self.drive(RequestSpec {
                    kind: ResponseKind::DodgeSlash,
                    source: player,
                    target,
                    context: ResponseContext::Slash { card: id },
                })
            }
            (CardKind::Basic(BasicKind::Peach), _) => {
                self.heal(player);
                RequestStatus::Complete
            }
            (CardKind::Trick(TrickKind::Dismantle), Some(target)) => {
                if let Some(taken) = self.take_card(target) {
                    self.discard_cards(target, vec![taken]);
                }
                RequestStatus::Complete
            }
            (CardKind::Trick(TrickKind::Snatch), Some(target)) => {
                if let Some(taken) = self.take_card(target) {
                    self.zones.move_to_zone(taken, Zone::Hand(player), ZonePosition::Top);
                    debug!(player = %player, from = %target, "card taken");
                }
                RequestStatus::Complete
            }
            (CardKind::Trick(TrickKind::ExNihilo), _) => {
                self.draw_cards(player, 2);
                RequestStatus::Complete
            }
            (CardKind::Trick(TrickKind::Duel), Some(target)) => self.drive(RequestSpec {
                kind: ResponseKind::SlashDuel,
                source: player,
                target,
                context: ResponseContext::Duel {
                    card: id,
                    challenger: player,
                    defender: target,
                },
            }),
            (CardKind::Equip(item), _) => {
                self.equip(player, id, item.slot());
                RequestStatus::Complete
            }
            _ => RequestStatus::Complete,
        };

        match status {
            RequestStatus::Complete => {
                self.finish_in_flight();
                Ok(PlayOutcome::Resolved)
            }
            RequestStatus::AwaitingManualChoice => Ok(PlayOutcome::AwaitingResponse),
        }
    }

    /// Announce the end of the in-flight effect, once.
    pub(crate) fn finish_in_flight(&mut self) {
        if let Some(flight) = self.in_flight.take() {
            self.emit(GameEvent::EffectResolved {
                source: flight.source,
                card: flight.card,
                target: flight.target,
            });
        }
    }

    /// Restore one health, capped at the maximum.
    pub(crate) fn heal(&mut self, player: PlayerId) {
        let seat = &mut self.players[player];
        seat.health = (seat.health + 1).min(seat.max_health);
        let health = seat.health;
        self.stats.heals += 1;
        debug!(player = %player, health, "healed");
        self.emit(GameEvent::Healed { player, health });
    }

    /// The card Dismantle and Snatch take: first hand card, else the first
    /// equipped item in slot order.
    fn take_card(&self, target: PlayerId) -> Option<CardId> {
        self.hand(target).first().copied().or_else(|| {
            EquipSlot::ALL
                .iter()
                .find_map(|&slot| self.equipped_card(target, slot))
        })
    }

    /// Put an equip card into its slot, discarding whatever was there.
    fn equip(&mut self, player: PlayerId, card: CardId, slot: EquipSlot) {
        if let Some(old) = self.equipped_card(player, slot) {
            self.zones.move_to_zone(old, Zone::DiscardPile, ZonePosition::Top);
            debug!(player = %player, slot = ?slot, "equipment replaced");
            self.emit(GameEvent::EquipmentReplaced {
                player,
                removed: old,
                equipped: card,
            });
        }
        self.zones.move_to_zone(card, Zone::Equipment(player), ZonePosition::Top);
    }
}
