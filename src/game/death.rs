//! Damage, dying saves, elimination and the win check.

use tracing::{debug, info};

use super::response::{RequestSpec, Step};
use super::{Game, Phase};
use crate::cards::CardId;
use crate::core::{PlayerId, ProtocolReason, Result, TargetReason};
use crate::events::GameEvent;
use crate::heroes::{SkillEffect, TriggerEvent};
use crate::response::{ResponseContext, ResponseKind};
use crate::rules::{self, GameResult, Table};
use crate::zones::{Zone, ZonePosition};

impl Game {
    /// Run the death check for `player`.
    ///
    /// A player at zero health or below is offered a save with the first
    /// Peach in hand; without one they are eliminated and the win condition
    /// is evaluated. Returns whether the player is still alive.
    pub fn check_death(&mut self, player: PlayerId) -> Result<bool> {
        self.ensure_not_over()?;
        if !self.seated(player) {
            return Err(TargetReason::NoSuchPlayer(player).into());
        }
        if self.pending.is_some() {
            return Err(ProtocolReason::ResponsePending.into());
        }
        self.resolve_death(player, None);
        Ok(self.players[player].alive)
    }

    /// Evaluate the win condition now, ending the game if it is decided.
    pub fn check_win(&mut self) -> Option<GameResult> {
        if self.result.is_none() {
            self.evaluate_win();
        }
        self.result
    }

    /// Deal one point of damage, then run the death check.
    pub(crate) fn apply_damage(
        &mut self,
        source: Option<PlayerId>,
        target: PlayerId,
        card: Option<CardId>,
    ) {
        if !self.players[target].alive {
            return;
        }
        let seat = &mut self.players[target];
        seat.health -= 1;
        let health = seat.health;
        self.stats.damage_dealt += 1;
        debug!(target = %target, health, "damage dealt");
        self.emit(GameEvent::DamageDealt {
            source,
            target,
            card,
            health,
        });

        let taken = TriggerEvent::DamageTaken { source, card };
        if let Some((skill, SkillEffect::GainCard(gained))) = self.skill_effect(target, &taken) {
            if self.zones.is_in_zone(gained, Zone::DiscardPile) {
                self.zones.move_to_zone(gained, Zone::Hand(target), ZonePosition::Top);
                self.emit(GameEvent::SkillTriggered {
                    player: target,
                    skill,
                });
            }
        }

        if health <= 0 {
            self.resolve_death(target, source);
        }
    }

    pub(crate) fn resolve_death(&mut self, player: PlayerId, source: Option<PlayerId>) {
        let seat = &self.players[player];
        if !seat.alive || seat.health > 0 {
            return;
        }
        if self.pending.is_none() {
            let step = self.open_request(RequestSpec {
                kind: ResponseKind::PeachDying,
                source: source.unwrap_or(player),
                target: player,
                context: ResponseContext::Dying,
            });
            debug_assert!(
                matches!(step, Step::Done(None)),
                "dying save suspended or chained a request"
            );
        }
        let seat = &self.players[player];
        if seat.alive && seat.health <= 0 {
            self.eliminate(player);
        }
    }

    fn eliminate(&mut self, player: PlayerId) {
        self.players[player].alive = false;
        self.zones.move_all(Zone::Hand(player), Zone::DiscardPile);
        self.zones.move_all(Zone::Equipment(player), Zone::DiscardPile);
        self.stats.eliminations += 1;
        info!(player = %player, "player eliminated");
        self.emit(GameEvent::PlayerEliminated { player });

        if player == self.current && self.phase == Phase::Play {
            self.set_phase(Phase::Discard);
        }
        self.evaluate_win();
    }

    fn evaluate_win(&mut self) {
        self.stats.win_checks += 1;
        let living = self
            .players
            .iter()
            .filter(|(_, p)| p.alive)
            .map(|(_, p)| p.role);
        if let Some(result) = rules::check_win(living) {
            self.finish(result);
        }
    }

    fn finish(&mut self, result: GameResult) {
        self.result = Some(result);
        self.pending_discard = None;
        self.set_phase(Phase::Finished);
        info!(result = %result, turn = self.turn_number, "game over");
        self.emit(GameEvent::GameOver { result });
    }
}
