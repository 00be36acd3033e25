//! Turn phase state machine.
//!
//! Each turn runs `Prepare → Judge → Draw → Play → Discard`, strictly in
//! order, then passes to the next living seat. [`Game::advance`] runs
//! phases until the game needs outside input, a new turn begins, or the
//! game ends.
//!
//! Prepare and Judge currently have no work of their own; they are still
//! entered and announced so delayed effects have a fixed place to go.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::Game;
use crate::core::{IllegalReason, PlayerId, ProtocolReason, Result};
use crate::events::GameEvent;
use crate::response::PendingResponse;
use crate::rules::GameResult;
use crate::zones::Zone;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Prepare,
    Judge,
    Draw,
    Play,
    Discard,
    /// Terminal: the game has a result.
    Finished,
}

/// A forced discard waiting for an interactive player's selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDiscard {
    pub player: PlayerId,
    /// Exactly this many cards must be discarded.
    pub count: usize,
}

/// Why [`Game::advance`] returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// An interactive player is in their play phase.
    AwaitingAction(PlayerId),
    /// An interactive player must answer a request.
    AwaitingResponse(PendingResponse),
    /// An interactive player must choose cards to discard.
    AwaitingDiscard(PendingDiscard),
    /// A new turn began for this seat.
    TurnStarted(PlayerId),
    GameOver(GameResult),
}

impl Game {
    /// Run phases until input is needed, a new turn begins, or the game ends.
    ///
    /// Calling it while waiting for input does nothing and reports the wait.
    pub fn advance(&mut self) -> Result<Progress> {
        let starting_turn = self.turn_number;
        loop {
            if let Some(result) = self.result {
                return Ok(Progress::GameOver(result));
            }
            if let Some(pending) = self.pending.as_ref() {
                if pending.is_awaiting_choice() {
                    return Ok(Progress::AwaitingResponse(pending.clone()));
                }
            }
            if let Some(discard) = self.pending_discard {
                return Ok(Progress::AwaitingDiscard(discard));
            }
            if self.turn_number != starting_turn {
                return Ok(Progress::TurnStarted(self.current));
            }

            self.announce_phase();
            let current = self.current;
            match self.phase {
                Phase::Prepare => self.set_phase(Phase::Judge),
                Phase::Judge => self.set_phase(Phase::Draw),
                Phase::Draw => {
                    self.draw_cards(current, self.config.draw_per_turn);
                    self.set_phase(Phase::Play);
                }
                Phase::Play => {
                    if !self.players[current].alive {
                        self.set_phase(Phase::Discard);
                    } else if self.players[current].is_interactive() {
                        return Ok(Progress::AwaitingAction(current));
                    } else {
                        self.automated_play_step();
                    }
                }
                Phase::Discard => self.run_discard(),
                Phase::Finished => {
                    return Ok(Progress::GameOver(self.result.unwrap_or(GameResult::Draw)));
                }
            }
        }
    }

    /// Advance through at most `max_turns` turn changes.
    ///
    /// Returns the first progress that is not a turn start, or the last
    /// turn start when the limit is hit.
    pub fn run(&mut self, max_turns: u32) -> Result<Progress> {
        let mut progress = self.advance()?;
        let mut turns = 0;
        while let Progress::TurnStarted(_) = progress {
            turns += 1;
            if turns >= max_turns {
                break;
            }
            progress = self.advance()?;
        }
        Ok(progress)
    }

    /// End `player`'s play phase voluntarily.
    pub fn end_play_phase(&mut self, player: PlayerId) -> Result<()> {
        self.check_turn(player)?;
        debug!(player = %player, "play phase ended");
        self.set_phase(Phase::Discard);
        Ok(())
    }

    /// Supply the hand positions to discard for an outstanding forced discard.
    ///
    /// Exactly the demanded number of distinct, valid positions is required;
    /// anything else is rejected with nothing changed. On success the turn
    /// passes to the next seat.
    pub fn submit_discard(&mut self, indices: &[usize]) -> Result<()> {
        self.ensure_not_over()?;
        let pending = self.pending_discard.ok_or(ProtocolReason::NoPendingDiscard)?;

        let mut chosen = indices.to_vec();
        chosen.sort_unstable();
        chosen.dedup();
        if chosen.len() != pending.count || indices.len() != pending.count {
            return Err(IllegalReason::DiscardCount {
                expected: pending.count,
                got: chosen.len(),
            }
            .into());
        }

        let hand = self.hand(pending.player).to_vec();
        if let Some(&bad) = chosen.iter().find(|&&i| i >= hand.len()) {
            return Err(IllegalReason::NoSuchCard(bad).into());
        }

        let cards = chosen.iter().map(|&i| hand[i]).collect();
        self.pending_discard = None;
        self.discard_cards(pending.player, cards);
        self.end_turn();
        Ok(())
    }

    /// Turn ownership and phase preconditions shared by every play-phase call.
    pub(crate) fn check_turn(&self, player: PlayerId) -> Result<()> {
        self.ensure_not_over()?;
        if self.pending.is_some() {
            return Err(ProtocolReason::ResponsePending.into());
        }
        if self.pending_discard.is_some() {
            return Err(ProtocolReason::DiscardPending.into());
        }
        if player != self.current {
            return Err(IllegalReason::NotYourTurn(player).into());
        }
        if self.phase != Phase::Play {
            return Err(IllegalReason::WrongPhase.into());
        }
        Ok(())
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.phase_announced = false;
    }

    fn announce_phase(&mut self) {
        if self.phase_announced || self.phase == Phase::Finished {
            return;
        }
        self.phase_announced = true;
        debug!(player = %self.current, phase = ?self.phase, "phase changed");
        self.emit(GameEvent::PhaseChanged {
            player: self.current,
            phase: self.phase,
        });
    }

    /// Ask the decision maker for one play; end the phase on a pass.
    fn automated_play_step(&mut self) {
        let current = self.current;
        if self.plays_this_phase >= self.config.max_play_actions {
            debug!(player = %current, "play limit reached");
            self.set_phase(Phase::Discard);
            return;
        }

        let proposal = self
            .consult(current, |policy, view| policy.propose_action(view))
            .flatten();
        let Some(action) = proposal else {
            self.set_phase(Phase::Discard);
            return;
        };

        if let Err(err) = self.play_card(current, action.hand_index, &action.targets) {
            warn!(player = %current, error = %err, "decision maker proposed an illegal action");
            self.set_phase(Phase::Discard);
        }
    }

    /// Enforce the hand limit, then pass the turn.
    fn run_discard(&mut self) {
        let current = self.current;
        let player = &self.players[current];
        let limit = usize::try_from(player.health.max(0)).unwrap_or(0);
        let hand_size = self.zones.zone_size(Zone::Hand(current));
        let excess = if player.alive { hand_size.saturating_sub(limit) } else { 0 };

        if excess == 0 {
            self.end_turn();
            return;
        }

        if player.is_interactive() {
            debug!(player = %current, count = excess, "waiting for discard selection");
            self.pending_discard = Some(PendingDiscard {
                player: current,
                count: excess,
            });
            return;
        }

        let cards = self.hand(current)[hand_size - excess..].to_vec();
        self.discard_cards(current, cards);
        self.end_turn();
    }

    /// Reset per-turn flags and pass to the next living seat.
    pub(crate) fn end_turn(&mut self) {
        let finished = self.current;
        self.players[finished].reset_turn();

        if self.result.is_some() {
            self.set_phase(Phase::Finished);
            return;
        }

        let seats = self.seat_count();
        let mut next = finished;
        for _ in 0..seats {
            next = next.next(seats);
            if self.players[next].alive {
                break;
            }
        }

        self.current = next;
        self.players[next].reset_turn();
        self.turn_number += 1;
        self.plays_this_phase = 0;
        self.stats.turns += 1;
        info!(turn = self.turn_number, player = %next, "turn started");
        self.set_phase(Phase::Prepare);
    }
}
