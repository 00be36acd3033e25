//! Error taxonomy for engine operations.
//!
//! Every public mutating operation on [`Game`](crate::game::Game) returns
//! `Result<_, GameError>`. Errors are detected before anything is mutated,
//! so an `Err` always leaves the game exactly as it was.

use thiserror::Error;

use super::player::PlayerId;

/// Why an action failed its play precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalReason {
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("cards can only be played during the play phase")]
    WrongPhase,

    #[error("no card at hand position {0}")]
    NoSuchCard(usize),

    #[error("slash already used this turn")]
    SlashLimitReached,

    #[error("health is already full")]
    FullHealth,

    #[error("this card can only be used as a response")]
    ResponseOnly,

    #[error("expected exactly {expected} cards to discard, got {got}")]
    DiscardCount { expected: usize, got: usize },
}

/// Why a chosen target was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TargetReason {
    #[error("this card needs a target")]
    MissingTarget,

    #[error("this card takes no target")]
    UnexpectedTarget,

    #[error("this card takes exactly one target")]
    TooManyTargets,

    #[error("{0} is not seated at this table")]
    NoSuchPlayer(PlayerId),

    #[error("{0} has been eliminated")]
    Eliminated(PlayerId),

    #[error("cannot target yourself")]
    SelfTarget,

    #[error("target at distance {distance} is beyond attack range {range}")]
    OutOfRange { distance: u32, range: u32 },

    #[error("{0} has no cards to take")]
    NothingToTake(PlayerId),
}

/// Integration faults: the caller broke the call contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ProtocolReason {
    #[error("a response is already pending")]
    ResponsePending,

    #[error("no response is awaiting a manual choice")]
    NoPendingResponse,

    #[error("a forced discard is pending")]
    DiscardPending,

    #[error("no forced discard is pending")]
    NoPendingDiscard,

    #[error("the game is over")]
    GameOver,
}

/// Engine error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal action: {0}")]
    IllegalAction(IllegalReason),

    #[error("invalid target: {0}")]
    InvalidTarget(TargetReason),

    #[error("protocol violation: {0}")]
    ProtocolViolation(ProtocolReason),

    /// Both the draw pile and the discard pile are empty.
    #[error("draw pile and discard pile are both empty")]
    ResourceExhausted,

    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}

impl GameError {
    /// Recoverable errors are plain rule rejections; the caller may retry
    /// with a different choice.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::IllegalAction(_) | GameError::InvalidTarget(_))
    }
}

impl From<IllegalReason> for GameError {
    fn from(reason: IllegalReason) -> Self {
        GameError::IllegalAction(reason)
    }
}

impl From<TargetReason> for GameError {
    fn from(reason: TargetReason) -> Self {
        GameError::InvalidTarget(reason)
    }
}

impl From<ProtocolReason> for GameError {
    fn from(reason: ProtocolReason) -> Self {
        GameError::ProtocolViolation(reason)
    }
}
