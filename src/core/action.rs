//! Play actions: a hand position plus target seats.
//!
//! A `PlayAction` is what a decision maker proposes during the play phase:
//! "play the card at hand position `hand_index` at these targets". Most
//! cards take zero or one target, so targets live in a `SmallVec`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::CardId;

/// A proposed play.
///
/// ```
/// use rust_kingdoms::core::{PlayAction, PlayerId};
///
/// let heal = PlayAction::untargeted(0);
/// assert!(heal.targets.is_empty());
///
/// let attack = PlayAction::targeted(2, PlayerId::new(1));
/// assert_eq!(attack.target(), Some(PlayerId::new(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayAction {
    /// Position of the card in the acting player's hand.
    pub hand_index: usize,

    /// Target seats, in order.
    pub targets: SmallVec<[PlayerId; 2]>,
}

impl PlayAction {
    /// Play a card that takes no target.
    #[must_use]
    pub fn untargeted(hand_index: usize) -> Self {
        Self {
            hand_index,
            targets: SmallVec::new(),
        }
    }

    /// Play a card at a single target.
    #[must_use]
    pub fn targeted(hand_index: usize, target: PlayerId) -> Self {
        let mut targets = SmallVec::new();
        targets.push(target);
        Self { hand_index, targets }
    }

    /// First target, if any.
    #[must_use]
    pub fn target(&self) -> Option<PlayerId> {
        self.targets.first().copied()
    }
}

/// An accepted play, kept in the game's action history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who played.
    pub player: PlayerId,

    /// The card that was played.
    pub card: CardId,

    /// Targets it was played at.
    pub targets: SmallVec<[PlayerId; 2]>,

    /// Turn number the play happened on.
    pub turn: u32,

    /// Order within the turn.
    pub sequence: u32,
}
