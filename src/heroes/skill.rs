//! Hero skills as a closed capability set.
//!
//! The engine raises a typed [`TriggerEvent`] at each point a skill may
//! react. Every [`Skill`] answers two questions about it: can I react
//! ([`Skill::can_trigger`]), and what do I do ([`Skill::trigger`]). The
//! engine applies the returned [`SkillEffect`]; skills never touch game
//! state themselves.
//!
//! | Skill | Reacts to | Effect |
//! |---|---|---|
//! | Roar | `SlashLimitCheck` | `LiftSlashLimit` |
//! | Treachery | `DamageTaken` with a card | `GainCard` |
//! | Dragon Heart | `ResponseCardCheck` (Slash for Dodge, Dodge for Slash) | `AcceptAsResponse` |
//! | Peerless | `ResponseDemand` for Dodge or Duel requests | `DemandResponses(2)` |

use serde::{Deserialize, Serialize};

use crate::cards::{BasicKind, CardId};
use crate::core::PlayerId;
use crate::response::ResponseKind;

/// A point in rule resolution where skills are consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerEvent {
    /// The owner wants to play a Slash after already using one this turn.
    SlashLimitCheck,

    /// The owner just took damage.
    DamageTaken {
        source: Option<PlayerId>,
        card: Option<CardId>,
    },

    /// The owner offers a basic card of kind `offered` to answer a `request`.
    ResponseCardCheck {
        request: ResponseKind,
        offered: BasicKind,
    },

    /// The owner started a request; how many answers must the responder give?
    ResponseDemand { request: ResponseKind },
}

/// What a triggered skill does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillEffect {
    /// The once-per-turn Slash limit does not apply.
    LiftSlashLimit,
    /// Move this card into the owner's hand.
    GainCard(CardId),
    /// The offered card counts as the requested one.
    AcceptAsResponse,
    /// The responder must answer this many times.
    DemandResponses(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    /// Slash has no per-turn limit.
    Roar,
    /// After taking damage, gain the card that caused it.
    Treachery,
    /// Slash may be used as Dodge, and Dodge as Slash.
    DragonHeart,
    /// Your Slash needs two Dodges; your Duel opponent needs two Slashes per exchange.
    Peerless,
}

impl Skill {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Skill::Roar => "Roar",
            Skill::Treachery => "Treachery",
            Skill::DragonHeart => "Dragon Heart",
            Skill::Peerless => "Peerless",
        }
    }

    /// Whether this skill reacts to `event`.
    #[must_use]
    pub fn can_trigger(self, event: &TriggerEvent) -> bool {
        match (self, event) {
            (Skill::Roar, TriggerEvent::SlashLimitCheck) => true,
            (Skill::Treachery, TriggerEvent::DamageTaken { card, .. }) => card.is_some(),
            (Skill::DragonHeart, TriggerEvent::ResponseCardCheck { request, offered }) => {
                matches!(
                    (request, offered),
                    (ResponseKind::DodgeSlash, BasicKind::Slash)
                        | (ResponseKind::SlashDuel, BasicKind::Dodge)
                )
            }
            (Skill::Peerless, TriggerEvent::ResponseDemand { request }) => {
                matches!(request, ResponseKind::DodgeSlash | ResponseKind::SlashDuel)
            }
            _ => false,
        }
    }

    /// The effect of triggering on `event`, or `None` if the skill does not react.
    #[must_use]
    pub fn trigger(self, event: &TriggerEvent) -> Option<SkillEffect> {
        if !self.can_trigger(event) {
            return None;
        }
        let effect = match (self, event) {
            (Skill::Roar, _) => SkillEffect::LiftSlashLimit,
            (Skill::Treachery, TriggerEvent::DamageTaken { card: Some(card), .. }) => {
                SkillEffect::GainCard(*card)
            }
            (Skill::DragonHeart, _) => SkillEffect::AcceptAsResponse,
            (Skill::Peerless, _) => SkillEffect::DemandResponses(2),
            _ => return None,
        };
        Some(effect)
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
