//! Response/interrupt protocol types.
//!
//! A response request asks a non-active player for a reactive card: a Dodge
//! against a Slash, a Slash in a Duel exchange, a Peach when dying. What
//! counts as a valid answer, and which armor fallbacks apply, is fixed per
//! request kind in [`RULES`]. The game drives the protocol (see
//! `game::response`); this module only holds the data.
//!
//! ## Lifecycle
//!
//! ```text
//! Requested ──► AutoResolved ─────────────┐
//!     │                                   ▼
//!     └───────► AwaitingManualChoice ──► Resolved
//! ```
//!
//! At most one request is open at a time.

use serde::{Deserialize, Serialize};

use crate::cards::{Armor, BasicKind, CardId, CardKind, Color};
use crate::core::PlayerId;
use crate::heroes::{Skill, SkillEffect, TriggerEvent};

/// Kind of reactive play requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseKind {
    /// Answer a Slash with a Dodge.
    DodgeSlash,
    /// Save a dying player with a Peach.
    PeachDying,
    /// Answer a Duel exchange with a Slash.
    SlashDuel,
}

impl ResponseKind {
    /// The validity rule for this kind.
    #[must_use]
    pub fn rule(self) -> &'static ResponseRule {
        match self {
            ResponseKind::DodgeSlash => &RULES[0],
            ResponseKind::PeachDying => &RULES[1],
            ResponseKind::SlashDuel => &RULES[2],
        }
    }
}

/// One row of the validity table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponseRule {
    pub kind: ResponseKind,

    /// Card that answers the request.
    pub accepts: BasicKind,

    /// Armor allowing a judgment in place of the card, and the judgment
    /// color that counts as an answer.
    pub judgment: Option<(Armor, Color)>,

    /// Armor nullifying an unanswered attack whose card has this color.
    pub immunity: Option<(Armor, Color)>,

    /// Whether an unanswered request deals one damage to the responder.
    pub damage_on_failure: bool,
}

/// The validity table.
pub static RULES: [ResponseRule; 3] = [
    ResponseRule {
        kind: ResponseKind::DodgeSlash,
        accepts: BasicKind::Dodge,
        judgment: Some((Armor::EightTrigrams, Color::Red)),
        immunity: Some((Armor::RenwangShield, Color::Black)),
        damage_on_failure: true,
    },
    ResponseRule {
        kind: ResponseKind::PeachDying,
        accepts: BasicKind::Peach,
        judgment: None,
        immunity: None,
        damage_on_failure: false,
    },
    ResponseRule {
        kind: ResponseKind::SlashDuel,
        accepts: BasicKind::Slash,
        judgment: None,
        immunity: None,
        damage_on_failure: true,
    },
];

/// How an offered card answers a request, if it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    /// The card is the one the rule asks for.
    Direct,
    /// A skill lets this card stand in for it.
    BySkill(Skill),
}

/// Check whether a card of `card` kind answers a `kind` request for a
/// responder with `skills`.
#[must_use]
pub fn answer_with(kind: ResponseKind, card: CardKind, skills: &[Skill]) -> Option<Answer> {
    let offered = card.basic()?;
    if offered == kind.rule().accepts {
        return Some(Answer::Direct);
    }
    let event = TriggerEvent::ResponseCardCheck { request: kind, offered };
    skills.iter().find_map(|skill| match skill.trigger(&event) {
        Some(SkillEffect::AcceptAsResponse) => Some(Answer::BySkill(*skill)),
        _ => None,
    })
}

/// Shorthand for `answer_with(..).is_some()`.
#[must_use]
pub fn is_valid_response(kind: ResponseKind, card: CardKind, skills: &[Skill]) -> bool {
    answer_with(kind, card, skills).is_some()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseState {
    Requested,
    AutoResolved,
    AwaitingManualChoice,
    Resolved,
}

/// What the request is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseContext {
    /// A Slash aimed at the responder.
    Slash { card: CardId },
    /// One exchange of a Duel.
    Duel {
        card: CardId,
        challenger: PlayerId,
        defender: PlayerId,
    },
    /// The responder is at zero health or below.
    Dying,
}

impl ResponseContext {
    /// The card that would deal the damage, if any.
    #[must_use]
    pub const fn damage_card(&self) -> Option<CardId> {
        match self {
            ResponseContext::Slash { card } | ResponseContext::Duel { card, .. } => Some(*card),
            ResponseContext::Dying => None,
        }
    }
}

/// The open request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResponse {
    pub kind: ResponseKind,

    /// Who caused the request (the attacker, or the damage source when dying).
    pub source: PlayerId,

    /// Who must respond.
    pub target: PlayerId,

    pub context: ResponseContext,

    /// Answers needed to satisfy the request.
    pub required: u8,

    /// Answers given so far.
    pub answered: u8,

    pub state: ResponseState,

    /// Set once the request is satisfied.
    pub resolved: bool,
}

impl PendingResponse {
    #[must_use]
    pub fn new(
        kind: ResponseKind,
        source: PlayerId,
        target: PlayerId,
        context: ResponseContext,
    ) -> Self {
        Self {
            kind,
            source,
            target,
            context,
            required: 1,
            answered: 0,
            state: ResponseState::Requested,
            resolved: false,
        }
    }

    /// Answers still missing.
    #[must_use]
    pub fn remaining(&self) -> u8 {
        self.required.saturating_sub(self.answered)
    }

    #[must_use]
    pub fn is_awaiting_choice(&self) -> bool {
        self.state == ResponseState::AwaitingManualChoice
    }
}
