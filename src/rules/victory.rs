//! Roles, camps and the win evaluation.

use serde::{Deserialize, Serialize};

/// Hidden identity deciding a seat's win condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Lord,
    Loyalist,
    Rebel,
    Traitor,
}

impl Role {
    /// The side this role wins with.
    #[must_use]
    pub const fn camp(self) -> Camp {
        match self {
            Role::Lord | Role::Loyalist => Camp::Lord,
            Role::Rebel => Camp::Rebel,
            Role::Traitor => Camp::Traitor,
        }
    }
}

/// A winning side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Camp {
    /// Lord and Loyalists.
    Lord,
    Rebel,
    Traitor,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Nobody survived.
    Draw,
    Victory(Camp),
}

impl GameResult {
    /// Check if a role is on the winning side.
    #[must_use]
    pub fn is_winner(&self, role: Role) -> bool {
        match self {
            GameResult::Victory(camp) => role.camp() == *camp,
            GameResult::Draw => false,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Draw => write!(f, "draw"),
            GameResult::Victory(camp) => write!(f, "{camp:?} victory"),
        }
    }
}

/// Evaluate the win condition over the roles of the living players.
///
/// The branches are evaluated in a fixed order: no survivors, a single
/// survivor, a dead Lord, then eliminated Rebels. A dead Lord with any
/// Rebel alive is always a Rebel victory, whoever else survives.
pub fn check_win<I>(living_roles: I) -> Option<GameResult>
where
    I: IntoIterator<Item = Role>,
{
    let alive: Vec<Role> = living_roles.into_iter().collect();

    match alive.as_slice() {
        [] => return Some(GameResult::Draw),
        [only] => return Some(GameResult::Victory(only.camp())),
        _ => {}
    }

    let any = |role: Role| alive.contains(&role);

    if !any(Role::Lord) {
        return if any(Role::Rebel) {
            Some(GameResult::Victory(Camp::Rebel))
        } else if any(Role::Traitor) {
            Some(GameResult::Victory(Camp::Traitor))
        } else {
            None
        };
    }

    if !any(Role::Rebel) {
        return if any(Role::Traitor) {
            None
        } else {
            Some(GameResult::Victory(Camp::Lord))
        };
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use Role::*;

    #[test]
    fn test_no_survivors_is_draw() {
        assert_eq!(check_win([]), Some(GameResult::Draw));
    }

    #[test]
    fn test_single_survivor_wins_for_their_camp() {
        assert_eq!(check_win([Traitor]), Some(GameResult::Victory(Camp::Traitor)));
        assert_eq!(check_win([Loyalist]), Some(GameResult::Victory(Camp::Lord)));
    }

    #[test]
    fn test_dead_lord_with_rebel_beats_traitor() {
        assert_eq!(
            check_win([Rebel, Traitor, Loyalist]),
            Some(GameResult::Victory(Camp::Rebel))
        );
    }

    #[test]
    fn test_dead_lord_without_rebels() {
        assert_eq!(check_win([Traitor, Loyalist]), Some(GameResult::Victory(Camp::Traitor)));
        assert_eq!(check_win([Loyalist, Loyalist]), None);
    }

    #[test]
    fn test_rebels_gone() {
        assert_eq!(check_win([Lord, Loyalist]), Some(GameResult::Victory(Camp::Lord)));
        assert_eq!(check_win([Lord, Traitor]), None);
    }

    #[test]
    fn test_ongoing() {
        assert_eq!(check_win([Lord, Rebel, Traitor]), None);
    }

    #[test]
    fn test_is_winner() {
        let result = GameResult::Victory(Camp::Lord);
        assert!(result.is_winner(Lord));
        assert!(result.is_winner(Loyalist));
        assert!(!result.is_winner(Rebel));
        assert!(!GameResult::Draw.is_winner(Lord));
    }
}
