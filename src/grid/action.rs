//! The four-way directional action set

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the four grid directions.
///
/// The action set is closed: every agent decision and every human move is one
/// of these four variants, and the Q-table allocates exactly one slot per
/// variant. The index mapping is fixed and used for Q-table addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Number of actions.
    pub const COUNT: usize = 4;

    /// Fixed index of this action, used for Q-table addressing.
    pub const fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    /// Row/column delta applied by this action (before clamping).
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// Lowercase name, matching the `FromStr` representation.
    pub const fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Action::Up),
            "down" | "d" => Ok(Action::Down),
            "left" | "l" => Ok(Action::Left),
            "right" | "r" => Ok(Action::Right),
            _ => Err(Error::ParseAction {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping_is_stable() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn test_parse_display_round_trip() {
        for action in Action::ALL {
            let parsed: Action = action.name().parse().unwrap();
            assert_eq!(parsed, action);
        }
    }

    #[test]
    fn test_parse_accepts_short_and_mixed_case() {
        assert_eq!("U".parse::<Action>().unwrap(), Action::Up);
        assert_eq!(" Right ".parse::<Action>().unwrap(), Action::Right);
    }

    #[test]
    fn test_parse_rejects_unknown_action() {
        let err = "diagonal".parse::<Action>().unwrap_err();
        assert!(matches!(err, Error::ParseAction { .. }));
    }
}
