use crate::model::hand::Hand;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

/// Seats alternate between the two teams: 0 and 2 are partners, as are
/// 1 and 3.
pub const fn select_team(player_index: usize) -> Team {
    if player_index % 2 == 0 { Team::One } else { Team::Two }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::One => f.write_str("team 1"),
            Team::Two => f.write_str("team 2"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: String,
    pub name: String,
    pub hand: Hand,
    pub team: Team,
}

#[cfg(test)]
mod tests {
    use super::{Team, select_team};

    #[test]
    fn teams_alternate_by_seat() {
        assert_eq!(select_team(0), Team::One);
        assert_eq!(select_team(1), Team::Two);
        assert_eq!(select_team(2), Team::One);
        assert_eq!(select_team(3), Team::Two);
    }

    #[test]
    fn display_names_the_team() {
        assert_eq!(Team::One.to_string(), "team 1");
    }
}
