//! Player domain entity

use serde::{Deserialize, Serialize};

use super::TeamId;

/// Unique identifier for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i32);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player on a team roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub team_id: TeamId,
    pub name: String,
    pub position: String,
}

/// Data needed to add a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub team_id: TeamId,
    pub name: String,
    pub position: String,
}

/// Player read filter. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub team_id: Option<TeamId>,
    pub position: Option<String>,
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        self.team_id.map_or(true, |id| player.team_id == id)
            && self
                .position
                .as_deref()
                .map_or(true, |position| player.position == position)
    }
}
