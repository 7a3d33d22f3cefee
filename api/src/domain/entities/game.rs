//! Game domain entity
//!
//! A game is stored once with a home and an away team. Reads join both
//! teams so every row carries the names of both sides.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TeamId;

/// Unique identifier for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub i32);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data needed to record a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub date: NaiveDate,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

/// A game joined with both teams' names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub date: NaiveDate,
    pub home_team_id: TeamId,
    pub home_team_location: String,
    pub home_team_nickname: String,
    pub away_team_id: TeamId,
    pub away_team_location: String,
    pub away_team_nickname: String,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

/// Game read filter. A team matches whether it played at home or away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameFilter {
    pub team_id: Option<TeamId>,
    pub date: Option<NaiveDate>,
}

impl GameFilter {
    pub fn matches(&self, game: &GameSummary) -> bool {
        self.team_id.map_or(true, |id| {
            game.home_team_id == id || game.away_team_id == id
        }) && self.date.map_or(true, |date| game.date == date)
    }
}
