//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;

use crate::domain::entities::{
    Conference, Division, NewGame, NewPlayer, Player, PlayerId, Team, TeamId,
};

pub fn test_team(id: i32, location: &str, nickname: &str, conference: Conference, division: Division) -> Team {
    Team {
        id: TeamId(id),
        location: location.to_string(),
        nickname: nickname.to_string(),
        conference: conference.to_string(),
        division: division.to_string(),
    }
}

/// A small league spanning both conferences
pub fn test_teams() -> Vec<Team> {
    vec![
        test_team(1, "Buffalo", "Bills", Conference::Afc, Division::East),
        test_team(2, "Dallas", "Cowboys", Conference::Nfc, Division::East),
        test_team(3, "Baltimore", "Ravens", Conference::Afc, Division::North),
        test_team(4, "Chicago", "Bears", Conference::Nfc, Division::North),
        test_team(5, "Miami", "Dolphins", Conference::Afc, Division::East),
    ]
}

pub fn test_player(id: i32, team_id: i32, name: &str, position: &str) -> Player {
    Player {
        id: PlayerId(id),
        team_id: TeamId(team_id),
        name: name.to_string(),
        position: position.to_string(),
    }
}

pub fn test_new_player(team_id: i32, name: &str, position: &str) -> NewPlayer {
    NewPlayer {
        team_id: TeamId(team_id),
        name: name.to_string(),
        position: position.to_string(),
    }
}

pub fn test_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn test_new_game(date: NaiveDate, home: i32, away: i32, home_score: i32, away_score: i32) -> NewGame {
    NewGame {
        date,
        home_team_id: TeamId(home),
        away_team_id: TeamId(away),
        home_team_score: home_score,
        away_team_score: away_score,
    }
}
