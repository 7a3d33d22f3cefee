//! View filters and the operation each filter selects

use async_trait::async_trait;
use chrono::NaiveDate;

use super::state::Keyed;
use crate::client::{ClientError, GameRow, NflApi, PlayerRow, TeamRow};

/// A view's filter: picks one read operation and runs it
#[async_trait]
pub trait ViewFilter: Clone + Send + Sync {
    type Row: Keyed + Clone + Send;

    /// Wire name of the operation this filter runs
    fn operation(&self) -> &'static str;

    async fn fetch(&self, api: &dyn NflApi) -> Result<Vec<Self::Row>, ClientError>;
}

/// Games view filter. `None` means "All".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamesFilter {
    pub team: Option<i32>,
    pub date: Option<NaiveDate>,
}

#[async_trait]
impl ViewFilter for GamesFilter {
    type Row = GameRow;

    fn operation(&self) -> &'static str {
        match (self.team, self.date) {
            (None, None) => "getGames",
            (Some(_), None) => "getGamesByTeam",
            (None, Some(_)) => "getGamesByDate",
            (Some(_), Some(_)) => "getGamesByTeamAndDate",
        }
    }

    async fn fetch(&self, api: &dyn NflApi) -> Result<Vec<GameRow>, ClientError> {
        match (self.team, self.date) {
            (None, None) => api.get_games().await,
            (Some(team), None) => api.get_games_by_team(team).await,
            (None, Some(date)) => api.get_games_by_date(date).await,
            (Some(team), Some(date)) => api.get_games_by_team_and_date(team, date).await,
        }
    }
}

/// Players view filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayersFilter {
    pub team: Option<i32>,
    pub position: Option<String>,
}

#[async_trait]
impl ViewFilter for PlayersFilter {
    type Row = PlayerRow;

    fn operation(&self) -> &'static str {
        match (self.team, self.position.as_deref()) {
            (None, None) => "getPlayers",
            (Some(_), None) => "getPlayersOnTeam",
            (None, Some(_)) => "getPlayersByPos",
            (Some(_), Some(_)) => "getPlayersByTeamAndPos",
        }
    }

    async fn fetch(&self, api: &dyn NflApi) -> Result<Vec<PlayerRow>, ClientError> {
        match (self.team, self.position.as_deref()) {
            (None, None) => api.get_players().await,
            (Some(team), None) => api.get_players_on_team(team).await,
            (None, Some(position)) => api.get_players_by_pos(position).await,
            (Some(team), Some(position)) => api.get_players_by_team_and_pos(team, position).await,
        }
    }
}

/// Teams view filter. A division only applies within a conference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamsFilter {
    conference: Option<String>,
    division: Option<String>,
}

impl TeamsFilter {
    pub fn new(conference: Option<String>, division: Option<String>) -> Self {
        let mut filter = Self::default();
        filter.set_conference(conference);
        filter.set_division(division);
        filter
    }

    pub fn conference(&self) -> Option<&str> {
        self.conference.as_deref()
    }

    pub fn division(&self) -> Option<&str> {
        self.division.as_deref()
    }

    /// Choosing "All" conferences also resets the division
    pub fn set_conference(&mut self, conference: Option<String>) {
        self.conference = conference;
        if self.conference.is_none() {
            self.division = None;
        }
    }

    /// Ignored while no conference is chosen
    pub fn set_division(&mut self, division: Option<String>) {
        if self.conference.is_some() {
            self.division = division;
        }
    }
}

#[async_trait]
impl ViewFilter for TeamsFilter {
    type Row = TeamRow;

    fn operation(&self) -> &'static str {
        match (self.conference(), self.division()) {
            (None, _) => "getTeamsOrderedByDiv",
            (Some(_), None) => "getTeamsByConference",
            (Some(_), Some(_)) => "getTeamsByDivision",
        }
    }

    async fn fetch(&self, api: &dyn NflApi) -> Result<Vec<TeamRow>, ClientError> {
        match (self.conference(), self.division()) {
            (None, _) => api.get_teams_ordered_by_div().await,
            (Some(conference), None) => api.get_teams_by_conference(conference).await,
            (Some(conference), Some(division)) => {
                api.get_teams_by_division(conference, division).await
            }
        }
    }
}
