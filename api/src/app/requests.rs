//! Operation payloads
//!
//! Every wire field is optional so a missing value reaches validation and
//! is reported by name instead of failing deserialization.

use serde::Deserialize;

use super::validation::{id_list, page, required, required_text, IntegerInput};
use crate::domain::dates::parse_game_date;
use crate::domain::entities::{
    Conference, Division, GameFilter, GameId, NewGame, NewPlayer, Page, PlayerFilter, PlayerId,
    TeamId,
};
use crate::error::DomainError;

/// Payload of `addGame`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGameRequest {
    pub date: Option<String>,
    pub home_team_id: Option<IntegerInput>,
    pub away_team_id: Option<IntegerInput>,
    pub home_team_score: Option<IntegerInput>,
    pub away_team_score: Option<IntegerInput>,
}

impl AddGameRequest {
    pub fn validate(&self) -> Result<NewGame, DomainError> {
        // Presence first, in wire order, then values.
        let date = required(self.date.as_deref(), "date")?;
        let home = required(self.home_team_id.as_ref(), "homeTeamId")?;
        let away = required(self.away_team_id.as_ref(), "awayTeamId")?;
        let home_score = required(self.home_team_score.as_ref(), "homeTeamScore")?;
        let away_score = required(self.away_team_score.as_ref(), "awayTeamScore")?;

        Ok(NewGame {
            date: parse_game_date(date)?,
            home_team_id: TeamId(home.to_i32("homeTeamId")?),
            away_team_id: TeamId(away.to_i32("awayTeamId")?),
            home_team_score: home_score.to_non_negative("homeTeamScore")?,
            away_team_score: away_score.to_non_negative("awayTeamScore")?,
        })
    }
}

/// Payload of `deleteGames`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGamesRequest {
    pub game_ids: Option<Vec<IntegerInput>>,
}

impl DeleteGamesRequest {
    pub fn validate(&self) -> Result<Vec<GameId>, DomainError> {
        let ids = required(self.game_ids.as_deref(), "gameIds")?;
        Ok(id_list(ids, "gameIds")?.into_iter().map(GameId).collect())
    }
}

/// Payload of `addPlayer`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPlayerRequest {
    pub team_id: Option<IntegerInput>,
    pub player_name: Option<String>,
    pub position: Option<String>,
}

impl AddPlayerRequest {
    pub fn validate(&self) -> Result<NewPlayer, DomainError> {
        let team_id = required(self.team_id.as_ref(), "teamId")?;
        let name = required_text(&self.player_name, "playerName")?;
        let position = required_text(&self.position, "position")?;

        Ok(NewPlayer {
            team_id: TeamId(team_id.to_i32("teamId")?),
            name,
            position,
        })
    }
}

/// Payload of `deletePlayers`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePlayersRequest {
    pub player_ids: Option<Vec<IntegerInput>>,
}

impl DeletePlayersRequest {
    pub fn validate(&self) -> Result<Vec<PlayerId>, DomainError> {
        let ids = required(self.player_ids.as_deref(), "playerIds")?;
        Ok(id_list(ids, "playerIds")?.into_iter().map(PlayerId).collect())
    }
}

/// Payload of the `getTeams*` reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamQuery {
    pub conference: Option<String>,
    pub division: Option<String>,
}

impl TeamQuery {
    pub fn conference(&self) -> Result<Conference, DomainError> {
        required_text(&self.conference, "conference")?
            .parse()
            .map_err(DomainError::Validation)
    }

    /// Presence is checked for both fields before either value is parsed
    pub fn conference_and_division(&self) -> Result<(Conference, Division), DomainError> {
        let conference = required_text(&self.conference, "conference")?;
        let division = required_text(&self.division, "division")?;
        Ok((
            conference.parse().map_err(DomainError::Validation)?,
            division.parse().map_err(DomainError::Validation)?,
        ))
    }
}

/// Payload of the `getPlayers*` reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQuery {
    pub team_id: Option<IntegerInput>,
    pub position: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PlayerQuery {
    pub fn position(&self) -> Result<String, DomainError> {
        required_text(&self.position, "position")
    }

    pub fn page(&self) -> Result<Page, DomainError> {
        page(self.limit, self.offset)
    }

    /// Filter on the fields the operation requires. Presence is checked for
    /// both fields before the team id is parsed.
    pub fn filter(&self, by_team: bool, by_position: bool) -> Result<PlayerFilter, DomainError> {
        let team_id = if by_team {
            Some(required(self.team_id.as_ref(), "teamId")?)
        } else {
            None
        };
        let position = if by_position {
            Some(self.position()?)
        } else {
            None
        };

        Ok(PlayerFilter {
            team_id: team_id
                .map(|id| id.to_i32("teamId").map(TeamId))
                .transpose()?,
            position,
        })
    }
}

/// Payload of the `getGames*` reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameQuery {
    pub team_id: Option<IntegerInput>,
    pub date: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl GameQuery {
    pub fn page(&self) -> Result<Page, DomainError> {
        page(self.limit, self.offset)
    }

    /// Filter on the fields the operation requires. Presence is checked for
    /// both fields before either value is parsed.
    pub fn filter(&self, by_team: bool, by_date: bool) -> Result<GameFilter, DomainError> {
        let team_id = if by_team {
            Some(required(self.team_id.as_ref(), "teamId")?)
        } else {
            None
        };
        let date = if by_date {
            Some(required(self.date.as_deref(), "date")?)
        } else {
            None
        };

        Ok(GameFilter {
            team_id: team_id
                .map(|id| id.to_i32("teamId").map(TeamId))
                .transpose()?,
            date: date.map(parse_game_date).transpose()?,
        })
    }
}
