//! Team handlers
//!
//! The four `getTeams*` operations.

use axum::{extract::State, Json};
use serde::Serialize;

use super::payload::Payload;
use crate::app::TeamQuery;
use crate::domain::entities::Team;
use crate::error::AppError;
use crate::AppState;

/// A Team row keyed by column name
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamRow {
    pub team_id: i32,
    pub team_location: String,
    pub nickname: String,
    pub conference: String,
    pub division: String,
}

impl From<Team> for TeamRow {
    fn from(team: Team) -> Self {
        Self {
            team_id: team.id.0,
            team_location: team.location,
            nickname: team.nickname,
            conference: team.conference,
            division: team.division,
        }
    }
}

fn rows(teams: Vec<Team>) -> Json<Vec<TeamRow>> {
    Json(teams.into_iter().map(TeamRow::from).collect())
}

/// POST /functions/getTeams
pub async fn get_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamRow>>, AppError> {
    Ok(rows(state.team_service.get_teams().await?))
}

/// POST /functions/getTeamsOrderedByDiv
pub async fn get_teams_ordered_by_div(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamRow>>, AppError> {
    Ok(rows(state.team_service.get_teams_ordered_by_division().await?))
}

/// POST /functions/getTeamsByConference
pub async fn get_teams_by_conference(
    State(state): State<AppState>,
    Payload(query): Payload<TeamQuery>,
) -> Result<Json<Vec<TeamRow>>, AppError> {
    Ok(rows(state.team_service.get_teams_by_conference(&query).await?))
}

/// POST /functions/getTeamsByDivision
pub async fn get_teams_by_division(
    State(state): State<AppState>,
    Payload(query): Payload<TeamQuery>,
) -> Result<Json<Vec<TeamRow>>, AppError> {
    Ok(rows(state.team_service.get_teams_by_division(&query).await?))
}
