//! Player handlers
//!
//! Player reads plus `addPlayer` and `deletePlayers`.

use axum::{extract::State, Json};
use serde::Serialize;

use super::payload::Payload;
use super::write_result::WriteResultResponse;
use crate::app::{AddPlayerRequest, DeletePlayersRequest, PlayerQuery};
use crate::domain::entities::Player;
use crate::error::AppError;
use crate::AppState;

/// A Player row keyed by column name
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerRow {
    pub player_id: i32,
    pub team_id: i32,
    pub player_name: String,
    pub position: String,
}

impl From<Player> for PlayerRow {
    fn from(player: Player) -> Self {
        Self {
            player_id: player.id.0,
            team_id: player.team_id.0,
            player_name: player.name,
            position: player.position,
        }
    }
}

/// One distinct position
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PositionRow {
    pub position: String,
}

fn rows(players: Vec<Player>) -> Json<Vec<PlayerRow>> {
    Json(players.into_iter().map(PlayerRow::from).collect())
}

/// POST /functions/getPlayers
pub async fn get_players(
    State(state): State<AppState>,
    Payload(query): Payload<PlayerQuery>,
) -> Result<Json<Vec<PlayerRow>>, AppError> {
    Ok(rows(state.player_service.get_players(&query).await?))
}

/// POST /functions/getPositions
pub async fn get_positions(
    State(state): State<AppState>,
) -> Result<Json<Vec<PositionRow>>, AppError> {
    let positions = state.player_service.get_positions().await?;
    Ok(Json(
        positions
            .into_iter()
            .map(|position| PositionRow { position })
            .collect(),
    ))
}

/// POST /functions/getPlayersOnTeam
pub async fn get_players_on_team(
    State(state): State<AppState>,
    Payload(query): Payload<PlayerQuery>,
) -> Result<Json<Vec<PlayerRow>>, AppError> {
    Ok(rows(state.player_service.get_players_on_team(&query).await?))
}

/// POST /functions/getPlayersByPos
pub async fn get_players_by_pos(
    State(state): State<AppState>,
    Payload(query): Payload<PlayerQuery>,
) -> Result<Json<Vec<PlayerRow>>, AppError> {
    Ok(rows(
        state.player_service.get_players_by_position(&query).await?,
    ))
}

/// POST /functions/getPlayersByTeamAndPos
pub async fn get_players_by_team_and_pos(
    State(state): State<AppState>,
    Payload(query): Payload<PlayerQuery>,
) -> Result<Json<Vec<PlayerRow>>, AppError> {
    Ok(rows(
        state
            .player_service
            .get_players_by_team_and_position(&query)
            .await?,
    ))
}

/// POST /functions/addPlayer
pub async fn add_player(
    State(state): State<AppState>,
    Payload(request): Payload<AddPlayerRequest>,
) -> Result<Json<WriteResultResponse>, AppError> {
    let result = state.player_service.add_player(&request).await?;
    Ok(Json(result.into()))
}

/// POST /functions/deletePlayers
pub async fn delete_players(
    State(state): State<AppState>,
    Payload(request): Payload<DeletePlayersRequest>,
) -> Result<Json<WriteResultResponse>, AppError> {
    let result = state.player_service.delete_players(&request).await?;
    Ok(Json(result.into()))
}
