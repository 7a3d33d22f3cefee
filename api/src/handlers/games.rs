//! Game handlers
//!
//! Game reads plus `addGame` and `deleteGames`.

use axum::{extract::State, Json};
use serde::Serialize;

use super::payload::Payload;
use super::write_result::WriteResultResponse;
use crate::app::{AddGameRequest, DeleteGamesRequest, GameQuery};
use crate::domain::dates::format_game_date;
use crate::domain::entities::GameSummary;
use crate::error::AppError;
use crate::AppState;

/// A game joined with both teams, date rendered `MM/DD/YYYY`
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameRow {
    pub game_id: i32,
    pub game_date: String,
    pub home_team_location: String,
    pub home_team_nickname: String,
    pub away_team_location: String,
    pub away_team_nickname: String,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

impl From<GameSummary> for GameRow {
    fn from(game: GameSummary) -> Self {
        Self {
            game_id: game.id.0,
            game_date: format_game_date(game.date),
            home_team_location: game.home_team_location,
            home_team_nickname: game.home_team_nickname,
            away_team_location: game.away_team_location,
            away_team_nickname: game.away_team_nickname,
            home_team_score: game.home_team_score,
            away_team_score: game.away_team_score,
        }
    }
}

fn rows(games: Vec<GameSummary>) -> Json<Vec<GameRow>> {
    Json(games.into_iter().map(GameRow::from).collect())
}

/// POST /functions/getGames
pub async fn get_games(
    State(state): State<AppState>,
    Payload(query): Payload<GameQuery>,
) -> Result<Json<Vec<GameRow>>, AppError> {
    Ok(rows(state.game_service.get_games(&query).await?))
}

/// POST /functions/getGamesByTeam
pub async fn get_games_by_team(
    State(state): State<AppState>,
    Payload(query): Payload<GameQuery>,
) -> Result<Json<Vec<GameRow>>, AppError> {
    Ok(rows(state.game_service.get_games_by_team(&query).await?))
}

/// POST /functions/getGamesByDate
pub async fn get_games_by_date(
    State(state): State<AppState>,
    Payload(query): Payload<GameQuery>,
) -> Result<Json<Vec<GameRow>>, AppError> {
    Ok(rows(state.game_service.get_games_by_date(&query).await?))
}

/// POST /functions/getGamesByTeamAndDate
pub async fn get_games_by_team_and_date(
    State(state): State<AppState>,
    Payload(query): Payload<GameQuery>,
) -> Result<Json<Vec<GameRow>>, AppError> {
    Ok(rows(
        state.game_service.get_games_by_team_and_date(&query).await?,
    ))
}

/// POST /functions/addGame
pub async fn add_game(
    State(state): State<AppState>,
    Payload(request): Payload<AddGameRequest>,
) -> Result<Json<WriteResultResponse>, AppError> {
    let result = state.game_service.add_game(&request).await?;
    Ok(Json(result.into()))
}

/// POST /functions/deleteGames
pub async fn delete_games(
    State(state): State<AppState>,
    Payload(request): Payload<DeleteGamesRequest>,
) -> Result<Json<WriteResultResponse>, AppError> {
    let result = state.game_service.delete_games(&request).await?;
    Ok(Json(result.into()))
}
