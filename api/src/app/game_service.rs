//! Game service
//!
//! Validates game payloads and maps each game operation to one repository
//! call. All four reads share the same joined listing.

use std::sync::Arc;

use super::requests::{AddGameRequest, DeleteGamesRequest, GameQuery};
use crate::domain::entities::{GameSummary, WriteResult};
use crate::domain::ports::GameRepository;
use crate::error::AppError;

/// Service for reading and writing games
pub struct GameService<GR>
where
    GR: GameRepository,
{
    games: Arc<GR>,
}

impl<GR> GameService<GR>
where
    GR: GameRepository,
{
    pub fn new(games: Arc<GR>) -> Self {
        Self { games }
    }

    /// `getGames`
    pub async fn get_games(&self, query: &GameQuery) -> Result<Vec<GameSummary>, AppError> {
        self.find(query, false, false).await
    }

    /// `getGamesByTeam`: games where the team played home or away
    pub async fn get_games_by_team(
        &self,
        query: &GameQuery,
    ) -> Result<Vec<GameSummary>, AppError> {
        self.find(query, true, false).await
    }

    /// `getGamesByDate`
    pub async fn get_games_by_date(
        &self,
        query: &GameQuery,
    ) -> Result<Vec<GameSummary>, AppError> {
        self.find(query, false, true).await
    }

    /// `getGamesByTeamAndDate`
    pub async fn get_games_by_team_and_date(
        &self,
        query: &GameQuery,
    ) -> Result<Vec<GameSummary>, AppError> {
        self.find(query, true, true).await
    }

    /// `addGame`
    pub async fn add_game(&self, request: &AddGameRequest) -> Result<WriteResult, AppError> {
        let game = request.validate()?;
        let result = self.games.create(&game).await?;
        tracing::info!(
            date = %game.date,
            home_team_id = %game.home_team_id,
            away_team_id = %game.away_team_id,
            insert_id = ?result.insert_id,
            "Added game"
        );
        Ok(result)
    }

    /// `deleteGames`: an empty list never reaches storage
    pub async fn delete_games(&self, request: &DeleteGamesRequest) -> Result<WriteResult, AppError> {
        let ids = request.validate()?;
        if ids.is_empty() {
            return Ok(WriteResult::deleted(0));
        }
        let result = self.games.delete_many(&ids).await?;
        tracing::info!(
            requested = ids.len(),
            deleted = result.affected_rows,
            "Deleted games"
        );
        Ok(result)
    }

    async fn find(
        &self,
        query: &GameQuery,
        by_team: bool,
        by_date: bool,
    ) -> Result<Vec<GameSummary>, AppError> {
        let filter = query.filter(by_team, by_date)?;
        let page = query.page()?;
        let games = self.games.find_summaries(filter, page).await?;
        tracing::debug!(?filter, count = games.len(), "Loaded games");
        Ok(games)
    }
}
