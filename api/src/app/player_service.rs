//! Player service
//!
//! Validates player payloads and maps each player operation to one
//! repository call.

use std::sync::Arc;

use super::requests::{AddPlayerRequest, DeletePlayersRequest, PlayerQuery};
use crate::domain::entities::{Page, Player, PlayerFilter, WriteResult};
use crate::domain::ports::PlayerRepository;
use crate::error::AppError;

/// Service for reading and writing players
pub struct PlayerService<PR>
where
    PR: PlayerRepository,
{
    players: Arc<PR>,
}

impl<PR> PlayerService<PR>
where
    PR: PlayerRepository,
{
    pub fn new(players: Arc<PR>) -> Self {
        Self { players }
    }

    /// `getPlayers`
    pub async fn get_players(&self, query: &PlayerQuery) -> Result<Vec<Player>, AppError> {
        self.find(query, false, false).await
    }

    /// `getPlayersOnTeam`
    pub async fn get_players_on_team(&self, query: &PlayerQuery) -> Result<Vec<Player>, AppError> {
        self.find(query, true, false).await
    }

    /// `getPlayersByPos`
    pub async fn get_players_by_position(
        &self,
        query: &PlayerQuery,
    ) -> Result<Vec<Player>, AppError> {
        self.find(query, false, true).await
    }

    /// `getPlayersByTeamAndPos`
    pub async fn get_players_by_team_and_position(
        &self,
        query: &PlayerQuery,
    ) -> Result<Vec<Player>, AppError> {
        self.find(query, true, true).await
    }

    /// `getPositions`: distinct positions across all players
    pub async fn get_positions(&self) -> Result<Vec<String>, AppError> {
        let positions = self.players.find_positions().await?;
        tracing::debug!(count = positions.len(), "Loaded positions");
        Ok(positions)
    }

    /// `addPlayer`
    pub async fn add_player(&self, request: &AddPlayerRequest) -> Result<WriteResult, AppError> {
        let player = request.validate()?;
        let result = self.players.create(&player).await?;
        tracing::info!(
            team_id = %player.team_id,
            position = %player.position,
            insert_id = ?result.insert_id,
            "Added player"
        );
        Ok(result)
    }

    /// `deletePlayers`: an empty list never reaches storage
    pub async fn delete_players(
        &self,
        request: &DeletePlayersRequest,
    ) -> Result<WriteResult, AppError> {
        let ids = request.validate()?;
        if ids.is_empty() {
            return Ok(WriteResult::deleted(0));
        }
        let result = self.players.delete_many(&ids).await?;
        tracing::info!(
            requested = ids.len(),
            deleted = result.affected_rows,
            "Deleted players"
        );
        Ok(result)
    }

    async fn find(
        &self,
        query: &PlayerQuery,
        by_team: bool,
        by_position: bool,
    ) -> Result<Vec<Player>, AppError> {
        let filter: PlayerFilter = query.filter(by_team, by_position)?;
        let page: Page = query.page()?;
        let players = self.players.find(&filter, page).await?;
        tracing::debug!(?filter, count = players.len(), "Loaded players");
        Ok(players)
    }
}
