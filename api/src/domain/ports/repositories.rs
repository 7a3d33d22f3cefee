//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//! Each method runs exactly one statement.

use async_trait::async_trait;

use crate::domain::entities::{
    GameFilter, GameId, GameSummary, NewGame, NewPlayer, Page, Player, PlayerFilter, PlayerId,
    Team, TeamFilter, WriteResult,
};
use crate::error::DomainError;

/// Repository for Team entities (read-only)
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find teams matching a filter
    async fn find(&self, filter: TeamFilter) -> Result<Vec<Team>, DomainError>;
}

/// Repository for Player entities
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find players matching a filter
    async fn find(&self, filter: &PlayerFilter, page: Page) -> Result<Vec<Player>, DomainError>;

    /// Distinct positions across all players
    async fn find_positions(&self) -> Result<Vec<String>, DomainError>;

    /// Insert one player
    async fn create(&self, player: &NewPlayer) -> Result<WriteResult, DomainError>;

    /// Delete every player whose id is listed
    async fn delete_many(&self, ids: &[PlayerId]) -> Result<WriteResult, DomainError>;
}

/// Repository for Game entities
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Find games joined with both teams, ordered by date
    async fn find_summaries(
        &self,
        filter: GameFilter,
        page: Page,
    ) -> Result<Vec<GameSummary>, DomainError>;

    /// Insert one game
    async fn create(&self, game: &NewGame) -> Result<WriteResult, DomainError>;

    /// Delete every game whose id is listed
    async fn delete_many(&self, ids: &[GameId]) -> Result<WriteResult, DomainError>;
}
