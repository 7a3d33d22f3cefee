//! PostgreSQL adapter for PlayerRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    Set,
};

use crate::domain::entities::{
    NewPlayer, Page, Player, PlayerFilter, PlayerId, TeamId, WriteResult,
};
use crate::domain::ports::PlayerRepository;
use crate::entity::player;
use crate::error::DomainError;

/// PostgreSQL implementation of PlayerRepository
pub struct PostgresPlayerRepository {
    db: DatabaseConnection,
}

impl PostgresPlayerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Player select for a filter. Paged reads are ordered by id so pages never overlap.
fn find_query(filter: &PlayerFilter, page: Page) -> Select<player::Entity> {
    let mut query = player::Entity::find();
    if let Some(team_id) = filter.team_id {
        query = query.filter(player::Column::TeamId.eq(team_id.0));
    }
    if let Some(position) = &filter.position {
        query = query.filter(player::Column::Position.eq(position.as_str()));
    }
    if let Some(limit) = page.limit {
        query = query
            .order_by_asc(player::Column::PlayerId)
            .limit(limit)
            .offset(page.offset.unwrap_or(0));
    }
    query
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn find(&self, filter: &PlayerFilter, page: Page) -> Result<Vec<Player>, DomainError> {
        let results = find_query(filter, page)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_positions(&self) -> Result<Vec<String>, DomainError> {
        player::Entity::find()
            .select_only()
            .column(player::Column::Position)
            .distinct()
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn create(&self, player: &NewPlayer) -> Result<WriteResult, DomainError> {
        let model = player::ActiveModel {
            team_id: Set(player.team_id.0),
            player_name: Set(player.name.clone()),
            position: Set(player.position.clone()),
            ..Default::default()
        };

        let result = player::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(WriteResult::inserted(result.last_insert_id))
    }

    async fn delete_many(&self, ids: &[PlayerId]) -> Result<WriteResult, DomainError> {
        let result = player::Entity::delete_many()
            .filter(player::Column::PlayerId.is_in(ids.iter().map(|id| id.0)))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(WriteResult::deleted(result.rows_affected))
    }
}

/// Convert SeaORM model to domain entity
impl From<player::Model> for Player {
    fn from(model: player::Model) -> Self {
        Player {
            id: PlayerId(model.player_id),
            team_id: TeamId(model.team_id),
            name: model.player_name,
            position: model.position,
        }
    }
}
