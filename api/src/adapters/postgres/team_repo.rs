//! PostgreSQL adapter for TeamRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{Team, TeamFilter, TeamId};
use crate::domain::ports::TeamRepository;
use crate::entity::team;
use crate::error::DomainError;

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    db: DatabaseConnection,
}

impl PostgresTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find(&self, filter: TeamFilter) -> Result<Vec<Team>, DomainError> {
        let query = match filter {
            TeamFilter::All => team::Entity::find(),
            TeamFilter::OrderedByDivision => team::Entity::find()
                .order_by_asc(team::Column::Conference)
                .order_by_asc(team::Column::Division),
            TeamFilter::Conference(conference) => team::Entity::find()
                .filter(team::Column::Conference.eq(conference.to_string())),
            TeamFilter::Division(conference, division) => team::Entity::find()
                .filter(team::Column::Conference.eq(conference.to_string()))
                .filter(team::Column::Division.eq(division.to_string())),
        };

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(Team::from).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<team::Model> for Team {
    fn from(model: team::Model) -> Self {
        Team {
            id: TeamId(model.team_id),
            location: model.team_location,
            nickname: model.nickname,
            conference: model.conference,
            division: model.division,
        }
    }
}
